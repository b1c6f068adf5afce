use serde::Serialize;

use super::error::DataError;
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// FilterCriteria – equality constraints over the filterable attributes
// ---------------------------------------------------------------------------

/// Equality constraints narrowing a dataset. One optional value per
/// attribute: `None` means unconstrained, `Some(v)` keeps only records whose
/// attribute equals `v`. All present constraints must hold (conjunction).
///
/// The typed fields can be set directly; [`FilterCriteria::set`] exists for
/// presentation layers that carry attribute names and values as text and
/// want the coercion errors surfaced as [`DataError::Config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub work_year: Option<i32>,
    pub job_title: Option<String>,
    pub employment_type: Option<String>,
    pub remote_ratio: Option<u8>,
    pub company_location: Option<String>,
    pub company_size: Option<String>,
}

impl FilterCriteria {
    /// Set one constraint from textual attribute name and value.
    pub fn set(&mut self, attribute: &str, value: &str) -> Result<(), DataError> {
        match attribute {
            "work_year" => {
                self.work_year = Some(value.parse().map_err(|_| {
                    DataError::Config(format!("work_year '{value}' is not an integer"))
                })?)
            }
            "job_title" => self.job_title = Some(value.to_string()),
            "employment_type" => self.employment_type = Some(value.to_string()),
            "remote_ratio" => {
                let ratio: u8 = value.parse().map_err(|_| {
                    DataError::Config(format!("remote_ratio '{value}' is not an integer"))
                })?;
                // Same domain the loader enforces on records.
                if ratio > 100 {
                    return Err(DataError::Config(format!(
                        "remote_ratio {ratio} is not a percentage"
                    )));
                }
                self.remote_ratio = Some(ratio);
            }
            "company_location" => self.company_location = Some(value.to_string()),
            "company_size" => self.company_size = Some(value.to_string()),
            other => {
                return Err(DataError::Config(format!(
                    "unknown filter attribute '{other}'"
                )))
            }
        }
        Ok(())
    }

    /// Drop the constraint on one attribute.
    pub fn clear(&mut self, attribute: &str) -> Result<(), DataError> {
        match attribute {
            "work_year" => self.work_year = None,
            "job_title" => self.job_title = None,
            "employment_type" => self.employment_type = None,
            "remote_ratio" => self.remote_ratio = None,
            "company_location" => self.company_location = None,
            "company_size" => self.company_size = None,
            other => {
                return Err(DataError::Config(format!(
                    "unknown filter attribute '{other}'"
                )))
            }
        }
        Ok(())
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.work_year.is_none()
            && self.job_title.is_none()
            && self.employment_type.is_none()
            && self.remote_ratio.is_none()
            && self.company_location.is_none()
            && self.company_size.is_none()
    }

    fn matches(&self, rec: &Record) -> bool {
        if let Some(year) = self.work_year {
            if rec.work_year != year {
                return false;
            }
        }
        if let Some(title) = &self.job_title {
            if rec.job_title != *title {
                return false;
            }
        }
        if let Some(emp) = &self.employment_type {
            if rec.employment_type != *emp {
                return false;
            }
        }
        if let Some(ratio) = self.remote_ratio {
            if rec.remote_ratio != ratio {
                return false;
            }
        }
        if let Some(loc) = &self.company_location {
            if rec.company_location != *loc {
                return false;
            }
        }
        if let Some(size) = &self.company_size {
            if rec.company_size != *size {
                return false;
            }
        }
        true
    }

    /// Apply the criteria to a dataset: single linear scan, keeps original
    /// record order, never mutates or copies the records. Empty criteria
    /// yield the full dataset as a subset.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Subset<'a> {
        let indices = dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| self.matches(rec))
            .map(|(i, _)| i)
            .collect();
        Subset { dataset, indices }
    }
}

// ---------------------------------------------------------------------------
// Subset – read-only view over the retained records
// ---------------------------------------------------------------------------

/// The result of applying [`FilterCriteria`] to a dataset: a borrowed view
/// holding the indices of the retained records in their original order.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> Subset<'a> {
    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no record passed the filter.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices of the retained records in the underlying dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over the retained records in original order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.indices.iter().map(|&i| &self.dataset.records[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::sample_dataset;

    #[test]
    fn empty_criteria_keep_every_record() {
        let ds = sample_dataset();
        let subset = FilterCriteria::default().apply(&ds);
        assert_eq!(subset.len(), ds.len());
        let expected: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(subset.indices(), expected.as_slice());
    }

    #[test]
    fn constraints_are_a_conjunction() {
        let ds = sample_dataset();
        let mut criteria = FilterCriteria::default();
        criteria.set("company_location", "US").unwrap();
        criteria.set("work_year", "2021").unwrap();
        let subset = criteria.apply(&ds);

        assert!(subset.len() < ds.len());
        for rec in subset.records() {
            assert_eq!(rec.company_location, "US");
            assert_eq!(rec.work_year, 2021);
        }
        // Every excluded record violates at least one constraint.
        let kept: Vec<usize> = subset.indices().to_vec();
        for (i, rec) in ds.records.iter().enumerate() {
            if !kept.contains(&i) {
                assert!(rec.company_location != "US" || rec.work_year != 2021);
            }
        }
    }

    #[test]
    fn filtering_preserves_source_order() {
        let ds = sample_dataset();
        let mut criteria = FilterCriteria::default();
        criteria.set("company_location", "US").unwrap();
        let subset = criteria.apply(&ds);
        assert!(subset.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_attribute_is_a_config_error() {
        let mut criteria = FilterCriteria::default();
        let err = criteria.set("country", "US").unwrap_err();
        assert!(matches!(err, DataError::Config(_)), "got {err:?}");
        assert!(criteria.is_empty());
    }

    #[test]
    fn out_of_domain_value_is_a_config_error() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.set("work_year", "twenty-one").is_err());
        assert!(criteria.set("remote_ratio", "half").is_err());

        // Parseable but outside the 0..=100 percentage domain.
        let err = criteria.set("remote_ratio", "200").unwrap_err();
        assert!(matches!(err, DataError::Config(_)), "got {err:?}");
        assert_eq!(criteria.remote_ratio, None);

        criteria.set("remote_ratio", "100").unwrap();
        assert_eq!(criteria.remote_ratio, Some(100));
    }

    #[test]
    fn clear_removes_a_single_constraint() {
        let mut criteria = FilterCriteria::default();
        criteria.set("work_year", "2022").unwrap();
        criteria.set("company_size", "M").unwrap();
        criteria.clear("work_year").unwrap();
        assert_eq!(criteria.work_year, None);
        assert_eq!(criteria.company_size.as_deref(), Some("M"));
        assert!(criteria.clear("country").is_err());
    }
}
