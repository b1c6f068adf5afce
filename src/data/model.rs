use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single validated row of the job-salary dataset.
///
/// Category attributes (`employment_type`, `company_size`) are kept as their
/// raw codes (`FT`, `M`, ...) rather than closed enums so that datasets with
/// extra codes load without a schema change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub work_year: i32,
    pub job_title: String,
    /// Employment type code, e.g. `FT`, `PT`, `CT`, `FL`.
    pub employment_type: String,
    /// Percentage of remote work; 0, 50 or 100 in practice.
    pub remote_ratio: u8,
    /// Company country code, e.g. `US`, `GB`.
    pub company_location: String,
    /// Company size code, e.g. `S`, `M`, `L`.
    pub company_size: String,
    pub salary_in_usd: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded collection
// ---------------------------------------------------------------------------

/// The full loaded dataset with pre-computed per-attribute value inventories.
///
/// Built once at startup and never mutated afterwards; it is plain owned data
/// and can be shared read-only (`&Dataset` / `Arc<Dataset>`) across threads
/// without locking. The inventories exist for the presentation layer, which
/// needs the distinct values of each attribute to offer filter choices.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in source order.
    pub records: Vec<Record>,
    pub work_years: BTreeSet<i32>,
    pub job_titles: BTreeSet<String>,
    pub employment_types: BTreeSet<String>,
    pub remote_ratios: BTreeSet<u8>,
    pub company_locations: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl Dataset {
    /// Build the value inventories from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut work_years = BTreeSet::new();
        let mut job_titles = BTreeSet::new();
        let mut employment_types = BTreeSet::new();
        let mut remote_ratios = BTreeSet::new();
        let mut company_locations = BTreeSet::new();
        let mut company_sizes = BTreeSet::new();

        for rec in &records {
            work_years.insert(rec.work_year);
            job_titles.insert(rec.job_title.clone());
            employment_types.insert(rec.employment_type.clone());
            remote_ratios.insert(rec.remote_ratio);
            company_locations.insert(rec.company_location.clone());
            company_sizes.insert(rec.company_size.clone());
        }

        Dataset {
            records,
            work_years,
            job_titles,
            employment_types,
            remote_ratios,
            company_locations,
            company_sizes,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
