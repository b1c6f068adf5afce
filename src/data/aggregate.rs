use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use super::filter::Subset;

/// How many job titles the title/size cross-tabulation keeps by default.
pub const DEFAULT_TOP_TITLES: usize = 5;

// ---------------------------------------------------------------------------
// Remote-ratio distribution
// ---------------------------------------------------------------------------

/// Count records per remote-work percentage. Counts sum to `subset.len()`;
/// an empty subset yields an empty map.
pub fn remote_ratio_distribution(subset: &Subset) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for rec in subset.records() {
        *counts.entry(rec.remote_ratio).or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Top job titles × company size
// ---------------------------------------------------------------------------

/// One row of the title/size cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSizeRow {
    pub job_title: String,
    /// Total occurrences of the title in the subset.
    pub total: usize,
    /// Count per company-size code; zero-filled over all sizes present in
    /// the subset.
    pub by_size: BTreeMap<String, usize>,
}

/// Cross-tabulation of the most frequent job titles by company size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSizeTable {
    /// All company-size codes present in the subset, sorted.
    pub company_sizes: Vec<String>,
    /// Rows in descending total order; ties keep first-occurrence order.
    pub rows: Vec<TitleSizeRow>,
}

/// Compute per-title totals, keep the `n` most frequent titles, and
/// cross-tabulate those by company size.
///
/// Ranking must be reproducible across runs, so ties are broken by the order
/// in which titles first occur in the subset (the sort below is stable and
/// the candidate list is built in encounter order). Fewer than `n` distinct
/// titles simply yields fewer rows.
pub fn top_job_titles_by_size(subset: &Subset, n: usize) -> TitleSizeTable {
    let mut encounter_order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, usize> = HashMap::new();
    let mut sizes: BTreeSet<String> = BTreeSet::new();

    for rec in subset.records() {
        if !totals.contains_key(&rec.job_title) {
            encounter_order.push(rec.job_title.clone());
        }
        *totals.entry(rec.job_title.clone()).or_insert(0) += 1;
        sizes.insert(rec.company_size.clone());
    }

    let mut ranked: Vec<(String, usize)> = encounter_order
        .into_iter()
        .map(|title| {
            let total = totals[&title];
            (title, total)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);

    let company_sizes: Vec<String> = sizes.into_iter().collect();
    let mut rows: Vec<TitleSizeRow> = ranked
        .into_iter()
        .map(|(job_title, total)| TitleSizeRow {
            by_size: company_sizes.iter().map(|s| (s.clone(), 0)).collect(),
            job_title,
            total,
        })
        .collect();

    for rec in subset.records() {
        if let Some(row) = rows.iter_mut().find(|r| r.job_title == rec.job_title) {
            if let Some(cell) = row.by_size.get_mut(&rec.company_size) {
                *cell += 1;
            }
        }
    }

    TitleSizeTable {
        company_sizes,
        rows,
    }
}

// ---------------------------------------------------------------------------
// Per-location statistics
// ---------------------------------------------------------------------------

/// Record count and mean salary for one company location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStat {
    pub company_location: String,
    pub count: usize,
    pub mean_salary: f64,
}

/// Group by company location; one row per location present in the subset,
/// ordered by location code. A row exists only when its group has at least
/// one record, so the mean is always defined.
pub fn location_stats(subset: &Subset) -> Vec<LocationStat> {
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for rec in subset.records() {
        let entry = groups.entry(rec.company_location.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += rec.salary_in_usd;
    }

    groups
        .into_iter()
        .map(|(location, (count, sum))| LocationStat {
            company_location: location.to_string(),
            count,
            mean_salary: sum / count as f64,
        })
        .collect()
}
