use std::path::Path;

use log::info;
use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{Dataset, Record};

/// Columns every source must provide. Extra columns are passthrough and
/// ignored (the public Kaggle export carries `experience_level`,
/// `salary_currency` and friends).
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "work_year",
    "job_title",
    "employment_type",
    "remote_ratio",
    "company_location",
    "company_size",
    "salary_in_usd",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming the columns in [`REQUIRED_COLUMNS`]
/// * `.json` – `[{ "work_year": 2023, "job_title": "...", ... }, ...]`
///   (the default `df.to_json(orient='records')` shape)
///
/// The whole file is validated up front: the first unreadable or untypable
/// cell aborts the load, so callers never see a partially typed dataset.
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(DataError::Load(format!(
                "unsupported file extension: .{other}"
            )))
        }
    };

    info!(
        "loaded {} records from {} ({} job titles, {} locations)",
        dataset.len(),
        path.display(),
        dataset.job_titles.len(),
        dataset.company_locations.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DataError::Load(format!("opening {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::Load(format!("reading CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    // Required column → index in the header row.
    let mut column_idx = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, col) in column_idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == col)
            .ok_or_else(|| DataError::Load(format!("CSV missing '{col}' column")))?;
    }
    let [year_idx, title_idx, emp_idx, remote_idx, loc_idx, size_idx, salary_idx] = column_idx;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(|e| DataError::Load(format!("CSV row {row_no}: {e}")))?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        records.push(Record {
            work_year: parse_year(cell(year_idx), row_no)?,
            job_title: required_text(cell(title_idx), row_no, "job_title")?,
            employment_type: required_text(cell(emp_idx), row_no, "employment_type")?,
            remote_ratio: parse_remote_ratio(cell(remote_idx), row_no)?,
            company_location: required_text(cell(loc_idx), row_no, "company_location")?,
            company_size: required_text(cell(size_idx), row_no, "company_size")?,
            salary_in_usd: parse_salary(cell(salary_idx), row_no)?,
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset, DataError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DataError::Load(format!("reading {}: {e}", path.display())))?;
    let root: JsonValue = serde_json::from_str(&text)
        .map_err(|e| DataError::Load(format!("parsing JSON: {e}")))?;

    let rows = root
        .as_array()
        .ok_or_else(|| DataError::Load("expected top-level JSON array".into()))?;

    let mut records = Vec::with_capacity(rows.len());

    for (row_no, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| DataError::Load(format!("row {row_no} is not a JSON object")))?;
        let cell = |col: &'static str| -> Result<String, DataError> {
            let val = obj
                .get(col)
                .ok_or_else(|| DataError::schema(row_no, col, "missing value"))?;
            // Numbers arrive as JSON numbers; render them back to text so the
            // same coercion path handles both sources.
            Ok(match val {
                JsonValue::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
        };

        records.push(Record {
            work_year: parse_year(&cell("work_year")?, row_no)?,
            job_title: required_text(&cell("job_title")?, row_no, "job_title")?,
            employment_type: required_text(&cell("employment_type")?, row_no, "employment_type")?,
            remote_ratio: parse_remote_ratio(&cell("remote_ratio")?, row_no)?,
            company_location: required_text(&cell("company_location")?, row_no, "company_location")?,
            company_size: required_text(&cell("company_size")?, row_no, "company_size")?,
            salary_in_usd: parse_salary(&cell("salary_in_usd")?, row_no)?,
        });
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell coercion helpers
// ---------------------------------------------------------------------------

fn parse_year(s: &str, row: usize) -> Result<i32, DataError> {
    s.parse::<i32>()
        .map_err(|_| DataError::schema(row, "work_year", format!("'{s}' is not an integer year")))
}

fn parse_remote_ratio(s: &str, row: usize) -> Result<u8, DataError> {
    let ratio = s
        .parse::<u8>()
        .map_err(|_| DataError::schema(row, "remote_ratio", format!("'{s}' is not an integer")))?;
    if ratio > 100 {
        return Err(DataError::schema(
            row,
            "remote_ratio",
            format!("{ratio} is not a percentage"),
        ));
    }
    Ok(ratio)
}

fn parse_salary(s: &str, row: usize) -> Result<f64, DataError> {
    let salary = s
        .parse::<f64>()
        .map_err(|_| DataError::schema(row, "salary_in_usd", format!("'{s}' is not a number")))?;
    if !salary.is_finite() || salary < 0.0 {
        return Err(DataError::schema(
            row,
            "salary_in_usd",
            format!("{salary} is not a non-negative amount"),
        ));
    }
    Ok(salary)
}

fn required_text(s: &str, row: usize, column: &'static str) -> Result<String, DataError> {
    if s.is_empty() {
        return Err(DataError::schema(row, column, "empty value"));
    }
    Ok(s.to_string())
}
