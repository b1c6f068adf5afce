use std::path::PathBuf;

use salary_lens::data::{self, DataError, FilterCriteria};

fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("sample-data");
    path.push(name);
    path
}

#[test]
fn load_csv_fixture() {
    init();
    let dataset = data::load_file(&fixture("salaries.csv")).unwrap();

    assert_eq!(dataset.len(), 12);
    assert_eq!(
        dataset.work_years.iter().copied().collect::<Vec<_>>(),
        [2021, 2022, 2023]
    );
    assert!(dataset.company_locations.contains("US"));
    assert!(dataset.company_locations.contains("IN"));
    // Passthrough columns (experience_level, salary_currency, ...) are
    // ignored; the typed fields come from the named columns.
    assert_eq!(dataset.records[0].job_title, "Data Scientist");
    assert_eq!(dataset.records[0].salary_in_usd, 120_000.0);
}

#[test]
fn load_json_fixture_matches_csv_rows() {
    init();
    let csv = data::load_file(&fixture("salaries.csv")).unwrap();
    let json = data::load_file(&fixture("salaries.json")).unwrap();

    assert_eq!(json.len(), 3);
    assert_eq!(json.records.as_slice(), &csv.records[..3]);
}

#[test]
fn year_2021_scenario() {
    init();
    let dataset = data::load_file(&fixture("salaries.csv")).unwrap();
    let mut criteria = FilterCriteria::default();
    criteria.set("work_year", "2021").unwrap();
    let subset = criteria.apply(&dataset);
    assert_eq!(subset.len(), 2);

    let stats = data::location_stats(&subset);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].company_location, "US");
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats[0].mean_salary, 105_000.0);

    let dist = data::remote_ratio_distribution(&subset);
    assert_eq!(dist.get(&100), Some(&1));
    assert_eq!(dist.get(&0), Some(&1));
}

#[test]
fn independent_chart_contexts_do_not_interact() {
    init();
    let dataset = data::load_file(&fixture("salaries.csv")).unwrap();

    let mut chart = FilterCriteria::default();
    chart.set("company_location", "US").unwrap();
    let mut country = FilterCriteria::default();
    country.set("employment_type", "FT").unwrap();

    let chart_subset = chart.apply(&dataset);
    let country_subset = country.apply(&dataset);
    assert_eq!(chart_subset.len(), 7);
    assert_eq!(country_subset.len(), 9);

    // Recomputing either after using the other gives identical results.
    let again = chart.apply(&dataset);
    assert_eq!(again.indices(), chart_subset.indices());
}

#[test]
fn filtered_to_nothing_yields_empty_aggregates() {
    init();
    let dataset = data::load_file(&fixture("salaries.csv")).unwrap();
    let mut criteria = FilterCriteria::default();
    criteria.set("work_year", "1999").unwrap();
    let subset = criteria.apply(&dataset);

    assert!(subset.is_empty());
    assert!(data::remote_ratio_distribution(&subset).is_empty());
    assert!(data::top_job_titles_by_size(&subset, 5).rows.is_empty());
    assert!(data::location_stats(&subset).is_empty());
}

#[test]
fn top_titles_from_fixture() {
    init();
    let dataset = data::load_file(&fixture("salaries.csv")).unwrap();
    let subset = FilterCriteria::default().apply(&dataset);
    let table = data::top_job_titles_by_size(&subset, 5);

    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.company_sizes, ["L", "M", "S"]);
    assert_eq!(table.rows[0].job_title, "Data Scientist");
    assert_eq!(table.rows[0].total, 4);
    assert_eq!(table.rows[0].by_size.get("M"), Some(&3));
    assert_eq!(table.rows[0].by_size.get("S"), Some(&0));
}

#[test]
fn uncoercible_cell_is_a_schema_error() {
    init();
    let err = data::load_file(&fixture("broken/bad_salary.csv")).unwrap_err();
    match err {
        DataError::Schema { row, column, .. } => {
            assert_eq!(row, 1);
            assert_eq!(column, "salary_in_usd");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn missing_required_column_is_a_load_error() {
    init();
    let err = data::load_file(&fixture("broken/missing_column.csv")).unwrap_err();
    assert!(matches!(err, DataError::Load(_)), "got {err:?}");
    assert!(err.to_string().contains("salary_in_usd"));
}

#[test]
fn missing_source_is_a_load_error() {
    init();
    let err = data::load_file(&fixture("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, DataError::Load(_)), "got {err:?}");
}
