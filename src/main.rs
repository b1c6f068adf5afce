use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::json;

use salary_lens::data::{
    self, Dataset, FilterCriteria, LocationStat, TitleSizeTable, DEFAULT_TOP_TITLES,
};

const USAGE: &str = "\
Usage: salary-lens [--json] <dataset.{csv,json}> [-a attr=value]... [-b attr=value]...

  -a attr=value   filter for the remote-work and job-title charts
  -b attr=value   filter for the per-country chart
  --json          emit the aggregates as JSON instead of text tables

Filterable attributes: work_year, job_title, employment_type, remote_ratio,
company_location, company_size. The two chart blocks filter independently.";

struct CliArgs {
    dataset: PathBuf,
    json: bool,
    /// Filters for the distribution / cross-tab block.
    chart_criteria: FilterCriteria,
    /// Filters for the per-country block.
    country_criteria: FilterCriteria,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut dataset = None;
        let mut json = false;
        let mut chart_criteria = FilterCriteria::default();
        let mut country_criteria = FilterCriteria::default();

        while let Some(arg) = args.next() {
            if arg == "--json" {
                json = true;
            } else if arg == "-a" || arg == "-b" {
                let pair = args
                    .next()
                    .with_context(|| format!("{arg} expects attr=value"))?;
                let (attr, value) = pair
                    .split_once('=')
                    .with_context(|| format!("'{pair}' is not attr=value"))?;
                let criteria = if arg == "-a" {
                    &mut chart_criteria
                } else {
                    &mut country_criteria
                };
                criteria.set(attr.trim(), value.trim())?;
            } else if arg == "-h" || arg == "--help" {
                println!("{USAGE}");
                std::process::exit(0);
            } else if dataset.is_none() {
                dataset = Some(PathBuf::from(arg));
            } else {
                bail!("unexpected argument '{arg}'\n\n{USAGE}");
            }
        }

        let Some(dataset) = dataset else {
            bail!("{USAGE}");
        };
        Ok(CliArgs {
            dataset,
            json,
            chart_criteria,
            country_criteria,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = CliArgs::parse(std::env::args().skip(1))?;
    let dataset: Dataset = data::load_file(&cli.dataset)
        .with_context(|| format!("loading {}", cli.dataset.display()))?;

    // One independent subset per chart block.
    let chart_subset = cli.chart_criteria.apply(&dataset);
    let country_subset = cli.country_criteria.apply(&dataset);

    let distribution = data::remote_ratio_distribution(&chart_subset);
    let titles = data::top_job_titles_by_size(&chart_subset, DEFAULT_TOP_TITLES);
    let countries = data::location_stats(&country_subset);

    if cli.json {
        let report = json!({
            "records": dataset.len(),
            "chart_filters": cli.chart_criteria,
            "country_filters": cli.country_criteria,
            "remote_ratio_distribution": distribution,
            "top_job_titles_by_size": titles,
            "location_stats": countries,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_distribution(&distribution, chart_subset.len());
    print_title_table(&titles);
    print_country_stats(&countries, country_subset.len());
    Ok(())
}

fn print_distribution(distribution: &std::collections::BTreeMap<u8, usize>, total: usize) {
    println!("Remote work distribution ({total} records)");
    for (&ratio, &count) in distribution {
        let share = if total > 0 {
            count as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        println!("  {ratio:>3}%  {count:>6}  {share:>5.1}%");
    }
    println!();
}

fn print_title_table(table: &TitleSizeTable) {
    println!("Top {} job titles by company size", DEFAULT_TOP_TITLES);
    let title_width = table
        .rows
        .iter()
        .map(|r| r.job_title.len())
        .max()
        .unwrap_or(9)
        .max("job_title".len());

    print!("  {:<title_width$}  {:>6}", "job_title", "total");
    for size in &table.company_sizes {
        print!("  {size:>5}");
    }
    println!();

    for row in &table.rows {
        print!("  {:<title_width$}  {:>6}", row.job_title, row.total);
        for size in &table.company_sizes {
            print!("  {:>5}", row.by_size.get(size).copied().unwrap_or(0));
        }
        println!();
    }
    println!();
}

fn print_country_stats(stats: &[LocationStat], total: usize) {
    println!("Jobs and mean salary per country ({total} records)");
    for stat in stats {
        println!(
            "  {:<4}  {:>6}  ${:>12.2}",
            stat.company_location, stat.count, stat.mean_salary
        );
    }
}
