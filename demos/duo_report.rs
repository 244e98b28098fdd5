use std::process::ExitCode;

use chrono::NaiveDate;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use duo_stats::{DateRange, DuoConfig, DuoStatsClient, ReportOptions};

/// Usage: `duo_report [records-per-page] [page] [from YYYY-MM-DD] [to YYYY-MM-DD]`
#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to build report");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> duo_stats::Result<()> {
    let config = DuoConfig::from_env()?;
    let client = DuoStatsClient::with_config(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = ReportOptions::default();
    if let Some(per_page) = args.first().and_then(|a| a.parse().ok()) {
        options = options.with_records_per_page(per_page);
    }
    if let Some(page) = args.get(1).and_then(|a| a.parse().ok()) {
        options = options.with_page(page);
    }
    if let (Some(from), Some(to)) = (args.get(2), args.get(3)) {
        if let (Some(from), Some(to)) = (parse_day(from), parse_day(to)) {
            options = options.with_date_range(DateRange::from_days(from, to)?);
        }
    }

    let matches = client.get_all_match_groups().await?;
    info!(count = matches.len(), "fetched matches");

    println!("{}", client.report(&matches, options));
    Ok(())
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
