use std::process::ExitCode;

use tally::config::Config;
use tally::error::AppResult;
use tally::format::format_amount;
use tally::services::report::StatisticsReport;
use tally::snapshot::Snapshot;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build statistics");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let config = Config::from_env()?;
    tracing::info!(
        "Starting tally {} for {} using {}",
        tally::VERSION,
        config.today,
        config.snapshot_path.display()
    );

    let snapshot = Snapshot::load(&config.snapshot_path)?;
    let report = StatisticsReport::build(&snapshot, &config.filters, config.today);

    tracing::info!(
        net_income = %format_amount(report.net_income.net_income, &config.settings.currency),
        remaining_this_month = %format_amount(
            report.monthly_subscriptions.remaining_expenses,
            &config.settings.currency
        ),
        "Report ready"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
