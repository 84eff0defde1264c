//! Bendahara report CLI
//!
//! Reads a transaction snapshot and prints the requested report as JSON.

mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bendahara_core::{ReportBuilder, ReportOptions, Snapshot, SystemClock};
use bendahara_shared::{AppConfig, AppError};

use cli::{Cli, Command};

fn main() {
    // Usage errors exit with status 2 before anything is loaded
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bendahara=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        match err.downcast_ref::<AppError>() {
            Some(app) => {
                eprintln!("error[{}]: {err:#}", app.error_code());
                std::process::exit(app.exit_code());
            }
            None => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    let path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));
    let snapshot = load_snapshot(&path)?;
    info!(
        path = %path.display(),
        records = snapshot.records.len(),
        divisions = snapshot.options.divisions.len(),
        "Snapshot loaded"
    );
    for issue in snapshot.inconsistent_records() {
        warn!(%issue, "Record excluded from totals");
    }

    let builder = ReportBuilder::new(Arc::new(SystemClock)).with_options(ReportOptions {
        active_only: config.report.active_only,
        unassigned_label: config.report.unassigned_label.clone(),
    });

    let output = match cli.report() {
        Command::Monthly { year, month } => {
            serde_json::to_string_pretty(&builder.monthly_report(&snapshot, year, month))?
        }
        Command::Dashboard { year, month } => {
            let report = builder.aggregate_report(&snapshot, year, month);
            let format = config.report.money_format();
            info!(
                balance = %format.format(report.balance),
                this_month = %format.format_signed(report.current_month_balance),
                "Dashboard computed"
            );
            serde_json::to_string_pretty(&report)?
        }
        Command::Statement { year, month } => {
            let statement = builder.monthly_report(&snapshot, year, month).statement();
            serde_json::to_string_pretty(&statement)?
        }
        Command::Series { year } => {
            serde_json::to_string_pretty(&builder.monthly_series(&snapshot, year))?
        }
        Command::Years => serde_json::to_string(&builder.available_years(&snapshot))?,
    };

    println!("{output}");
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Snapshot(format!("{}: {e}", path.display())))
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot = serde_json::from_str(&raw)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to decode snapshot {}", path.display()))?;
    Ok(snapshot)
}
