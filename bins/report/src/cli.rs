//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Print treasury reports for a transaction snapshot as JSON.
#[derive(Parser, Debug)]
#[command(name = "bendahara")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file; overrides `snapshot.path` from the configuration
    #[arg(short, long, value_name = "FILE", global = true)]
    pub snapshot: Option<PathBuf>,

    /// The report to print (default: monthly report of the current month)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested report, falling back to the current month's report.
    pub fn report(&self) -> Command {
        self.command.unwrap_or(Command::Monthly {
            year: None,
            month: None,
        })
    }
}

/// Reports the CLI can print.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Monthly report with income and expense by division
    Monthly {
        /// Year (default: current year)
        year: Option<i32>,
        /// Month 1-12 (default: current month)
        month: Option<u32>,
    },
    /// Overall and current-month totals with the division breakdown of a
    /// month, or of a whole year when no month is given
    Dashboard {
        /// Year (default: current year)
        year: Option<i32>,
        /// Month 1-12 (default: whole year when a year is given)
        month: Option<u32>,
    },
    /// Chronological statement lines with running balance
    Statement {
        /// Year (default: current year)
        year: Option<i32>,
        /// Month 1-12 (default: current month)
        month: Option<u32>,
    },
    /// Income and expense for each month of a year
    Series {
        /// Year (default: current year)
        year: Option<i32>,
    },
    /// Years that have transactions, newest first
    Years,
}
