//! Command-line parsing for the log-return distribution tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! request pipeline and the statistics code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "retdist",
    version,
    about = "Mean and standard deviation of log returns over a date range"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch closing prices for a date range and print their log-return distribution.
    Distribution(DistributionArgs),
    /// Print the recognized interval names as a JSON array.
    Intervals,
}

#[derive(Debug, Parser, Clone)]
pub struct DistributionArgs {
    /// First date of the range (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD", required_unless_present = "request")]
    pub from: Option<NaiveDate>,

    /// Last date of the range (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD", required_unless_present = "request")]
    pub to: Option<NaiveDate>,

    /// Sampling interval (Daily, Weekly, Monthly).
    #[arg(short = 'i', long, default_value = "Daily")]
    pub interval: String,

    /// Read a JSON request body (`{"fromDate","toDate","interval"}`) from a file, or `-` for stdin.
    ///
    /// The response body is printed as JSON, as an HTTP front-end would return it.
    #[arg(long, value_name = "JSON", conflicts_with_all = ["from", "to"])]
    pub request: Option<PathBuf>,

    /// Print the result as JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}
