//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - parses CLI arguments
//! - resolves upstream configuration
//! - runs the distribution pipeline and prints the result

use std::io::Read;
use std::path::Path;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, DistributionArgs};
use crate::config::UpstreamConfig;
use crate::data::{BarSource, PolygonClient};
use crate::domain::{DistributionRequest, DistributionResult, Interval};
use crate::error::{AppError, DistributionError};

pub mod pipeline;

/// Entry point for the `retdist` binary.
pub fn run() -> Result<(), AppError> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Distribution(args) => handle_distribution(args),
        Command::Intervals => handle_intervals(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn handle_distribution(args: DistributionArgs) -> Result<(), AppError> {
    // Configuration problems are fatal before any request is looked at.
    let config = UpstreamConfig::from_env()?;
    let client = PolygonClient::new(config);

    if let Some(path) = &args.request {
        let raw = read_request(path)?;
        let response = respond(&client, &raw);
        println!("{}", response.body);
        return response.into_result();
    }

    let (Some(from), Some(to)) = (args.from, args.to) else {
        return Err(AppError::new(2, "Both --from and --to are required."));
    };
    let outcome = pipeline::compute_distribution(&client, from, to, &args.interval);

    if args.json {
        let response = ApiResponse::from_outcome(outcome);
        println!("{}", response.body);
        return response.into_result();
    }

    let result = outcome?;
    println!("{}", crate::report::format_distribution(&result));
    Ok(())
}

fn handle_intervals() -> Result<(), AppError> {
    let names = serde_json::to_string(&Interval::names())
        .map_err(|e| AppError::new(1, format!("Failed to encode interval list: {e}")))?;
    println!("{names}");
    Ok(())
}

fn read_request(path: &Path) -> Result<String, AppError> {
    let mut raw = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| AppError::new(2, format!("Failed to read request from stdin: {e}")))?;
    } else {
        raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::new(2, format!("Failed to read request '{}': {e}", path.display())))?;
    }
    Ok(raw)
}

/// Status + JSON body, as an HTTP front-end would send them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn from_outcome(outcome: Result<DistributionResult, DistributionError>) -> Self {
        match outcome {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(body) => Self { status: 200, body },
                Err(e) => Self::from_error(&DistributionError::Upstream(format!("failed to encode result: {e}"))),
            },
            Err(err) => Self::from_error(&err),
        }
    }

    pub fn from_error(err: &DistributionError) -> Self {
        let message = if err.is_client_error() {
            format!("Request has invalid data: {err}")
        } else {
            tracing::error!(error = %err, "Distribution request failed.");
            format!("An error occurred while processing the request: {err}")
        };
        Self {
            status: err.status_code(),
            body: Value::String(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Map to a process result: 400 exits with 2, any other failure with 4.
    pub fn into_result(self) -> Result<(), AppError> {
        let message = match self.body {
            Value::String(s) => s,
            other => other.to_string(),
        };
        match self.status {
            200 => Ok(()),
            400 => Err(AppError::new(2, message)),
            _ => Err(AppError::new(4, message)),
        }
    }
}

/// Handle one raw JSON request body against `source`.
pub fn respond<S: BarSource + ?Sized>(source: &S, raw_body: &str) -> ApiResponse {
    let request: DistributionRequest = match serde_json::from_str(raw_body) {
        Ok(req) => req,
        Err(e) => return ApiResponse::from_error(&DistributionError::InvalidRequest(e.to_string())),
    };
    ApiResponse::from_outcome(pipeline::run_request(source, &request))
}
