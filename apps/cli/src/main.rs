//! # Check CLI
//!
//! Computes a retail purchase receipt from the command line.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         check binary                                    │
//! │                                                                         │
//! │  argv ──► args::parse_tokens ──► CheckRequest + SourceSpec             │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │              FileCatalog / Database ──► CatalogSnapshot                │
//! │                                       │  (failure → BAD_REQUEST)        │
//! │                                       ▼                                 │
//! │                        check_core::check::evaluate                      │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │              console + result file ◄── CheckInfo                       │
//! │                                                                         │
//! │  Exit code: 0 on success, 1 on BAD_REQUEST / NOT_ENOUGH_MONEY          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod error;
mod receipt;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, ParsedArgs, SourceSpec};
use check_core::{check, CheckError, CheckInfo};
use check_data::{Database, DbConfig, FileCatalog};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the receipt itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let parsed = args::parse_tokens(&cli.tokens);

    let result = run(&parsed).await;

    if let Err(e) = receipt::print_to_console(&result) {
        warn!(error = %e, "console output failed");
    }
    if let Err(e) = receipt::save_to_file(&result, &parsed.output_path) {
        warn!(error = %e, path = %parsed.output_path.display(), "result file write failed");
    }

    if result.is_success() {
        info!(
            total = %result.total_with_discount(),
            lines = result.records.len(),
            "check completed"
        );
        ExitCode::SUCCESS
    } else {
        warn!(error = %result.error, "check rejected");
        ExitCode::FAILURE
    }
}

/// Loads the catalog snapshot and evaluates the request against it.
///
/// Any data-layer failure becomes a BAD_REQUEST receipt: the distinction
/// between unreachable and query-failed sources lives in the logs only.
async fn run(parsed: &ParsedArgs) -> CheckInfo {
    let snapshot = match &parsed.source {
        SourceSpec::Files {
            products,
            discount_cards,
        } => FileCatalog::new(products, discount_cards).snapshot(),
        SourceSpec::Database {
            url,
            username,
            password,
        } => {
            let config = DbConfig::new(url.as_str(), username.as_str(), password.as_str());
            match Database::connect(&config).await {
                Ok(db) => {
                    let snapshot = db.snapshot().await;
                    db.close().await;
                    snapshot
                }
                Err(e) => Err(e),
            }
        }
    };

    match snapshot {
        Ok(snapshot) => check::evaluate(&parsed.request, &snapshot),
        Err(e) => {
            warn!(error = %e, "catalog source failed; rejecting request");
            CheckInfo::failure(CheckError::BadRequest, parsed.request.save_to_file)
        }
    }
}
