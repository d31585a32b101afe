//! `catalog-lookup [config.toml]` - answers one query per stdin line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use catalog_core::{
    logging, not_found_message, unavailable_message, CaptureReport, CatalogConfig,
    CatalogService, LookupOutcome, RecommendationEngine,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "catalog-lookup", version)]
#[command(about = "Look up capture data for one creature name per stdin line")]
struct Args {
    /// TOML configuration file (built-in defaults when omitted)
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => match CatalogConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => CatalogConfig::default(),
    };

    logging::init(&config.logging);

    let service = match CatalogService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // A failed initial load is not fatal; queries retry on demand.
    let _ = service.reload();

    let engine = RecommendationEngine::with_defaults();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let query = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "failed to read query");
                return ExitCode::FAILURE;
            }
        };
        if query.trim().is_empty() {
            continue;
        }

        let answer = match service.query(&query) {
            LookupOutcome::Found(record) => {
                CaptureReport::new(&record, engine.evaluate(&record)).to_text()
            }
            LookupOutcome::NotFound => not_found_message(&query),
            LookupOutcome::Unavailable => unavailable_message(&service.source_description()),
        };

        if writeln!(stdout, "{}", answer).is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
