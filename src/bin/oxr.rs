//! oxr — query openexchangerates.org from the command line.
//!
//! Usage:
//!   oxr latest [BASE]                  Latest rates (default base USD)
//!   oxr currencies                     Currency code to name catalog
//!   oxr historical YYYY-MM-DD [BASE]   End-of-day rates for a past day

use chrono::NaiveDate;
use openexchangerates::{ExchangeRatesApi, OxrClient};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!(
        r#"oxr — openexchangerates.org command-line client

USAGE:
    oxr <COMMAND> [ARGS]

COMMANDS:
    latest [BASE]                  Latest rates relative to BASE (default USD)
    currencies                     Currency code to name catalog
    historical YYYY-MM-DD [BASE]   End-of-day rates for a past day
    version                        Show version information
    help                           Show this help message

ENVIRONMENT:
    OXR_APP_ID                     API key (required)
    OXR_BASE_URL                   Service root override
    OXR_HTTP_TIMEOUT_SECS          Request timeout in seconds
    RUST_LOG                       Log filter (default: warn)"#
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("oxr {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    match run(command, &args[1..]).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: &str, rest: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    // one-shot process, nothing to reuse a cache for
    let client = OxrClient::builder().enable_cache(false).build()?;

    let output = match command {
        "latest" => {
            let snapshot = client.latest(rest.first().map(String::as_str)).await?;
            serde_json::to_string_pretty(&*snapshot)?
        }
        "currencies" => serde_json::to_string_pretty(&*client.currencies().await?)?,
        "historical" => {
            let raw = rest.first().ok_or("historical needs a YYYY-MM-DD day")?;
            let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
            let snapshot = client
                .historical(day, rest.get(1).map(String::as_str))
                .await?;
            serde_json::to_string_pretty(&*snapshot)?
        }
        other => {
            print_usage();
            return Err(format!("unknown command: {other}").into());
        }
    };

    println!("{output}");
    client.close().await?;
    Ok(())
}
