//! CLI command implementations
//!
//! `serve` runs the HTTP API; the other commands run one generation or
//! lookup, print JSON to stdout and exit.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::catalog;
use crate::config::AppConfig;
use crate::generator::{Flight, FlightGenerator};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::quote::{compute, QuoteRequest};
use crate::search::{self, FlightQuery, PriceCap};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_format);

    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(&config, host, port),
        Command::Flights {
            config,
            flight_type,
            origin,
            destination,
            date,
            max_price,
            start,
            seed,
        } => {
            let query = FlightQuery {
                flight_type,
                origin,
                destination,
                date,
                max_price: max_price.map(PriceCap::AtMost),
            };
            flights(&config, &query, start, seed)
        }
        Command::Quote {
            origin,
            destination,
            aircraft,
            passengers,
            date,
        } => {
            let mut request = QuoteRequest::new(origin, destination, aircraft, passengers);
            request.date = date;
            quote(&request)
        }
        Command::Airports => write_json(catalog::airports()),
        Command::Aircraft => write_json(catalog::aircraft()),
    }
}

/// Start the HTTP server
///
/// Missing config file means defaults; CLI flags override the file.
pub fn serve(config_path: &Path, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load_or_default(config_path)?;
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    let server = HttpServer::with_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Generate, filter and print a listing
pub fn flights(
    config_path: &Path,
    query: &FlightQuery,
    start: Option<NaiveDate>,
    seed: Option<u64>,
) -> CliResult<()> {
    let mut config = AppConfig::load_or_default(config_path)?;
    if seed.is_some() {
        config.generator.seed = seed;
    }

    let start = start.unwrap_or_else(|| Utc::now().date_naive());
    let listed = list_flights(config, query, start);
    info!(listed = listed.len(), "generated listing");
    write_json(&listed)
}

fn list_flights(config: AppConfig, query: &FlightQuery, start: NaiveDate) -> Vec<Flight> {
    let generator = FlightGenerator::new(config.generator);
    let mut rng = generator.rng();
    search::apply(generator.generate(&mut rng, start), query)
}

/// Price a charter and print the quote
pub fn quote(request: &QuoteRequest) -> CliResult<()> {
    let quote = compute(request)?;
    info!(total_price = quote.total_price, "quoted charter");
    write_json(&quote)
}
