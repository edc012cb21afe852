//! CLI argument definitions using clap
//!
//! Commands:
//! - emptyleg serve --config <path>
//! - emptyleg flights [filters]
//! - emptyleg quote --origin <id> --destination <id> --aircraft <id> --passengers <n>
//! - emptyleg airports
//! - emptyleg aircraft

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::observability::LogFormat;
use crate::pricing::FlightType;

/// Empty-leg flight catalog and charter quote service
#[derive(Parser, Debug)]
#[command(name = "emptyleg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log line format (text or json)
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file (optional; defaults apply if missing)
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a flight listing and print it as JSON
    Flights {
        /// Path to configuration file (generator settings)
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Flight type (charter, empty_leg)
        #[arg(long = "type")]
        flight_type: Option<FlightType>,

        /// Departure airport id
        #[arg(long)]
        origin: Option<String>,

        /// Arrival airport id
        #[arg(long)]
        destination: Option<String>,

        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Maximum price per seat, USD
        #[arg(long)]
        max_price: Option<u64>,

        /// First day of the schedule (default: today, UTC)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// RNG seed, overrides the configured one
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Price a charter and print the quote as JSON
    Quote {
        /// Departure airport id
        #[arg(long)]
        origin: String,

        /// Arrival airport id
        #[arg(long)]
        destination: String,

        /// Aircraft id
        #[arg(long)]
        aircraft: String,

        /// Number of passengers
        #[arg(long, default_value_t = 1)]
        passengers: u32,

        /// Travel date, echoed in the quote
        #[arg(long)]
        date: Option<String>,
    },

    /// Print the airport catalog as JSON
    Airports,

    /// Print the aircraft catalog as JSON
    Aircraft,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
