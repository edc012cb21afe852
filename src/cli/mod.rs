//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP API
//! - flights: one-shot listing
//! - quote: one-shot charter quote
//! - airports / aircraft: catalog dumps

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{flights, quote, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
