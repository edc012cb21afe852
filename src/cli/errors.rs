//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::quote::QuoteError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, runtime)
    IoError,
    /// Rejected command arguments
    InvalidArgument,
    /// HTTP server failed to start or crashed
    ServerFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "EMPTYLEG_CLI_CONFIG_ERROR",
            Self::IoError => "EMPTYLEG_CLI_IO_ERROR",
            Self::InvalidArgument => "EMPTYLEG_CLI_INVALID_ARGUMENT",
            Self::ServerFailed => "EMPTYLEG_CLI_SERVER_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    pub fn server_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<QuoteError> for CliError {
    fn from(e: QuoteError) -> Self {
        Self::invalid_argument(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::invalid_argument("bad origin");
        assert_eq!(err.to_string(), "EMPTYLEG_CLI_INVALID_ARGUMENT: bad origin");
        assert_eq!(err.message(), "bad origin");
    }

    #[test]
    fn test_quote_error_conversion() {
        let err = CliError::from(QuoteError::UnknownAircraft("concorde".to_string()));
        assert_eq!(err.code(), &CliErrorCode::InvalidArgument);
        assert!(err.message().contains("concorde"));
    }
}
