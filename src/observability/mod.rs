//! Observability
//!
//! Logging is `tracing` throughout; this module only installs the
//! subscriber.

mod logger;

pub use logger::{init_logging, LogFormat};
