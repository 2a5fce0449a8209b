/// Installs the global `tracing` subscriber: console output plus an optional rolling JSON file.
pub mod tracing_setup;

pub use tracing_setup::{setup_logging, LoggingError, LoggingOptions};
