//! Observability subsystem for catalogdb
//!
//! Structured logging through `tracing`. Library code only emits events;
//! the binary installs the subscriber once at startup.
//!
//! # Usage
//!
//! ```ignore
//! use catalogdb::observability::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default())?;
//! tracing::info!(path = "products.csv", "catalog ready");
//! ```

mod logger;

pub use logger::{build_filter, init_logging, LogFormat, LoggingConfig, LoggingError};
