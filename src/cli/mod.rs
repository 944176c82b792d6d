//! CLI module for catalogdb
//!
//! Provides command-line interface for:
//! - init: Create an empty data file
//! - serve: Boot logging and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, CommonArgs};
pub use commands::{init, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
