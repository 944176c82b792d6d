//! CLI command implementations
//!
//! `init` prepares the data file, `serve` boots logging, checks the data
//! file and runs the HTTP server until Ctrl-C.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::catalog::ProductStore;
use crate::http_server::HttpServer;
use crate::observability::init_logging;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let env_port = std::env::var("PORT").ok();
    match cmd {
        Command::Init { common, force } => init(&Config::resolve(&common, None, env_port)?, force),
        Command::Serve { common, port } => serve(Config::resolve(&common, port, env_port)?),
    }
}

/// Create the data file with a header row and no products.
///
/// Parent directories are created as needed. An existing file is only
/// replaced with `force`.
pub fn init(config: &Config, force: bool) -> CliResult<()> {
    let data_file = config.data_file.as_path();

    if data_file.exists() && !force {
        return Err(CliError::already_initialized(data_file));
    }

    if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io_error(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    ProductStore::open(data_file).initialize()?;

    println!(
        "{}",
        json!({"initialized": true, "data_file": data_file.display().to_string()})
    );
    Ok(())
}

/// Start the HTTP server and block until it stops
pub fn serve(config: Config) -> CliResult<()> {
    init_logging(&config.logging)?;
    ensure_initialized(&config.data_file)?;

    info!(data_file = %config.data_file.display(), "opening catalog");
    let store = Arc::new(ProductStore::open(config.data_file.clone()));
    let server = HttpServer::with_config(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

fn ensure_initialized(data_file: &Path) -> CliResult<()> {
    if data_file.is_file() {
        Ok(())
    } else {
        Err(CliError::not_initialized(data_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use crate::storage::read_products;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            data_file: dir.path().join("archives").join("products.csv"),
            ..Default::default()
        }
    }

    #[test]
    fn test_init_creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        init(&config, false).unwrap();

        assert!(read_products(&config.data_file).unwrap().is_empty());
    }

    #[test]
    fn test_init_twice_requires_force() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        init(&config, false).unwrap();
        let err = init(&config, false).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);

        init(&config, true).unwrap();
    }

    #[test]
    fn test_serve_requires_data_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let err = ensure_initialized(&config.data_file).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotInitialized);
    }
}
