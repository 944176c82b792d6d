//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogdb init [--config <path>] [--data-file <path>] [--force]
//! - catalogdb serve [--config <path>] [--data-file <path>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// catalogdb - a product catalog served from a single CSV file
#[derive(Parser, Debug)]
#[command(name = "catalogdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to configuration file (default: ./catalogdb.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Data file to use instead of the configured one
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty data file containing only the header row
    Init {
        #[command(flatten)]
        common: CommonArgs,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "catalogdb",
            "serve",
            "--data-file",
            "data/products.csv",
            "--port",
            "9000",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { common, port } => {
                assert_eq!(common.data_file, Some(PathBuf::from("data/products.csv")));
                assert!(common.config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_force() {
        let cli = Cli::try_parse_from(["catalogdb", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
