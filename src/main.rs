//! catalogdb CLI entry point
//!
//! Parses arguments, dispatches to the command and prints any error to
//! stderr with a non-zero exit code. All logic lives in the `cli` module.

use catalogdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
