//! # Tally Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging, to stderr)
//! 3. Load configuration (defaults → file → environment → arguments)
//! 4. Load the catalog
//! 5. Run the menu session on stdin/stdout

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use tally_cli::Args;

fn main() -> ExitCode {
    match tally_cli::run(Args::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Tally exited with an error");
            ExitCode::FAILURE
        }
    }
}
