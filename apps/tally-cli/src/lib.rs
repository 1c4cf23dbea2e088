//! # Tally CLI Library
//!
//! Wires configuration, the catalog loader and the interactive session
//! together.
//!
//! ## Module Organization
//! ```text
//! tally_cli/
//! ├── lib.rs          ◄─── You are here (arguments, startup, tracing)
//! ├── config.rs       ◄─── TallyConfig: file + environment overrides
//! ├── menu.rs         ◄─── MenuChoice and menu text
//! ├── session.rs      ◄─── Session: the command interpreter
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run(args)                                                              │
//! │    │                                                                    │
//! │    ├── init_tracing()        stderr, RUST_LOG or --log-level            │
//! │    ├── TallyConfig::load()   defaults → toml → TALLY_* env              │
//! │    └── start(config, stdin, stdout)                                     │
//! │          │                                                              │
//! │          ├── open_catalog()  Full / Partial / Failed → messages         │
//! │          └── Session::run()  until Terminated                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tally_catalog::{load_catalog, CatalogError, LoadOutcome};
use tally_core::Catalog;

use config::TallyConfig;
use error::{AppError, AppResult};
use session::{Session, SessionSummary};

/// Default tracing filter. Warnings only, so stdout stays a clean transcript.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[clap(name = "tally", version, about = "Interactive retail checkout simulator")]
pub struct Args {
    /// Path to the catalog CSV (columns: name, inventory, price)
    pub catalog: Option<PathBuf>,

    /// Configuration file (TOML)
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `tally_core=debug` (overrides RUST_LOG)
    #[clap(long)]
    pub log_level: Option<String>,
}

/// Runs Tally on the process's stdin and stdout.
pub fn run(args: Args) -> AppResult<SessionSummary> {
    init_tracing(args.log_level.as_deref());

    let mut config = TallyConfig::load(args.config)?;
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    start(&config, stdin.lock(), stdout.lock())
}

/// Loads the catalog and runs a session over the given input and output.
pub fn start<R: BufRead, W: Write>(
    config: &TallyConfig,
    input: R,
    mut output: W,
) -> AppResult<SessionSummary> {
    let catalog = open_catalog(&config.catalog.path, &mut output)?;

    let summary = Session::new(catalog, config.pricing, input, &mut output).run()?;
    info!(
        actions = summary.actions,
        checkouts = summary.checkouts,
        revenue = %summary.revenue,
        "Session ended"
    );
    Ok(summary)
}

/// Loads the catalog, reporting problems on `output`.
///
/// A partial catalog is accepted. A missing source, or a catalog with no
/// items, ends the program.
fn open_catalog<W: Write>(path: &Path, output: &mut W) -> AppResult<Catalog> {
    let catalog = match load_catalog(path) {
        LoadOutcome::Full(catalog) => catalog,
        LoadOutcome::Partial { catalog, error } => {
            writeln!(output, "{}", describe(&error))?;
            warn!(%error, items = catalog.len(), "Continuing with partial catalog");
            catalog
        }
        LoadOutcome::Failed(error) => {
            writeln!(output, "{}", describe(&error))?;
            writeln!(output, "Failed to load inventory. Exiting program.")?;
            return Err(error.into());
        }
    };

    if catalog.is_empty() {
        writeln!(output, "Failed to load inventory. Exiting program.")?;
        return Err(AppError::EmptyCatalog);
    }

    Ok(catalog)
}

/// User-facing line for a catalog error.
fn describe(error: &CatalogError) -> String {
    match error {
        CatalogError::SourceNotFound { .. } => {
            "Error: The file path provided does not exist.".to_string()
        }
        e if e.is_data_format() => "Error: Data format error in the file.".to_string(),
        e => format!("Error: {}", e),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-level debug` or `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_core=debug` - Cart and stock mutations only
/// - Default: WARN level
fn init_tracing(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["tally", "stock.csv", "--log-level", "debug"]);
        assert_eq!(args.catalog, Some(PathBuf::from("stock.csv")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());

        let args = Args::parse_from(["tally", "-c", "tally.toml"]);
        assert!(args.catalog.is_none());
        assert_eq!(args.config, Some(PathBuf::from("tally.toml")));
    }

    #[test]
    fn test_describe_errors() {
        let missing = CatalogError::SourceNotFound {
            path: PathBuf::from("x.csv"),
        };
        assert_eq!(
            describe(&missing),
            "Error: The file path provided does not exist."
        );

        let io = CatalogError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(describe(&io), "Error: Failed to read catalog: denied");
    }
}
