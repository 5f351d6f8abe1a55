//! # Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--no-seed`, `--log`)
//! 2. `RUST_LOG` for the log filter only
//! 3. Defaults (this file)
//!
//! No domain behaviour depends on the environment.

use clap::Parser;
use pajareria_store::StoreConfig;

/// Log filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "pajareria", version)]
#[command(about = "Gestión de clientes, pájaros y ventas de una pajarería")]
pub struct Cli {
    /// Start with no customers and an empty catalog
    #[arg(long)]
    pub no_seed: bool,

    /// Tracing filter directive, e.g. `debug` or `pajareria_store=trace`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Load the demo customers and catalog at startup.
    pub seed_demo_data: bool,

    /// Overrides `RUST_LOG` when set.
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    /// Seeded store, log filter from the environment.
    fn default() -> Self {
        AppConfig {
            seed_demo_data: true,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// A configuration whose store starts empty.
    pub fn unseeded() -> Self {
        AppConfig {
            seed_demo_data: false,
            ..AppConfig::default()
        }
    }

    /// The store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            seed_demo_data: self.seed_demo_data,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            seed_demo_data: !cli.no_seed,
            log_filter: cli.log,
        }
    }
}
