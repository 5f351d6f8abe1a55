//! # Pajarería Console Library
//!
//! Core library for the bird shop console application.
//! `run` wires stdin/stdout and exit codes; `run_session` drives a session
//! over any reader and writer.
//!
//! ## Module Organization
//! ```text
//! pajareria_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── input.rs        ◄─── Re-prompting line/number reader
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── CLI flags and AppConfig
//! ├── commands/
//! │   ├── mod.rs      ◄─── Console and main menu
//! │   ├── customer.rs ◄─── Gestión de clientes
//! │   ├── catalog.rs  ◄─── Gestión de pájaros
//! │   ├── sale.rs     ◄─── Realizar venta
//! │   ├── report.rs   ◄─── Mostrar ventas
//! │   └── messages.rs ◄─── Operator-facing texts
//! └── error.rs        ◄─── ConsoleError and exit codes
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ◄── menus, prompts, results (exact texts, nothing else)        │
//! │  stderr  ◄── tracing events (filter: --log, else RUST_LOG, else warn)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use pajareria_store::Store;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use commands::Console;
pub use error::{ConsoleError, ConsoleResult};
pub use state::{AppConfig, Cli, DEFAULT_LOG_FILTER};

/// Runs the console application on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse flags ──────────────────────────────────────────────────────► │
/// │     • --no-seed: start with empty repositories                          │
/// │     • --log <FILTER>: tracing filter override                           │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, on stderr                     │
/// │                                                                         │
/// │  3. Build Store ──────────────────────────────────────────────────────► │
/// │     • 2 demo customers, 3 demo birds, no sales                          │
/// │                                                                         │
/// │  4. Main menu loop until "5. Salir" ──────────────────────────────────► │
/// │                                                                         │
/// │  Exit code: 0 normal, 1 input exhausted, 2 I/O, 3 startup               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let config = AppConfig::from(Cli::parse());
    init_tracing(config.log_filter.as_deref());

    info!(seed = config.seed_demo_data, "Starting Pajarería console");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_session(&config, stdin.lock(), stdout.lock()) {
        Ok(()) => {
            info!("Session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Session aborted");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Builds the store described by `config` and runs the main menu until the
/// operator exits.
///
/// ## Errors
/// - `InputExhausted` when `input` ends before "Salir" is chosen
/// - `Io` when reading or writing fails
pub fn run_session<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> ConsoleResult<()> {
    let store = Store::new(config.store_config()).map_err(ConsoleError::Startup)?;

    let mut console = Console::new(store, input, output);
    let result = console.run();

    let mut output = console.into_output();
    output.flush()?;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log debug` / `RUST_LOG=debug` - repository mutations and sale flow
/// - `RUST_LOG=pajareria_store=trace` - store crate only
/// - Default: WARN
fn init_tracing(filter_override: Option<&str>) {
    let filter = match filter_override {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
