//! # Pajarería Console Entry Point
//!
//! ## Startup Sequence
//! 1. Parse CLI flags (`--no-seed`, `--log`)
//! 2. Initialize tracing on stderr
//! 3. Build the store and load the demo data
//! 4. Run the main menu over stdin/stdout
//! 5. Map the session result to an exit code

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs so tests can drive a session
    pajareria_console::run()
}
