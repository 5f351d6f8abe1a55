//! # Console Error Type
//!
//! The only errors that end a session early.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu operation                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  StoreError (duplicate DNI, not found, out of range, ...)              │
//! │         │                                                               │
//! │         └──► commands::messages ──► Spanish line on stdout              │
//! │              menu loop continues                                        │
//! │                                                                         │
//! │  stdin closed / stdout broken                                           │
//! │         │                                                               │
//! │         └──► ConsoleError ──► run() ──► non-zero exit code             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pajareria_store::StoreError;
use std::io;
use thiserror::Error;

/// Fatal session errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Standard input closed before the operator chose "Salir".
    #[error("Input exhausted before exit was selected")]
    InputExhausted,

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store could not be built at startup.
    #[error("Startup failed: {0}")]
    Startup(StoreError),
}

impl ConsoleError {
    /// Process exit code for this error.
    ///
    /// ## Exit Codes
    /// - `1`: input exhausted
    /// - `2`: I/O failure
    /// - `3`: startup failure
    pub fn exit_code(&self) -> u8 {
        match self {
            ConsoleError::InputExhausted => 1,
            ConsoleError::Io(_) => 2,
            ConsoleError::Startup(_) => 3,
        }
    }
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConsoleError::InputExhausted.exit_code(), 1);

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(ConsoleError::from(io_err).exit_code(), 2);

        assert_eq!(ConsoleError::Startup(StoreError::NoCustomers).exit_code(), 3);
    }

    #[test]
    fn test_io_error_message() {
        let err = ConsoleError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
