//! # Store Error Types
//!
//! Error types for repository lookups, mutations and the sale flow.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (pajareria-core)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup keys and sale-flow context     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Console menu ← Maps each variant to its Spanish message               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Operator sees "Cliente no encontrado." and the menu continues         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pajareria_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::builder::SaleFlowState;

/// Store operation errors.
///
/// Every variant is recoverable: the console reports it and returns to the
/// menu it came from.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A customer with the same DNI (ignoring case) is already registered.
    #[error("Duplicate dni: '{dni}' already exists")]
    DuplicateDni { dni: String },

    /// Lookup by business key failed.
    ///
    /// ## When This Occurs
    /// - DNI doesn't match any registered customer
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Catalog position outside `1..=size`.
    #[error("Position {position} is out of range (catalog has {size} items)")]
    OutOfRange { position: i64, size: usize },

    /// A sale was attempted with no registered customers.
    #[error("No customers registered")]
    NoCustomers,

    /// A sale was attempted with an empty catalog.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// The sale flow ended without a single line; nothing was recorded.
    #[error("Sale has no lines")]
    EmptySale,

    /// A sale-flow step was called out of order.
    #[error("Sale flow is {actual:?}, expected {expected:?}")]
    InvalidState {
        expected: SaleFlowState,
        actual: SaleFlowState,
    },

    /// Domain validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// Creates a DuplicateDni error.
    pub fn duplicate_dni(dni: impl Into<String>) -> Self {
        StoreError::DuplicateDni { dni: dni.into() }
    }
}

/// Convert domain errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// CoreError::EmptySale      → StoreError::EmptySale
/// CoreError::Validation(e)  → StoreError::Validation(e)
/// ```
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptySale => StoreError::EmptySale,
            CoreError::Validation(e) => StoreError::Validation(e),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
