//! # pajareria-core: Pure Domain Logic for the Bird Shop
//!
//! This crate is the **heart** of the bird shop console. It contains the
//! domain model as plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pajarería Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Main menu ──► Customers ──► Birds ──► Sale ──► Reports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    pajareria-store                              │   │
//! │  │    CustomerRepository, CatalogRepository, SaleRepository        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pajareria-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ matching  │  │ validation│  │   │
//! │  │   │ Customer  │  │  Amount   │  │ ignore    │  │   rules   │  │   │
//! │  │   │   Sale    │  │  prices   │  │  case     │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, CatalogItem, Sale, etc.)
//! - [`money`] - Price and total formatting
//! - [`matching`] - Case-insensitive text comparison used for every lookup key
//! - [`error`] - Domain error types
//! - [`validation`] - Domain rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pajareria_core::{CatalogItem, Customer, Sale};
//! use chrono::NaiveDate;
//!
//! let ana = Customer::new("Ana López", "12345678A", "600111222", "ana@email.com");
//! let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
//!
//! let mut sale = Sale::open(&ana, date);
//! sale.add_line(&CatalogItem::new("Canario", "Amarillo", 25.0, 3));
//! sale.add_line(&CatalogItem::new("Periquito", "Verde", 40.0, 2));
//!
//! assert_eq!(sale.total().to_string(), "65.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod matching;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol printed in front of two-decimal totals (`$65.00`).
///
/// Prices carry no currency; there is no conversion anywhere in the shop.
pub const CURRENCY_SYMBOL: &str = "$";
