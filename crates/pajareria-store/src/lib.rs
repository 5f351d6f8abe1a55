//! # pajareria-store: Session State for the Bird Shop
//!
//! This crate holds the customers, the bird catalog and the sales history of
//! a console session, entirely in memory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pajarería Data Flow                              │
//! │                                                                         │
//! │  Console menu (Realizar venta)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pajareria-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │ SaleBuilder  │  │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │ (builder.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │    │ CustomerRepo  │◄───│ customer     │  │   │
//! │  │   │ seed on start │───►│ CatalogRepo   │◄───│ lines        │  │   │
//! │  │   │               │    │ SaleRepo      │◄───│ commit       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` aggregate and its configuration
//! - [`repository`] - Customer, catalog and sale repositories
//! - [`builder`] - Sale composition state machine
//! - [`seed`] - Demo data loaded at startup
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use pajareria_store::{SaleBuilder, Store, StoreConfig};
//!
//! let mut store = Store::new(StoreConfig::default()).unwrap();
//!
//! let mut builder = SaleBuilder::new();
//! builder.select_customer(store.customers(), store.catalog(), "12345678a").unwrap();
//! builder.select_line(store.catalog(), 1).unwrap();
//! builder.select_line(store.catalog(), 2).unwrap();
//!
//! let sale = builder.finish(store.sales_mut()).unwrap();
//! assert_eq!(sale.total().to_string(), "65.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use builder::{LineOutcome, SaleBuilder, SaleFlowState};
pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::customer::CustomerRepository;
pub use repository::sale::SaleRepository;
