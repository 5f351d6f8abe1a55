//! # Repository Module
//!
//! In-memory repository implementations for the bird shop.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Console menu                                                          │
//! │       │                                                                 │
//! │       │  store.customers().find_by_dni("12345678a")                    │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── add(&mut self, customer)                                          │
//! │  ├── find_by_dni(&self, dni)                                           │
//! │  ├── update(&mut self, dni, patch)                                     │
//! │  └── remove(&mut self, id)                                             │
//! │       │                                                                 │
//! │       │  linear scan, insertion order                                  │
//! │       ▼                                                                 │
//! │  Vec<Customer>                                                         │
//! │                                                                         │
//! │  Each repository exclusively owns its entities. Sales never borrow     │
//! │  from the other two; they hold snapshots.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD keyed by DNI
//! - [`CatalogRepository`](catalog::CatalogRepository) - Bird listings addressed by position
//! - [`SaleRepository`](sale::SaleRepository) - Append-only sales history

pub mod catalog;
pub mod customer;
pub mod sale;
