//! # Seed Data
//!
//! Populates a fresh store with demo data so the first session has customers
//! and birds to work with.
//!
//! ## Seeded Records
//! Customers:
//! - Ana López, 12345678A
//! - Luis García, 87654321B
//!
//! Catalog (in this order, so positions 1..=3 are stable):
//! - Canario, Amarillo, 25.0, 3 in stock
//! - Periquito, Verde, 40.0, 2 in stock
//! - Jilguero, Marrón, 30.0, 1 in stock
//!
//! No sales are seeded.

use pajareria_core::{CatalogItem, Customer};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::store::Store;

/// Demo customers: (name, dni, phone, email).
pub const DEMO_CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Ana López", "12345678A", "600111222", "ana@email.com"),
    ("Luis García", "87654321B", "699888777", "luis@email.com"),
];

/// Demo catalog: (species, color, unit price, stock).
pub const DEMO_CATALOG: &[(&str, &str, f64, u32)] = &[
    ("Canario", "Amarillo", 25.0, 3),
    ("Periquito", "Verde", 40.0, 2),
    ("Jilguero", "Marrón", 30.0, 1),
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: usize,
    pub birds: usize,
}

/// Loads the demo customers and catalog into `store`.
///
/// Skips everything when the store already holds customers or birds, so a
/// second call never duplicates records.
pub fn load_demo_data(store: &mut Store) -> StoreResult<SeedReport> {
    if !store.customers().is_empty() || !store.catalog().is_empty() {
        warn!(
            customers = store.customers().len(),
            birds = store.catalog().len(),
            "Store already has data, skipping seed"
        );
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();

    for (name, dni, phone, email) in DEMO_CUSTOMERS {
        store
            .customers_mut()
            .add(Customer::new(*name, *dni, *phone, *email))?;
        report.customers += 1;
    }

    for (species, color, price, stock) in DEMO_CATALOG {
        store
            .catalog_mut()
            .add(CatalogItem::new(*species, *color, *price, *stock))?;
        report.birds += 1;
    }

    debug!(?report, "Seed complete");
    Ok(report)
}
