//! # Store
//!
//! The session-wide aggregate that owns the three repositories.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store::new(config)                                │
//! │                                                                         │
//! │  1. Create empty repositories                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. config.seed_demo_data?                                             │
//! │       ├── yes → seed::load_demo_data (2 customers, 3 birds)            │
//! │       └── no  → start empty                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Hand the Store to the console; it lives until the process exits    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::error::StoreResult;
use crate::repository::catalog::CatalogRepository;
use crate::repository::customer::CustomerRepository;
use crate::repository::sale::SaleRepository;
use crate::seed;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Load the demo customers and birds at startup.
    pub seed_demo_data: bool,
}

impl StoreConfig {
    /// A configuration that starts with empty repositories.
    pub fn empty() -> Self {
        StoreConfig {
            seed_demo_data: false,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            seed_demo_data: true,
        }
    }
}

/// All session state: customers, catalog and sales.
#[derive(Debug, Clone, Default)]
pub struct Store {
    customers: CustomerRepository,
    catalog: CatalogRepository,
    sales: SaleRepository,
}

impl Store {
    /// Creates the store and seeds it when the config asks for it.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let mut store = Store::default();

        if config.seed_demo_data {
            let report = seed::load_demo_data(&mut store)?;
            info!(
                customers = report.customers,
                birds = report.birds,
                "Demo data loaded"
            );
        }

        Ok(store)
    }

    pub fn customers(&self) -> &CustomerRepository {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerRepository {
        &mut self.customers
    }

    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogRepository {
        &mut self.catalog
    }

    pub fn sales(&self) -> &SaleRepository {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut SaleRepository {
        &mut self.sales
    }
}
