//! # Sale Repository
//!
//! Append-only history of committed sales.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. OPEN                                                               │
//! │     └── SaleBuilder::select_customer() → Sale (empty, dated today)     │
//! │                                                                         │
//! │  2. ADD LINES                                                          │
//! │     └── SaleBuilder::select_line(2) → SaleLine snapshot                │
//! │     └── SaleBuilder::select_line(2) → duplicates allowed               │
//! │                                                                         │
//! │  3. COMMIT (THIS REPOSITORY)                                           │
//! │     └── append() → only if the sale has at least one line              │
//! │                                                                         │
//! │  Committed sales are never edited or removed.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pajareria_core::Sale;
use tracing::info;

use crate::error::StoreResult;

/// Repository for committed sales.
///
/// ## Invariants
/// - Every stored sale has at least one line
/// - Iteration order is commit order
#[derive(Debug, Clone, Default)]
pub struct SaleRepository {
    sales: Vec<Sale>,
}

impl SaleRepository {
    /// Creates an empty SaleRepository.
    pub fn new() -> Self {
        SaleRepository::default()
    }

    /// Records a sale.
    ///
    /// ## Errors
    /// `EmptySale` when the sale has no lines; the history is unchanged.
    pub fn append(&mut self, sale: Sale) -> StoreResult<&Sale> {
        sale.ensure_committable()?;

        info!(
            id = %sale.id(),
            dni = %sale.customer().dni,
            lines = sale.lines().len(),
            total = %sale.total(),
            "Sale committed"
        );
        self.sales.push(sale);
        Ok(&self.sales[self.sales.len() - 1])
    }

    /// All sales in commit order.
    pub fn list(&self) -> &[Sale] {
        &self.sales
    }

    /// Sales recorded for `dni` (ignoring case), in commit order.
    ///
    /// Works from the snapshot held by each sale, so sales of customers that
    /// were deleted afterwards are still returned.
    pub fn find_by_customer_dni<'a>(&'a self, dni: &'a str) -> impl Iterator<Item = &'a Sale> + 'a {
        self.sales.iter().filter(move |sale| sale.is_for_dni(dni))
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use chrono::NaiveDate;
    use pajareria_core::{CatalogItem, Customer};

    fn sale_for(customer: &Customer, prices: &[f64]) -> Sale {
        let mut sale = Sale::open(customer, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
        for price in prices {
            sale.add_line(&CatalogItem::new("Canario", "Amarillo", *price, 1));
        }
        sale
    }

    #[test]
    fn test_append_rejects_empty_sale() {
        let ana = Customer::new("Ana López", "12345678A", "", "");
        let mut repo = SaleRepository::new();

        let err = repo.append(sale_for(&ana, &[])).unwrap_err();

        assert!(matches!(err, StoreError::EmptySale));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_find_by_customer_dni_in_commit_order() {
        let ana = Customer::new("Ana López", "12345678A", "", "");
        let luis = Customer::new("Luis García", "87654321B", "", "");
        let mut repo = SaleRepository::new();

        repo.append(sale_for(&ana, &[25.0])).unwrap();
        repo.append(sale_for(&luis, &[40.0])).unwrap();
        repo.append(sale_for(&ana, &[30.0, 30.0])).unwrap();

        let totals: Vec<_> = repo
            .find_by_customer_dni("12345678a")
            .map(|sale| sale.total().value())
            .collect();
        assert_eq!(totals, [25.0, 60.0]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_unknown_dni_yields_nothing() {
        let ana = Customer::new("Ana López", "12345678A", "", "");
        let mut repo = SaleRepository::new();
        repo.append(sale_for(&ana, &[25.0])).unwrap();

        assert_eq!(repo.find_by_customer_dni("00000000X").count(), 0);
    }
}
