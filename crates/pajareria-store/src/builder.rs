//! # Sale Builder
//!
//! Composes a sale step by step and either commits it or throws it away.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   SelectingCustomer                                                     │
//! │        │                                                                │
//! │        ├── no customers / empty catalog ──────────────► Cancelled       │
//! │        ├── DNI not found ─────────────────────────────► Cancelled       │
//! │        │                                                                │
//! │        ▼ DNI resolves                                                   │
//! │   AddingLines ◄──┐                                                      │
//! │        │         │ p ∈ 1..=catalog size  → line appended                │
//! │        │         │ anything else but 0   → OutOfRange, state kept       │
//! │        │─────────┘                                                      │
//! │        │                                                                │
//! │        ▼ 0, then finish()                                               │
//! │   ┌────┴─────────────┐                                                  │
//! │   │ no lines         │ ≥ 1 line                                         │
//! │   ▼                  ▼                                                  │
//! │ Cancelled        Committed (appended to SaleRepository)                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing touches the `SaleRepository` before `finish()`, so a cancelled
//! flow leaves the history exactly as it was.

use chrono::{Local, NaiveDate};
use pajareria_core::{CustomerRef, Sale};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::catalog::CatalogRepository;
use crate::repository::customer::CustomerRepository;
use crate::repository::sale::SaleRepository;

/// Where the sale flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleFlowState {
    /// Waiting for a DNI.
    SelectingCustomer,
    /// Customer chosen, birds being added.
    AddingLines,
    /// Sale recorded.
    Committed,
    /// Flow abandoned; nothing recorded.
    Cancelled,
}

impl SaleFlowState {
    /// True once the flow has committed or been cancelled.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SaleFlowState::Committed | SaleFlowState::Cancelled)
    }
}

/// Result of feeding one catalog selection to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The bird at `position` was appended.
    Added { position: usize },
    /// The operator typed the terminate token (`0`).
    Finished,
}

/// In-band token that ends line selection.
pub const FINISH_TOKEN: i64 = 0;

/// Builds one sale.
#[derive(Debug, Clone)]
pub struct SaleBuilder {
    state: SaleFlowState,
    date: NaiveDate,
    draft: Option<Sale>,
}

impl SaleBuilder {
    /// Starts a flow dated today (local time).
    pub fn new() -> Self {
        SaleBuilder::dated(Local::now().date_naive())
    }

    /// Starts a flow that stamps the sale with `date`.
    pub fn dated(date: NaiveDate) -> Self {
        SaleBuilder {
            state: SaleFlowState::SelectingCustomer,
            date,
            draft: None,
        }
    }

    pub fn state(&self) -> SaleFlowState {
        self.state
    }

    /// The sale being composed, once a customer has been selected.
    pub fn draft(&self) -> Option<&Sale> {
        self.draft.as_ref()
    }

    /// Checks that there is someone to sell to and something to sell.
    ///
    /// On failure the flow is cancelled.
    pub fn check_preconditions(
        &mut self,
        customers: &CustomerRepository,
        catalog: &CatalogRepository,
    ) -> StoreResult<()> {
        self.expect_state(SaleFlowState::SelectingCustomer)?;

        let result = if customers.is_empty() {
            Err(StoreError::NoCustomers)
        } else if catalog.is_empty() {
            Err(StoreError::EmptyCatalog)
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            debug!(%err, "Sale precondition failed");
            self.state = SaleFlowState::Cancelled;
        }
        result
    }

    /// Resolves `dni` and opens the draft sale for that customer.
    ///
    /// ## Errors
    /// - `NoCustomers` / `EmptyCatalog` when there is nothing to sell with
    /// - `NotFound` when the DNI matches no customer
    ///
    /// Every error cancels the flow.
    pub fn select_customer(
        &mut self,
        customers: &CustomerRepository,
        catalog: &CatalogRepository,
        dni: &str,
    ) -> StoreResult<&CustomerRef> {
        self.check_preconditions(customers, catalog)?;

        let customer = match customers.get_by_dni(dni) {
            Ok(customer) => customer,
            Err(err) => {
                self.state = SaleFlowState::Cancelled;
                return Err(err);
            }
        };

        debug!(dni = %customer.dni, date = %self.date, "Sale opened");
        self.state = SaleFlowState::AddingLines;
        let draft = self.draft.insert(Sale::open(customer, self.date));
        Ok(draft.customer())
    }

    /// Feeds one catalog selection.
    ///
    /// `0` finishes selection; a position in `1..=catalog.len()` appends a
    /// snapshot of that bird. Any other number fails with `OutOfRange` and
    /// leaves the draft untouched.
    pub fn select_line(&mut self, catalog: &CatalogRepository, input: i64) -> StoreResult<LineOutcome> {
        self.expect_state(SaleFlowState::AddingLines)?;

        if input == FINISH_TOKEN {
            return Ok(LineOutcome::Finished);
        }

        let item = catalog.at(input)?;
        let draft = self.draft.as_mut().ok_or(StoreError::InvalidState {
            expected: SaleFlowState::AddingLines,
            actual: self.state,
        })?;
        draft.add_line(item);

        debug!(position = input, lines = draft.lines().len(), "Line added");
        Ok(LineOutcome::Added {
            position: input as usize,
        })
    }

    /// Ends the flow.
    ///
    /// An empty draft is discarded (`EmptySale`, state `Cancelled`); otherwise
    /// the sale is appended to `sales` and returned (state `Committed`).
    pub fn finish<'s>(&mut self, sales: &'s mut SaleRepository) -> StoreResult<&'s Sale> {
        self.expect_state(SaleFlowState::AddingLines)?;

        let draft = match self.draft.take() {
            Some(draft) if !draft.is_empty() => draft,
            _ => {
                debug!("Sale cancelled: no lines");
                self.state = SaleFlowState::Cancelled;
                return Err(StoreError::EmptySale);
            }
        };

        self.state = SaleFlowState::Committed;
        sales.append(draft)
    }

    /// Abandons the flow from any non-terminal state.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            debug!(state = ?self.state, "Sale flow cancelled");
            self.state = SaleFlowState::Cancelled;
            self.draft = None;
        }
    }

    fn expect_state(&self, expected: SaleFlowState) -> StoreResult<()> {
        if self.state != expected {
            return Err(StoreError::InvalidState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }
}

impl Default for SaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Store, StoreConfig};
    use pajareria_core::Customer;

    fn april_5th() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
    }

    fn seeded() -> Store {
        Store::new(StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_commit_two_lines() {
        let mut store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());

        let customer = builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        assert_eq!(customer.name, "Ana López");
        assert_eq!(builder.state(), SaleFlowState::AddingLines);

        assert_eq!(
            builder.select_line(store.catalog(), 1).unwrap(),
            LineOutcome::Added { position: 1 }
        );
        builder.select_line(store.catalog(), 2).unwrap();
        assert_eq!(builder.select_line(store.catalog(), 0).unwrap(), LineOutcome::Finished);

        let sale = builder.finish(store.sales_mut()).unwrap();
        assert_eq!(sale.total().to_string(), "65.00");
        assert_eq!(sale.date(), april_5th());
        let species: Vec<_> = sale.lines().iter().map(|l| l.species.as_str()).collect();
        assert_eq!(species, ["Canario", "Periquito"]);

        assert_eq!(builder.state(), SaleFlowState::Committed);
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_empty_sale_is_discarded() {
        let mut store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());

        builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        builder.select_line(store.catalog(), 0).unwrap();

        let err = builder.finish(store.sales_mut()).unwrap_err();
        assert!(matches!(err, StoreError::EmptySale));
        assert_eq!(builder.state(), SaleFlowState::Cancelled);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_out_of_range_keeps_state() {
        let store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());
        builder
            .select_customer(store.customers(), store.catalog(), "87654321b")
            .unwrap();
        builder.select_line(store.catalog(), 3).unwrap();

        for bad in [4, -1, 99] {
            assert!(matches!(
                builder.select_line(store.catalog(), bad),
                Err(StoreError::OutOfRange { .. })
            ));
        }

        assert_eq!(builder.state(), SaleFlowState::AddingLines);
        assert_eq!(builder.draft().unwrap().lines().len(), 1);
    }

    #[test]
    fn test_duplicate_lines_allowed() {
        let mut store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());
        builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        builder.select_line(store.catalog(), 3).unwrap();
        builder.select_line(store.catalog(), 3).unwrap();

        let sale = builder.finish(store.sales_mut()).unwrap();
        assert_eq!(sale.lines().len(), 2);
        assert_eq!(sale.total().to_string(), "60.00");
    }

    #[test]
    fn test_no_customers_cancels() {
        let mut store = Store::new(StoreConfig::empty()).unwrap();
        store
            .catalog_mut()
            .add(pajareria_core::CatalogItem::new("Canario", "Amarillo", 25.0, 3))
            .unwrap();
        let mut builder = SaleBuilder::dated(april_5th());

        let err = builder
            .check_preconditions(store.customers(), store.catalog())
            .unwrap_err();
        assert!(matches!(err, StoreError::NoCustomers));
        assert_eq!(builder.state(), SaleFlowState::Cancelled);
    }

    #[test]
    fn test_empty_catalog_cancels() {
        let mut store = Store::new(StoreConfig::empty()).unwrap();
        store
            .customers_mut()
            .add(Customer::new("Ana López", "12345678A", "", ""))
            .unwrap();
        let mut builder = SaleBuilder::dated(april_5th());

        let err = builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyCatalog));
        assert!(builder.draft().is_none());
    }

    #[test]
    fn test_unknown_dni_cancels() {
        let store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());

        let err = builder
            .select_customer(store.customers(), store.catalog(), "00000000X")
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(builder.state(), SaleFlowState::Cancelled);

        assert!(matches!(
            builder.select_line(store.catalog(), 1),
            Err(StoreError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_sale_survives_customer_deletion() {
        let mut store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());
        builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        builder.select_line(store.catalog(), 1).unwrap();
        builder.finish(store.sales_mut()).unwrap();

        store.customers_mut().remove_by_dni("12345678A").unwrap();

        let sales: Vec<_> = store.sales().find_by_customer_dni("12345678a").collect();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].customer().name, "Ana López");
    }

    #[test]
    fn test_stock_is_not_decremented() {
        let mut store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());
        builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        builder.select_line(store.catalog(), 1).unwrap();
        builder.finish(store.sales_mut()).unwrap();

        assert_eq!(store.catalog().at(1).unwrap().stock, 3);
    }

    #[test]
    fn test_cancel_drops_draft() {
        let store = seeded();
        let mut builder = SaleBuilder::dated(april_5th());
        builder
            .select_customer(store.customers(), store.catalog(), "12345678A")
            .unwrap();
        builder.select_line(store.catalog(), 1).unwrap();

        builder.cancel();

        assert_eq!(builder.state(), SaleFlowState::Cancelled);
        assert!(builder.draft().is_none());
    }
}
