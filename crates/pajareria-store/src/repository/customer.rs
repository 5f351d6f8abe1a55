//! # Customer Repository
//!
//! Registered customers, keyed by DNI.
//!
//! ## Key Operations
//! - Registration with case-insensitive unique DNI
//! - Lookup, partial update and removal by DNI
//! - Listing in registration order

use pajareria_core::validation::validate_new_customer;
use pajareria_core::{Customer, CustomerPatch};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Repository for customers.
///
/// ## Invariants
/// - No two customers share a DNI under case-insensitive comparison
/// - Iteration order is registration order
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    customers: Vec<Customer>,
}

impl CustomerRepository {
    /// Creates an empty CustomerRepository.
    pub fn new() -> Self {
        CustomerRepository::default()
    }

    /// Registers a customer.
    ///
    /// ## Errors
    /// - `Validation` when the name or DNI is blank
    /// - `DuplicateDni` when the DNI is already registered (any casing);
    ///   the repository is left unchanged
    pub fn add(&mut self, customer: Customer) -> StoreResult<&Customer> {
        validate_new_customer(&customer)?;

        if self.contains_dni(&customer.dni) {
            debug!(dni = %customer.dni, "Rejected duplicate DNI");
            return Err(StoreError::duplicate_dni(customer.dni));
        }

        debug!(id = %customer.id, dni = %customer.dni, "Registering customer");
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Returns the first customer whose DNI matches, ignoring case.
    pub fn find_by_dni(&self, dni: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.has_dni(dni))
    }

    /// Same as [`find_by_dni`](Self::find_by_dni) but fails with `NotFound`.
    pub fn get_by_dni(&self, dni: &str) -> StoreResult<&Customer> {
        self.find_by_dni(dni)
            .ok_or_else(|| StoreError::not_found("Customer", dni))
    }

    /// Checks whether a DNI is already registered.
    pub fn contains_dni(&self, dni: &str) -> bool {
        self.find_by_dni(dni).is_some()
    }

    /// Removes the customer with the given id. No effect if absent.
    ///
    /// Sales already recorded for this customer are not touched.
    pub fn remove(&mut self, id: &str) -> Option<Customer> {
        let index = self.customers.iter().position(|c| c.id == id)?;
        let removed = self.customers.remove(index);
        debug!(id = %removed.id, dni = %removed.dni, "Removed customer");
        Some(removed)
    }

    /// Removes the customer owning `dni`.
    pub fn remove_by_dni(&mut self, dni: &str) -> StoreResult<Customer> {
        let id = self.get_by_dni(dni)?.id.clone();
        self.remove(&id)
            .ok_or_else(|| StoreError::not_found("Customer", dni))
    }

    /// Applies a partial update to the customer owning `dni`.
    ///
    /// Fields the patch leaves as `None` keep their value; an all-blank
    /// patch leaves the customer byte-identical.
    pub fn update(&mut self, dni: &str, patch: &CustomerPatch) -> StoreResult<&Customer> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.has_dni(dni))
            .ok_or_else(|| StoreError::not_found("Customer", dni))?;

        customer.apply(patch);
        debug!(dni = %customer.dni, unchanged = patch.is_empty(), "Updated customer");
        Ok(&*customer)
    }

    /// All customers in registration order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
