//! # Domain Types
//!
//! Core domain types used throughout the bird shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │   CatalogItem   │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  species        │   │  id (UUID)      │       │
//! │  │  dni (business) │   │  color          │   │  customer ──────┼──┐    │
//! │  │  name           │   │  unit_price     │   │  lines ─────────┼┐ │    │
//! │  │  phone, email   │   │  stock          │   │  date           ││ │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘│ │    │
//! │                                                                  │ │    │
//! │  ┌─────────────────┐   ┌─────────────────┐                      │ │    │
//! │  │  CustomerRef    │◄──┼─────────────────┼──────────────────────┼─┘    │
//! │  │  id, name, dni  │   │    SaleLine     │◄─────────────────────┘      │
//! │  └─────────────────┘   │ species, color, │                             │
//! │                        │ unit_price      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A committed sale never points back into the repositories. It carries a
//! `CustomerRef` and one `SaleLine` per selected bird, frozen at the moment
//! they were added. Deleting the customer or adding more birds to the
//! catalog leaves the sale history untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::matching::eq_ignore_case;
use crate::money::{format_price, Amount};
use crate::CURRENCY_SYMBOL;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// ## Dual-Key Identity
/// - `id`: UUID v4, immutable, identifies the record inside the session
/// - `dni`: national identity number, the business key (unique, case-insensitive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub dni: String,
    /// May be empty.
    pub phone: String,
    /// May be empty.
    pub email: String,
}

impl Customer {
    /// Creates a customer with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        dni: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Customer {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            dni: dni.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Checks whether this customer owns the given DNI (case-insensitive).
    #[inline]
    pub fn has_dni(&self, dni: &str) -> bool {
        eq_ignore_case(&self.dni, dni)
    }

    /// Applies a patch. Fields left as `None` keep their current value.
    pub fn apply(&mut self, patch: &CustomerPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cliente{{nombre='{}', dni='{}', telefono='{}', email='{}'}}",
            self.name, self.dni, self.phone, self.email
        )
    }
}

// =============================================================================
// Customer Patch
// =============================================================================

/// Partial update for a customer. The DNI is the lookup key and never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    /// Builds a patch from raw operator input.
    ///
    /// Blank or whitespace-only input means "unchanged". Non-blank input is
    /// stored exactly as typed.
    ///
    /// ## Example
    /// ```rust
    /// use pajareria_core::CustomerPatch;
    ///
    /// let patch = CustomerPatch::from_input("Ana María", "  ", "");
    /// assert_eq!(patch.name.as_deref(), Some("Ana María"));
    /// assert!(patch.phone.is_none());
    /// assert!(patch.email.is_none());
    /// ```
    pub fn from_input(name: &str, phone: &str, email: &str) -> Self {
        CustomerPatch {
            name: non_blank(name),
            phone: non_blank(phone),
            email: non_blank(email),
        }
    }

    /// True when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A bird listing offered for sale.
///
/// Listings have no key of their own; inside a session they are addressed by
/// their 1-based position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub species: String,
    pub color: String,
    pub unit_price: f64,
    /// Units on hand. Shown in listings, never decremented by a sale.
    pub stock: u32,
}

impl CatalogItem {
    pub fn new(species: impl Into<String>, color: impl Into<String>, unit_price: f64, stock: u32) -> Self {
        CatalogItem {
            species: species.into(),
            color: color.into(),
            unit_price,
            stock,
        }
    }

    /// Returns the unit price as an Amount.
    #[inline]
    pub fn price(&self) -> Amount {
        Amount::new(self.unit_price)
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pájaro {{especie='{}', color='{}', cantidad='{}', precio={}}}",
            self.species,
            self.color,
            self.stock,
            format_price(self.unit_price)
        )
    }
}

// =============================================================================
// Customer Reference
// =============================================================================

/// The customer a sale belongs to, frozen at the time the sale was opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
    pub dni: String,
}

impl From<&Customer> for CustomerRef {
    fn from(customer: &Customer) -> Self {
        CustomerRef {
            id: customer.id.clone(),
            name: customer.name.clone(),
            dni: customer.dni.clone(),
        }
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// One selected bird inside a sale.
/// Uses snapshot pattern to freeze catalog data at time of selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Species at time of sale (frozen).
    pub species: String,
    /// Color at time of sale (frozen).
    pub color: String,
    /// Unit price at time of sale (frozen).
    pub unit_price: f64,
}

impl SaleLine {
    #[inline]
    pub fn price(&self) -> Amount {
        Amount::new(self.unit_price)
    }
}

impl From<&CatalogItem> for SaleLine {
    fn from(item: &CatalogItem) -> Self {
        SaleLine {
            species: item.species.clone(),
            color: item.color.clone(),
            unit_price: item.unit_price,
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A sale of one or more birds to a customer.
///
/// A sale starts open and empty; lines are appended in selection order and
/// may repeat the same catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    id: String,
    customer: CustomerRef,
    lines: Vec<SaleLine>,
    date: NaiveDate,
}

impl Sale {
    /// Opens an empty sale for `customer`, stamped with `date`.
    pub fn open(customer: &Customer, date: NaiveDate) -> Self {
        Sale {
            id: Uuid::new_v4().to_string(),
            customer: CustomerRef::from(customer),
            lines: Vec::new(),
            date,
        }
    }

    /// Appends a snapshot of `item` as a new line.
    pub fn add_line(&mut self, item: &CatalogItem) {
        self.lines.push(SaleLine::from(item));
    }

    /// Sum of the line prices in append order. Zero for an empty sale.
    pub fn total(&self) -> Amount {
        self.lines.iter().map(SaleLine::price).sum()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A sale can only be recorded once it has at least one line.
    pub fn ensure_committable(&self) -> CoreResult<()> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptySale);
        }
        Ok(())
    }

    /// Checks whether the sale belongs to the given DNI (case-insensitive).
    pub fn is_for_dni(&self, dni: &str) -> bool {
        eq_ignore_case(&self.customer.dni, dni)
    }

    /// One-line summary: `Cliente: <name> | Fecha: <date> | Total: $<total>`.
    pub fn summary(&self) -> SaleSummary<'_> {
        SaleSummary(self)
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Venta{{cliente={}, fecha='{}', total={}}}",
            self.customer.name,
            self.date,
            self.total()
        )
    }
}

/// Display adapter for the per-sale totals report.
#[derive(Debug, Clone, Copy)]
pub struct SaleSummary<'a>(&'a Sale);

impl fmt::Display for SaleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cliente: {} | Fecha: {} | Total: {}{}",
            self.0.customer.name,
            self.0.date,
            CURRENCY_SYMBOL,
            self.0.total()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Customer {
        Customer::new("Ana López", "12345678A", "600111222", "ana@email.com")
    }

    fn april_5th() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
    }

    #[test]
    fn test_customer_display() {
        assert_eq!(
            ana().to_string(),
            "Cliente{nombre='Ana López', dni='12345678A', telefono='600111222', email='ana@email.com'}"
        );
    }

    #[test]
    fn test_customer_has_dni_ignores_case() {
        let customer = ana();
        assert!(customer.has_dni("12345678a"));
        assert!(!customer.has_dni("12345678"));
    }

    #[test]
    fn test_blank_patch_changes_nothing() {
        let mut customer = ana();
        let before = customer.clone();

        let patch = CustomerPatch::from_input("   ", "\t", "");
        assert!(patch.is_empty());
        customer.apply(&patch);

        assert_eq!(customer, before);
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let mut customer = ana();
        customer.apply(&CustomerPatch::from_input("", "611000000", ""));

        assert_eq!(customer.name, "Ana López");
        assert_eq!(customer.phone, "611000000");
        assert_eq!(customer.email, "ana@email.com");
    }

    #[test]
    fn test_catalog_item_display() {
        let item = CatalogItem::new("Canario", "Amarillo", 25.0, 3);
        assert_eq!(
            item.to_string(),
            "Pájaro {especie='Canario', color='Amarillo', cantidad='3', precio=25.0}"
        );
    }

    #[test]
    fn test_empty_sale_total_is_zero() {
        let sale = Sale::open(&ana(), april_5th());
        assert!(sale.is_empty());
        assert!(sale.total().is_zero());
    }

    #[test]
    fn test_sale_total_and_display() {
        let mut sale = Sale::open(&ana(), april_5th());
        sale.add_line(&CatalogItem::new("Canario", "Amarillo", 25.0, 1));
        sale.add_line(&CatalogItem::new("Periquito", "Verde", 40.0, 1));

        assert_eq!(sale.total().value(), 65.0);
        assert_eq!(
            sale.to_string(),
            "Venta{cliente=Ana López, fecha='2025-04-05', total=65.00}"
        );
        assert_eq!(
            sale.summary().to_string(),
            "Cliente: Ana López | Fecha: 2025-04-05 | Total: $65.00"
        );
    }

    #[test]
    fn test_duplicate_lines_are_kept() {
        let canario = CatalogItem::new("Canario", "Amarillo", 25.0, 3);
        let mut sale = Sale::open(&ana(), april_5th());
        sale.add_line(&canario);
        sale.add_line(&canario);

        assert_eq!(sale.lines().len(), 2);
        assert_eq!(sale.total().to_string(), "50.00");
    }

    #[test]
    fn test_lines_are_snapshots() {
        let mut item = CatalogItem::new("Jilguero", "Marrón", 30.0, 1);
        let mut sale = Sale::open(&ana(), april_5th());
        sale.add_line(&item);

        item.unit_price = 99.0;
        item.species = "Otro".to_string();

        assert_eq!(sale.lines()[0].species, "Jilguero");
        assert_eq!(sale.total().value(), 30.0);
    }

    #[test]
    fn test_empty_sale_is_not_committable() {
        let mut sale = Sale::open(&ana(), april_5th());
        assert!(matches!(sale.ensure_committable(), Err(CoreError::EmptySale)));

        sale.add_line(&CatalogItem::new("Canario", "Amarillo", 25.0, 3));
        assert!(sale.ensure_committable().is_ok());
    }

    #[test]
    fn test_sale_is_for_dni() {
        let sale = Sale::open(&ana(), april_5th());
        assert!(sale.is_for_dni("12345678A"));
        assert!(sale.is_for_dni("12345678a"));
        assert!(!sale.is_for_dni("87654321B"));
    }

    #[test]
    fn test_sale_serializes_snapshot() {
        let mut sale = Sale::open(&ana(), april_5th());
        sale.add_line(&CatalogItem::new("Canario", "Amarillo", 25.0, 3));

        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["customer"]["dni"], "12345678A");
        assert_eq!(json["lines"][0]["species"], "Canario");
        assert_eq!(json["lines"][0]["unit_price"], 25.0);
        assert_eq!(json["date"], "2025-04-05");
        assert!(json["lines"][0].get("stock").is_none());
    }
}
