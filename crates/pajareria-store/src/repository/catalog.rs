//! # Catalog Repository
//!
//! The birds offered for sale.
//!
//! ## Positional Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Listings have no key. The operator picks them by position:             │
//! │                                                                         │
//! │    1. Pájaro {especie='Canario',   ...}   ◄── at(1)                     │
//! │    2. Pájaro {especie='Periquito', ...}   ◄── at(2)                     │
//! │    3. Pájaro {especie='Jilguero',  ...}   ◄── at(3)                     │
//! │                                                                         │
//! │  at(0), at(4), at(-1) → OutOfRange                                      │
//! │                                                                         │
//! │  Identical listings may coexist; positions still tell them apart.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pajareria_core::matching::contains_ignore_case;
use pajareria_core::validation::validate_new_item;
use pajareria_core::CatalogItem;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Repository for bird listings.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    items: Vec<CatalogItem>,
}

impl CatalogRepository {
    /// Creates an empty CatalogRepository.
    pub fn new() -> Self {
        CatalogRepository::default()
    }

    /// Appends a listing and returns its 1-based position.
    ///
    /// No duplicate check: two identical listings are both kept.
    pub fn add(&mut self, item: CatalogItem) -> StoreResult<usize> {
        validate_new_item(&item)?;

        self.items.push(item);
        let position = self.items.len();
        debug!(position, species = %self.items[position - 1].species, "Added catalog item");
        Ok(position)
    }

    /// Every listing whose species contains `query`, ignoring case, in
    /// insertion order.
    pub fn find_by_species_contains<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items
            .iter()
            .filter(move |item| contains_ignore_case(&item.species, query))
    }

    /// All listings paired with their 1-based position.
    pub fn list(&self) -> impl Iterator<Item = (usize, &CatalogItem)> {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// The listing at 1-based `position`.
    ///
    /// ## Errors
    /// `OutOfRange` when `position` is not in `1..=len()`.
    pub fn at(&self, position: i64) -> StoreResult<&CatalogItem> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|index| self.items.get(index))
            .ok_or(StoreError::OutOfRange {
                position,
                size: self.items.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
