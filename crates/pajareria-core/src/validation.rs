//! # Validation Module
//!
//! Domain rule validation for the bird shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: InputReader (console)                                        │
//! │  ├── Numbers must parse ("Ingrese un número válido")                   │
//! │  └── Text is taken as typed                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required text fields (name, DNI, species)                         │
//! │  └── Non-negative price and stock                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repositories (pajareria-store)                               │
//! │  └── Unique DNI                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pajareria_core::validation::{validate_new_customer, validate_stock};
//! use pajareria_core::Customer;
//!
//! let customer = Customer::new("Marta", "99999999Z", "", "");
//! assert!(validate_new_customer(&customer).is_ok());
//!
//! assert!(validate_stock(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{CatalogItem, Customer};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects blank (empty or whitespace-only) text.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a customer before registration.
///
/// ## Rules
/// - Name must not be blank
/// - DNI must not be blank
/// - Phone and email may be empty
pub fn validate_new_customer(customer: &Customer) -> ValidationResult<()> {
    validate_required("name", &customer.name)?;
    validate_required("dni", &customer.dni)?;
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Zero is allowed, negative is not
///
/// ## Example
/// ```rust
/// use pajareria_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(25.0).is_ok());
/// assert!(validate_unit_price(0.0).is_ok());
/// assert!(validate_unit_price(-0.5).is_err());
/// ```
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "unit_price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity typed by the operator and narrows it to `u32`.
pub fn validate_stock(stock: i64) -> ValidationResult<u32> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    u32::try_from(stock).map_err(|_| ValidationError::InvalidFormat {
        field: "stock".to_string(),
        reason: format!("must be at most {}", u32::MAX),
    })
}

/// Validates a catalog item before it is added.
pub fn validate_new_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_required("species", &item.species)?;
    validate_unit_price(item.unit_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
