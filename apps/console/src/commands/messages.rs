//! # Operator Messages
//!
//! Every line the console shows in response to an operation, and the
//! mapping from `StoreError` to those lines.

use pajareria_core::ValidationError;
use pajareria_store::StoreError;
use tracing::error;

// Menu navigation
pub const MSG_INVALID_OPTION: &str = "Opción no válida.";
pub const MSG_BACK: &str = "Volviendo...";
pub const MSG_EXIT: &str = "Gracias por usar el sistema.";

// Customers
pub const MSG_CUSTOMER_REGISTERED: &str = "Cliente registrado con éxito.";
pub const MSG_DUPLICATE_DNI: &str = "Error: Ya existe un cliente con ese DNI.";
pub const MSG_CUSTOMER_REMOVED: &str = "Cliente eliminado.";
pub const MSG_CUSTOMER_NOT_FOUND: &str = "Cliente no encontrado.";
pub const MSG_CUSTOMER_UPDATED: &str = "Cliente actualizado.";
pub const MSG_NO_CUSTOMERS: &str = "No hay clientes registrados.";
pub const MSG_CUSTOMER_REQUIRED_FIELDS: &str = "Error: El nombre y el DNI son obligatorios.";

// Catalog
pub const MSG_BIRD_ADDED: &str = "Pájaro agregado al catálogo.";
pub const MSG_EMPTY_CATALOG: &str = "No hay pájaros en el catálogo.";
pub const MSG_SPECIES_NOT_FOUND: &str = "No se encontraron pájaros de esa especie.";
pub const MSG_SPECIES_REQUIRED: &str = "Error: La especie es obligatoria.";
pub const MSG_NEGATIVE_PRICE_OR_STOCK: &str = "Error: El precio y la cantidad no pueden ser negativos.";

// Sale flow
pub const MSG_SALE_NO_CUSTOMERS: &str = "No hay clientes registrados. Registre uno primero.";
pub const MSG_SALE_EMPTY_CATALOG: &str = "No hay pájaros disponibles para vender.";
pub const MSG_LINE_ADDED: &str = "Pájaro añadido a la venta.";
pub const MSG_INVALID_POSITION: &str = "Número no válido.";
pub const MSG_SALE_CANCELLED: &str = "Venta cancelada: no se añadieron pájaros.";

// Reports
pub const MSG_NO_SALES: &str = "No hay ventas registradas.";
pub const MSG_NO_SALES_FOR_CUSTOMER: &str = "No hay ventas para este cliente.";

/// The line shown to the operator for a store error.
pub fn for_store_error(err: &StoreError) -> &'static str {
    match err {
        StoreError::DuplicateDni { .. } => MSG_DUPLICATE_DNI,
        StoreError::NotFound { .. } => MSG_CUSTOMER_NOT_FOUND,
        StoreError::OutOfRange { .. } => MSG_INVALID_POSITION,
        StoreError::NoCustomers => MSG_SALE_NO_CUSTOMERS,
        StoreError::EmptyCatalog => MSG_SALE_EMPTY_CATALOG,
        StoreError::EmptySale => MSG_SALE_CANCELLED,
        StoreError::Validation(e) => for_validation_error(e),
        StoreError::InvalidState { .. } => {
            // The menu drives the builder strictly in order
            error!(%err, "Sale flow out of order");
            MSG_INVALID_OPTION
        }
    }
}

fn for_validation_error(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::Required { field } if field == "species" => MSG_SPECIES_REQUIRED,
        ValidationError::Required { .. } => MSG_CUSTOMER_REQUIRED_FIELDS,
        ValidationError::MustBeNonNegative { .. } | ValidationError::InvalidFormat { .. } => {
            MSG_NEGATIVE_PRICE_OR_STOCK
        }
    }
}
