//! Cart item lifecycle with mandatory product-price reconciliation.
//!
//! The service is the only writer of `price`: every create/update re-fetches
//! the product and recomputes unit price x quantity from scratch. Storage
//! faults are translated to [`CartError::Internal`] at this boundary so no
//! unhandled fault reaches the transport layer.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::cart::{CartItem, NewCartItem};
use crate::domain::product::{ProductGateway, ProductRecord};
use crate::storage::cart::CartStore;

/// Per-field validation messages, keyed by input field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum CartError {
    /// Bad or missing input fields (HTTP 422). Carries field-level messages.
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Missing cart item or unresolvable product (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Unexpected storage/transport fault (HTTP 500). Carries the underlying
    /// message for diagnostics.
    #[error("{0}")]
    Internal(String),
}

impl From<anyhow::Error> for CartError {
    fn from(e: anyhow::Error) -> Self {
        CartError::Internal(e.to_string())
    }
}

/// Logs an unexpected storage fault and converts it to a generic error.
/// Shared by every operation so the catch-log-translate step lives in one place.
fn storage_fault(operation: &'static str, e: anyhow::Error) -> CartError {
    tracing::error!(error = %e, operation, "Unexpected storage fault");
    CartError::Internal(e.to_string())
}

fn not_found_item() -> CartError {
    CartError::NotFound("Cart item not found".to_string())
}

pub struct CartService {
    store: Arc<dyn CartStore>,
    products: Arc<dyn ProductGateway>,
}

impl CartService {
    /// Both collaborators are injected; the service holds no global state.
    pub fn new(store: Arc<dyn CartStore>, products: Arc<dyn ProductGateway>) -> Self {
        Self { store, products }
    }

    /// All cart items, newest first.
    pub async fn list_items(&self) -> Result<Vec<CartItem>, CartError> {
        self.store
            .list()
            .await
            .map_err(|e| storage_fault("list cart items", e))
    }

    pub async fn get_item(&self, id: i64) -> Result<CartItem, CartError> {
        self.store
            .find(id)
            .await
            .map_err(|e| storage_fault("fetch cart item", e))?
            .ok_or_else(not_found_item)
    }

    /// Creates a line for `payload.product_id` x `payload.quantity`.
    ///
    /// Validation runs before the remote call; an unresolvable product is a
    /// `NotFound`, while a product payload that resolves but lacks `name` or
    /// `price` is an `Internal` fault (the record is malformed, not absent).
    pub async fn create_item(&self, payload: &JsonValue) -> Result<CartItem, CartError> {
        let (product_id, quantity) = validate_create(payload)?;

        let data = self
            .products
            .fetch_product(Some(product_id))
            .await
            .ok_or_else(|| CartError::NotFound("Product not found".to_string()))?;

        let product: ProductRecord = serde_json::from_value(data)
            .map_err(|e| CartError::Internal(format!("Unexpected product payload: {}", e)))?;
        let name = product
            .name
            .ok_or_else(|| CartError::Internal("Product record is missing a name".to_string()))?;
        let unit_price = product
            .price
            .ok_or_else(|| CartError::Internal("Product record is missing a price".to_string()))?;

        let price = unit_price * quantity as f64;
        self.store
            .insert(NewCartItem {
                product_id,
                name,
                quantity,
                price,
            })
            .await
            .map_err(|e| storage_fault("create cart item", e))
    }

    /// Overwrites `quantity` and recomputes `price` from a fresh lookup of the
    /// line's **stored** `product_id` — this operation cannot retarget the
    /// line to another product, and `name` keeps its original snapshot.
    pub async fn update_item(&self, id: i64, payload: &JsonValue) -> Result<CartItem, CartError> {
        let quantity = validate_update(payload)?;

        let existing = self
            .store
            .find(id)
            .await
            .map_err(|e| storage_fault("fetch cart item", e))?
            .ok_or_else(not_found_item)?;

        // Absent product and present-but-priceless product collapse into the
        // same 404 here: either way the line price cannot be recomputed.
        let unit_price = match self.products.fetch_product(Some(existing.product_id)).await {
            Some(data) => serde_json::from_value::<ProductRecord>(data)
                .ok()
                .and_then(|p| p.price),
            None => None,
        }
        .ok_or_else(|| {
            CartError::NotFound("Product not found or price unavailable".to_string())
        })?;

        let price = unit_price * quantity as f64;
        self.store
            .update_line(id, quantity, price)
            .await
            .map_err(|e| storage_fault("update cart item", e))?
            .ok_or_else(not_found_item)
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), CartError> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|e| storage_fault("delete cart item", e))?;
        if deleted {
            Ok(())
        } else {
            Err(not_found_item())
        }
    }

    /// Storage reachability probe for the health endpoint.
    pub async fn health_check(&self) -> Result<(), CartError> {
        self.store
            .ping()
            .await
            .map_err(|e| storage_fault("ping storage", e))
    }
}

// --- Field validation (rules: required / integer / min:1) ---

fn push_error(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

/// Extracts a required integer field, recording human-readable messages for
/// missing or non-integer values.
fn integer_field(
    payload: &JsonValue,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<i64> {
    match payload.get(field) {
        None | Some(JsonValue::Null) => {
            push_error(errors, field, format!("The {} field is required.", label));
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                push_error(errors, field, format!("The {} must be an integer.", label));
                None
            }
        },
    }
}

fn quantity_field(payload: &JsonValue, errors: &mut FieldErrors) -> Option<i32> {
    let quantity = integer_field(payload, "quantity", "quantity", errors)?;
    if quantity < 1 {
        push_error(
            errors,
            "quantity",
            "The quantity must be at least 1.".to_string(),
        );
        return None;
    }
    match i32::try_from(quantity) {
        Ok(q) => Some(q),
        Err(_) => {
            push_error(
                errors,
                "quantity",
                "The quantity must be an integer.".to_string(),
            );
            None
        }
    }
}

fn validate_create(payload: &JsonValue) -> Result<(i64, i32), CartError> {
    let mut errors = FieldErrors::new();
    let product_id = integer_field(payload, "product_id", "product id", &mut errors);
    let quantity = quantity_field(payload, &mut errors);
    match (product_id, quantity) {
        (Some(product_id), Some(quantity)) if errors.is_empty() => Ok((product_id, quantity)),
        _ => Err(CartError::Validation(errors)),
    }
}

fn validate_update(payload: &JsonValue) -> Result<i32, CartError> {
    let mut errors = FieldErrors::new();
    match quantity_field(payload, &mut errors) {
        Some(quantity) if errors.is_empty() => Ok(quantity),
        _ => Err(CartError::Validation(errors)),
    }
}
