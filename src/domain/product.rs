//! Read-only product data consumed from the remote product service.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Typed view over a product payload.
///
/// The remote service owns the shape; fields beyond `id`/`name`/`price` may be
/// present and are ignored. All fields are optional so a partial record still
/// deserializes — a missing `price` is a distinct condition from a missing
/// product and is decided by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Contract for resolving product data.
///
/// All failure modes (transport, non-200, parse) collapse into `None`; callers
/// only reason about presence/absence, never transport detail.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetches the `data` payload for one product (`Some(id)`) or the whole
    /// collection (`None`). Best effort: one call, no retries.
    async fn fetch_product(&self, product_id: Option<i64>) -> Option<JsonValue>;
}
