//! Cart line-item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted cart line: one product reference plus a denormalized total price.
///
/// `price` is the total line price (unit price x quantity) as of the last write.
/// It is recomputed from a fresh product lookup on every create/update and is
/// never accepted from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartItem {
    pub id: i64,
    /// Reference into the remote product service. No local referential integrity.
    pub product_id: i64,
    /// Product name snapshot taken when the line was added; not refreshed on update.
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a cart line (store assigns `id` and timestamps).
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub product_id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}
