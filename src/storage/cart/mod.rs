//! Cart-item persistence.

use async_trait::async_trait;

use crate::domain::cart::{CartItem, NewCartItem};

pub mod postgres;

pub use postgres::PostgresCartStore;

/// Row-level persistence contract for cart items.
///
/// One call is one storage transaction; there is no cross-row atomicity.
/// Errors are plumbing faults (connection, SQL) — "row not found" is encoded
/// in the `Option`/`bool` results, not as an error.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// All cart items, newest first (`created_at` descending).
    async fn list(&self) -> anyhow::Result<Vec<CartItem>>;

    async fn find(&self, id: i64) -> anyhow::Result<Option<CartItem>>;

    async fn insert(&self, new_item: NewCartItem) -> anyhow::Result<CartItem>;

    /// Overwrites `quantity` and `price` (and bumps `updated_at`) on one row.
    /// Returns the updated row, or `None` if no row matched. `name` and
    /// `product_id` are deliberately untouched.
    async fn update_line(&self, id: i64, quantity: i32, price: f64)
        -> anyhow::Result<Option<CartItem>>;

    /// Hard delete. Returns `false` if no row matched.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Storage reachability probe (backs the health endpoint).
    async fn ping(&self) -> anyhow::Result<()>;
}
