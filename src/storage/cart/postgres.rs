//! Postgres-backed cart store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::cart::{CartItem, NewCartItem};
use crate::infra::config;
use crate::storage::cart::CartStore;

pub struct PostgresCartStore {
    pool: PgPool,
}

impl PostgresCartStore {
    /// Connects using `DATABASE_URL` and ensures the schema exists.
    pub async fn new() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> anyhow::Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cart_items (
                id BIGSERIAL PRIMARY KEY,
                product_id BIGINT NOT NULL,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CartStore for PostgresCartStore {
    async fn list(&self) -> anyhow::Result<Vec<CartItem>> {
        let items = sqlx::query_as::<_, CartItem>(
            "SELECT id, product_id, name, quantity, price, created_at, updated_at
             FROM cart_items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(
            "SELECT id, product_id, name, quantity, price, created_at, updated_at
             FROM cart_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn insert(&self, new_item: NewCartItem) -> anyhow::Result<CartItem> {
        let item = sqlx::query_as::<_, CartItem>(
            "INSERT INTO cart_items (product_id, name, quantity, price)
             VALUES ($1, $2, $3, $4)
             RETURNING id, product_id, name, quantity, price, created_at, updated_at",
        )
        .bind(new_item.product_id)
        .bind(&new_item.name)
        .bind(new_item.quantity)
        .bind(new_item.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update_line(
        &self,
        id: i64,
        quantity: i32,
        price: f64,
    ) -> anyhow::Result<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(
            "UPDATE cart_items SET quantity = $2, price = $3, updated_at = now()
             WHERE id = $1
             RETURNING id, product_id, name, quantity, price, created_at, updated_at",
        )
        .bind(id)
        .bind(quantity)
        .bind(price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
