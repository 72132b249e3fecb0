//! CRUD round-trip for the Postgres-backed store.
//!
//! Requires a reachable database; skips with a notice when `DATABASE_URL` is
//! not configured so the suite stays runnable without infrastructure.

use std::time::Duration;

use cart_service::{CartStore, NewCartItem, PostgresCartStore};
use sqlx::postgres::PgPoolOptions;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_store_crud() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping Postgres store test.");
            return Ok(());
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    let store = PostgresCartStore::new_with_pool(pool.clone()).await?;

    sqlx::query("TRUNCATE TABLE cart_items")
        .execute(&pool)
        .await?;

    store.ping().await?;

    let first = store
        .insert(NewCartItem {
            product_id: 5,
            name: "Widget".to_string(),
            quantity: 3,
            price: 30.0,
        })
        .await?;
    assert_eq!(first.product_id, 5);
    assert_eq!(first.name, "Widget");
    assert_eq!(first.quantity, 3);
    assert_eq!(first.price, 30.0);

    // Distinct created_at so descending order is observable.
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = store
        .insert(NewCartItem {
            product_id: 7,
            name: "Gear".to_string(),
            quantity: 1,
            price: 4.5,
        })
        .await?;

    let items = store.list().await?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, second.id);
    assert_eq!(items[1].id, first.id);

    let found = store.find(first.id).await?.expect("row should exist");
    assert_eq!(found, first);
    assert!(store.find(first.id + 1000).await?.is_none());

    let updated = store
        .update_line(first.id, 5, 40.0)
        .await?
        .expect("row should exist");
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.price, 40.0);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.created_at, first.created_at);
    assert!(updated.updated_at >= first.updated_at);
    assert!(store.update_line(first.id + 1000, 1, 1.0).await?.is_none());

    assert!(store.delete(first.id).await?);
    assert!(!store.delete(first.id).await?);
    assert!(store.find(first.id).await?.is_none());

    Ok(())
}
