use std::sync::Arc;

use cart_service::infra::config;
use cart_service::transport;
use cart_service::CartService;
use cart_service::HttpProductGateway;
use cart_service::PostgresCartStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // --- Storage Initialization ---
    println!("> Initializing cart store (ensures cart_items table exists)...");
    let store = Arc::new(PostgresCartStore::new().await?);

    // --- Product Gateway Initialization ---
    let product_base_url = config::product_service_base_url();
    println!("> Product service base URL: {}", product_base_url);
    let gateway = Arc::new(HttpProductGateway::new(product_base_url));

    // --- Service Wiring ---
    let cart = Arc::new(CartService::new(store, gateway));
    let app_state = transport::http::AppState { cart };
    println!("> CartService initialized successfully.");

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), exiting.");
        }
    }

    Ok(())
}
