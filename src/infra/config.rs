//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Base URL of the remote product service.
///
/// `PRODUCT_SERVICE_URL` wins when set; otherwise the address is keyed off
/// `APP_ENV` (`local` -> localhost, anything else -> the in-cluster hostname).
pub fn product_service_base_url() -> String {
    if let Ok(url) = std::env::var("PRODUCT_SERVICE_URL") {
        return url;
    }
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
    if app_env == "local" {
        "http://localhost:3000".to_string()
    } else {
        "http://product-service:3000".to_string()
    }
}

/// Listen address for the HTTP server.
pub fn bind_addr() -> String {
    std::env::var("CART_SERVICE_ADDR").unwrap_or_else(|_| "0.0.0.0:3002".to_string())
}
