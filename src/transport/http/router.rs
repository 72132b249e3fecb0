use crate::transport::http::handlers::{cart, health};
use crate::transport::http::types::{ApiResponse, CreateCartItemRequest, UpdateCartItemRequest};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        cart::list_cart_items_handler,
        cart::get_cart_item_handler,
        cart::create_cart_item_handler,
        cart::update_cart_item_handler,
        cart::delete_cart_item_handler
    ),
    components(schemas(
        ApiResponse,
        CreateCartItemRequest,
        UpdateCartItemRequest,
        crate::domain::cart::CartItem
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/cart",
            get(cart::list_cart_items_handler).post(cart::create_cart_item_handler),
        )
        .route(
            "/cart/:id",
            get(cart::get_cart_item_handler)
                .put(cart::update_cart_item_handler)
                .patch(cart::update_cart_item_handler)
                .delete(cart::delete_cart_item_handler),
        )
        .with_state(app_state)
}
