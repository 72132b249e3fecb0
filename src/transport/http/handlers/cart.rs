//! Cart CRUD endpoints.

use crate::transport::http::types::{
    json_422, ApiResponse, AppState, CreateCartItemRequest, UpdateCartItemRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

fn ok(message: &str, data: Option<JsonValue>) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(message, data))).into_response()
}

#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Cart items, newest first", body = ApiResponse),
        (status = 500, description = "Storage fault", body = ApiResponse)
    )
)]
pub async fn list_cart_items_handler(State(state): State<AppState>) -> Response {
    match state.cart.list_items().await {
        Ok(items) => ok(
            "Cart items fetched successfully",
            Some(serde_json::json!(items)),
        ),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/cart/{id}",
    params(("id" = i64, Path, description = "Cart item id")),
    responses(
        (status = 200, description = "Cart item", body = ApiResponse),
        (status = 404, description = "Cart item not found", body = ApiResponse)
    )
)]
pub async fn get_cart_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.cart.get_item(id).await {
        Ok(item) => ok(
            "Cart item fetched successfully",
            Some(serde_json::json!(item)),
        ),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/cart",
    request_body = CreateCartItemRequest,
    responses(
        (status = 200, description = "Cart item created", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 422, description = "Validation failed", body = ApiResponse)
    )
)]
pub async fn create_cart_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => return json_422(e, "{product_id: int, quantity: int >= 1}").into_response(),
    };
    match state.cart.create_item(&payload).await {
        Ok(item) => ok(
            "Cart item created successfully",
            Some(serde_json::json!(item)),
        ),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/cart/{id}",
    request_body = UpdateCartItemRequest,
    params(("id" = i64, Path, description = "Cart item id")),
    responses(
        (status = 200, description = "Cart item updated", body = ApiResponse),
        (status = 404, description = "Item or product/price unresolvable", body = ApiResponse),
        (status = 422, description = "Validation failed", body = ApiResponse)
    )
)]
pub async fn update_cart_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => return json_422(e, "{quantity: int >= 1}").into_response(),
    };
    match state.cart.update_item(id, &payload).await {
        Ok(item) => ok(
            "Cart item updated successfully",
            Some(serde_json::json!(item)),
        ),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/cart/{id}",
    params(("id" = i64, Path, description = "Cart item id")),
    responses(
        (status = 200, description = "Cart item deleted", body = ApiResponse),
        (status = 404, description = "Cart item not found", body = ApiResponse)
    )
)]
pub async fn delete_cart_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.cart.delete_item(id).await {
        Ok(()) => ok("Cart item deleted successfully", None),
        Err(e) => e.into_response(),
    }
}
