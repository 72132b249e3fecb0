use crate::app::cart_service::{CartError, CartService};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<CartService>,
}

/// Uniform response envelope returned by every endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    /// Field-level validation messages, present only on 422 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub errors: Option<JsonValue>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: Option<JsonValue>) -> Self {
        Self {
            message: message.into(),
            data,
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Option<JsonValue>) -> Self {
        Self {
            message: message.into(),
            data: None,
            errors,
        }
    }
}

/// Documented request body for `POST /cart` (handlers read the raw JSON so
/// field validation can report per-field message lists).
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCartItemRequest {
    pub product_id: i64,
    /// Must be >= 1.
    pub quantity: i32,
}

/// Documented request body for `PUT/PATCH /cart/{id}`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCartItemRequest {
    /// Must be >= 1.
    pub quantity: i32,
}

/// Boundary-level error translator: one place maps every [`CartError`] kind
/// to its status code and envelope, instead of per-handler duplication.
impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CartError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiResponse::error(
                    "Validation failed",
                    Some(serde_json::json!(errors)),
                ),
            ),
            CartError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ApiResponse::error(message, None))
            }
            CartError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::error(message, None),
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(
            "Validation failed",
            Some(serde_json::json!({
                "body": [format!("Invalid JSON body: {} (expected: {})", err, expected)]
            })),
        )),
    )
}
