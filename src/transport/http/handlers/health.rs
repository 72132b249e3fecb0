use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (storage reachable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (storage unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.cart.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                "ok",
                Some(serde_json::json!({ "status": "ok" })),
            )),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(
                format!("Storage ping failed: {}", e),
                None,
            )),
        )
            .into_response(),
    }
}
