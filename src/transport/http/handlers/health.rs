use crate::transport::http::types::{ApiResponse, MessageResponse};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Baseroot DeSci Platform API (Simulated Mode). Visit /docs for API documentation.";

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Root",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({ "status": "ok" })),
            error: None,
        }),
    )
}
