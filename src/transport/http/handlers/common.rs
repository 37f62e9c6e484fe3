use crate::domain::StoreError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

/// Handler failure rendered as `{"success": false, "error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Request did not match the declared schema or bounds.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some(self.message),
            }),
        )
            .into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            StoreError::NotFound(msg) => ApiError::new(StatusCode::NOT_FOUND, msg),
            StoreError::Conflict(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            StoreError::Upstream(e) => {
                warn!(error = %e, "collaborator call failed");
                ApiError::new(StatusCode::BAD_GATEWAY, format!("Upstream failure: {}", e))
            }
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> ApiError {
    ApiError::unprocessable(format!("Invalid JSON body: {} (expected: {})", err, expected))
}

pub fn path_422(err: PathRejection) -> ApiError {
    ApiError::unprocessable(format!("Invalid path parameter: {}", err))
}

pub fn query_422(err: QueryRejection) -> ApiError {
    ApiError::unprocessable(format!("Invalid query parameters: {}", err))
}

/// Proposal ids start at 1.
pub fn require_proposal_id(id: u64) -> Result<u64, ApiError> {
    if id < 1 {
        return Err(ApiError::unprocessable(
            "on_chain_proposal_id must be greater than or equal to 1",
        ));
    }
    Ok(id)
}

pub fn require_top_k(top_k: u32, max: u32) -> Result<usize, ApiError> {
    if !(1..=max).contains(&top_k) {
        return Err(ApiError::unprocessable(format!(
            "top_k must be between 1 and {}, got {}",
            max, top_k
        )));
    }
    Ok(top_k as usize)
}
