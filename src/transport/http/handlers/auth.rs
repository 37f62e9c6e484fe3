use crate::transport::http::handlers::common::{json_422, ApiError};
use crate::transport::http::types::{AppState, UserResponse, WalletConnectRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/v1/auth/connect_wallet",
    tag = "Authentication",
    request_body = WalletConnectRequest,
    responses(
        (status = 200, description = "Wallet connected (new or returning user)", body = UserResponse),
        (status = 400, description = "Invalid wallet address format", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Invalid JSON body", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn connect_wallet_handler(
    State(state): State<AppState>,
    request: Result<Json<WalletConnectRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) =
        request.map_err(|e| json_422(e, "{\"wallet_address\": \"...\"}"))?;

    let connection = state
        .identity_store
        .lock()
        .await
        .connect_wallet(&request.wallet_address)?;

    let message = connection.message().to_string();
    let identity = connection.into_identity();
    Ok(Json(UserResponse {
        id: identity.id,
        wallet_address: identity.wallet_address,
        username: identity.username,
        message,
    }))
}
