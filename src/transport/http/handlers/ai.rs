use crate::domain::discovery::LiteratureQuery;
use crate::transport::http::handlers::common::{json_422, require_top_k, ApiError};
use crate::transport::http::types::{
    AiSearchRequest, AiSearchResponse, AppState, MAX_TOP_K,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/v1/ai/discover_literature",
    tag = "AI Discovery",
    request_body = AiSearchRequest,
    responses(
        (status = 200, description = "Ranked papers (simulated scores)", body = AiSearchResponse),
        (status = 400, description = "Neither keywords nor abstract provided", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Invalid JSON body or top_k out of range", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn discover_literature_handler(
    State(state): State<AppState>,
    request: Result<Json<AiSearchRequest>, JsonRejection>,
) -> Result<Json<AiSearchResponse>, ApiError> {
    let Json(request) = request.map_err(|e| {
        json_422(e, "{\"keywords\": [...], \"abstract\": \"...\", \"top_k\": 5}")
    })?;
    let top_k = require_top_k(request.top_k, MAX_TOP_K)?;

    let query = LiteratureQuery::new(request.keywords, request.abstract_text)?;
    let papers = state.discovery.discover(&query, top_k);

    Ok(Json(AiSearchResponse {
        query_received: query.to_json(),
        message: format!(
            "Successfully retrieved {} similar papers (simulated).",
            papers.len()
        ),
        similar_papers: papers,
    }))
}
