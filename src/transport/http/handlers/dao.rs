use crate::domain::dao::{Proposal, ProposalInput};
use crate::transport::http::handlers::common::{
    json_422, path_422, query_422, require_proposal_id, ApiError,
};
use crate::transport::http::types::{
    AppState, ProposalListQuery, ProposalResponse, VoteInput, VoteResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

pub const SUBMIT_MESSAGE: &str = "DAO proposal submitted successfully (simulated).";
pub const VOTE_MESSAGE: &str = "Vote cast successfully (simulated).";

#[utoipa::path(
    post,
    path = "/api/v1/dao/submit_proposal",
    tag = "DAO Interaction",
    request_body = ProposalInput,
    responses(
        (status = 201, description = "Proposal submitted and open for voting", body = ProposalResponse),
        (status = 422, description = "Invalid JSON body", body = crate::transport::http::types::ApiResponse),
        (status = 502, description = "Chain failure", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn submit_proposal_handler(
    State(state): State<AppState>,
    request: Result<Json<ProposalInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ProposalResponse>), ApiError> {
    let Json(request) = request.map_err(|e| {
        json_422(
            e,
            "{\"title\", \"description\", \"requested_amount\", \"target_funding_address\", ...}",
        )
    })?;

    let mut registry = state.dao_registry.lock().await;
    let proposal = registry.submit(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProposalResponse {
            on_chain_proposal_id: proposal.on_chain_proposal_id,
            db_proposal_id: proposal.db_proposal_id,
            title: proposal.title.clone(),
            status_on_chain: proposal.status_on_chain,
            message: SUBMIT_MESSAGE.to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/dao/vote_on_proposal/{on_chain_proposal_id}",
    tag = "DAO Interaction",
    params(
        ("on_chain_proposal_id" = u64, Path, description = "On-chain proposal id (>= 1)")
    ),
    request_body = VoteInput,
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponse),
        (status = 400, description = "Proposal is not open for voting", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Proposal not found", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Invalid id or body", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn vote_on_proposal_handler(
    State(state): State<AppState>,
    proposal_id: Result<Path<u64>, PathRejection>,
    request: Result<Json<VoteInput>, JsonRejection>,
) -> Result<Json<VoteResponse>, ApiError> {
    let Path(proposal_id) = proposal_id.map_err(path_422)?;
    let proposal_id = require_proposal_id(proposal_id)?;
    let Json(request) = request.map_err(|e| json_422(e, "{\"vote_option\": true}"))?;

    let vote = state
        .dao_registry
        .lock()
        .await
        .vote(proposal_id, request.vote_option)
        .await?;

    Ok(Json(VoteResponse {
        proposal_id: vote.proposal_id,
        voter_wallet_address: vote.voter_wallet_address,
        vote_option: vote.vote_option,
        vote_weight: vote.vote_weight,
        message: VOTE_MESSAGE.to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/dao/get_proposal_details/{on_chain_proposal_id}",
    tag = "DAO Interaction",
    params(
        ("on_chain_proposal_id" = u64, Path, description = "On-chain proposal id (>= 1)")
    ),
    responses(
        (status = 200, description = "Proposal details", body = Proposal),
        (status = 404, description = "Proposal not found", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Invalid id", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_proposal_details_handler(
    State(state): State<AppState>,
    proposal_id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Proposal>, ApiError> {
    let Path(proposal_id) = proposal_id.map_err(path_422)?;
    let proposal_id = require_proposal_id(proposal_id)?;

    let registry = state.dao_registry.lock().await;
    Ok(Json(registry.get(proposal_id)?.clone()))
}

#[utoipa::path(
    get,
    path = "/api/v1/dao/list_proposals",
    tag = "DAO Interaction",
    params(ProposalListQuery),
    responses(
        (status = 200, description = "Page of proposals in submission order", body = [Proposal]),
        (status = 422, description = "Invalid query parameters", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn list_proposals_handler(
    State(state): State<AppState>,
    query: Result<Query<ProposalListQuery>, QueryRejection>,
) -> Result<Json<Vec<Proposal>>, ApiError> {
    let Query(query) = query.map_err(query_422)?;

    let registry = state.dao_registry.lock().await;
    let proposals = registry
        .list(query.skip, query.limit, query.status_filter.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(proposals))
}
