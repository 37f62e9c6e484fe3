use crate::transport::http::handlers::common::{json_422, path_422, query_422, ApiError};
use crate::transport::http::types::{
    AppState, MintRequest, NftDetailResponse, NftResponse, Pagination,
};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

pub const MINT_MESSAGE: &str = "Research NFT minted successfully (simulated).";

#[utoipa::path(
    post,
    path = "/api/v1/nft/mint_research_nft",
    tag = "NFT Interaction",
    request_body = MintRequest,
    responses(
        (status = 201, description = "NFT minted", body = NftResponse),
        (status = 422, description = "Invalid JSON body", body = crate::transport::http::types::ApiResponse),
        (status = 502, description = "Chain or content store failure", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn mint_research_nft_handler(
    State(state): State<AppState>,
    request: Result<Json<MintRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NftResponse>), ApiError> {
    let Json(request) = request.map_err(|e| json_422(e, "{\"metadata\": {...}}"))?;

    let receipt = state.nft_registry.lock().await.mint(request.metadata).await?;

    Ok((
        StatusCode::CREATED,
        Json(NftResponse {
            mint_address: receipt.mint_address,
            metadata_uri: receipt.metadata_uri,
            title: receipt.title,
            message: MINT_MESSAGE.to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/nft/get_nft_metadata/{mint_address}",
    tag = "NFT Interaction",
    params(
        ("mint_address" = String, Path, description = "Mint address returned by mint_research_nft")
    ),
    responses(
        (status = 200, description = "NFT metadata", body = NftDetailResponse),
        (status = 404, description = "NFT not found", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_nft_metadata_handler(
    State(state): State<AppState>,
    mint_address: Result<Path<String>, PathRejection>,
) -> Result<Json<NftDetailResponse>, ApiError> {
    let Path(mint_address) = mint_address.map_err(path_422)?;

    let registry = state.nft_registry.lock().await;
    let nft = registry.get(&mint_address)?;
    Ok(Json(NftDetailResponse::from(nft)))
}

#[utoipa::path(
    get,
    path = "/api/v1/nft/list_nfts",
    tag = "NFT Interaction",
    params(Pagination),
    responses(
        (status = 200, description = "Page of NFTs in mint order", body = [NftDetailResponse]),
        (status = 422, description = "Invalid query parameters", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn list_nfts_handler(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<NftDetailResponse>>, ApiError> {
    let Query(page) = query.map_err(query_422)?;

    let registry = state.nft_registry.lock().await;
    let nfts = registry
        .list(page.skip, page.limit)
        .into_iter()
        .map(NftDetailResponse::from)
        .collect();
    Ok(Json(nfts))
}
