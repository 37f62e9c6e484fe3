use crate::domain::dao::{Proposal, ProposalInput, ProposalStatus};
use crate::domain::discovery::SimilarPaper;
use crate::domain::nft::NftMetadataInput;
use crate::transport::http::handlers::{ai, auth, dao, health, nft};
use crate::transport::http::types::{
    AiSearchRequest, AiSearchResponse, ApiResponse, AppState, MessageResponse, MintRequest,
    NftDetailResponse, NftResponse, ProposalResponse, UserResponse, VoteInput, VoteResponse,
    WalletConnectRequest,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Baseroot DeSci Platform API - Simulated"),
    paths(
        health::root_handler,
        health::healthcheck_handler,
        auth::connect_wallet_handler,
        nft::mint_research_nft_handler,
        nft::get_nft_metadata_handler,
        nft::list_nfts_handler,
        dao::submit_proposal_handler,
        dao::vote_on_proposal_handler,
        dao::get_proposal_details_handler,
        dao::list_proposals_handler,
        ai::discover_literature_handler
    ),
    components(schemas(
        ApiResponse,
        MessageResponse,
        WalletConnectRequest,
        UserResponse,
        MintRequest,
        NftMetadataInput,
        NftResponse,
        NftDetailResponse,
        ProposalInput,
        ProposalResponse,
        Proposal,
        ProposalStatus,
        VoteInput,
        VoteResponse,
        AiSearchRequest,
        AiSearchResponse,
        SimilarPaper
    ))
)]
pub struct ApiDoc;

fn auth_routes() -> Router<AppState> {
    Router::new().route("/connect_wallet", post(auth::connect_wallet_handler))
}

fn nft_routes() -> Router<AppState> {
    Router::new()
        .route("/mint_research_nft", post(nft::mint_research_nft_handler))
        .route(
            "/get_nft_metadata/:mint_address",
            get(nft::get_nft_metadata_handler),
        )
        .route("/list_nfts", get(nft::list_nfts_handler))
}

fn dao_routes() -> Router<AppState> {
    Router::new()
        .route("/submit_proposal", post(dao::submit_proposal_handler))
        .route(
            "/vote_on_proposal/:on_chain_proposal_id",
            post(dao::vote_on_proposal_handler),
        )
        .route(
            "/get_proposal_details/:on_chain_proposal_id",
            get(dao::get_proposal_details_handler),
        )
        .route("/list_proposals", get(dao::list_proposals_handler))
}

fn ai_routes() -> Router<AppState> {
    Router::new().route("/discover_literature", post(ai::discover_literature_handler))
}

/// Registers the four route groups under `api_prefix` (e.g. `/api/v1`, or `""` for none)
/// next to the root greeting and the health check.
pub fn create_router(app_state: AppState, api_prefix: &str) -> Router {
    let groups = Router::new()
        .nest("/auth", auth_routes())
        .nest("/nft", nft_routes())
        .nest("/dao", dao_routes())
        .nest("/ai", ai_routes());

    let base = Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler));

    let app = if api_prefix.is_empty() {
        base.merge(groups)
    } else {
        base.nest(api_prefix, groups)
    };

    app.with_state(app_state)
}
