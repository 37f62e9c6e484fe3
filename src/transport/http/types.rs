use crate::domain::dao::ProposalStatus;
use crate::domain::discovery::SimilarPaper;
use crate::domain::nft::{NftMetadataInput, ResearchNft, PLACEHOLDER_UPLOADER_WALLET};
use crate::domain::{DaoRegistry, IdentityStore, LiteratureDiscovery, NftRegistry};
use serde::{Deserialize, Deserializer, Serialize};
use std::num::IntErrorKind;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const DEFAULT_TOP_K: u32 = 5;
pub const MAX_TOP_K: u32 = 20;

/// Shared handles to the per-group stores. Each group locks only its own store.
#[derive(Clone)]
pub struct AppState {
    pub identity_store: Arc<Mutex<IdentityStore>>,
    pub nft_registry: Arc<Mutex<NftRegistry>>,
    pub dao_registry: Arc<Mutex<DaoRegistry>>,
    pub discovery: Arc<LiteratureDiscovery>,
}

/// Envelope used for failures and for the health check.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// --- auth ---

#[derive(Deserialize, Debug, ToSchema)]
pub struct WalletConnectRequest {
    #[schema(example = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin")]
    pub wallet_address: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UserResponse {
    pub id: u64,
    pub wallet_address: String,
    pub username: Option<String>,
    pub message: String,
}

// --- nft ---

#[derive(Deserialize, Debug, ToSchema)]
pub struct MintRequest {
    pub metadata: NftMetadataInput,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct NftResponse {
    pub mint_address: String,
    pub metadata_uri: String,
    pub title: String,
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct NftDetailResponse {
    pub mint_address: String,
    pub uploader_wallet_address: String,
    pub title: String,
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub publication_date: String,
    pub content_storage_hash: String,
    pub content_storage_provider: String,
    pub metadata_uri: String,
    pub keywords: Option<Vec<String>>,
    pub research_type: Option<String>,
    pub created_at: String,
}

impl From<&ResearchNft> for NftDetailResponse {
    fn from(nft: &ResearchNft) -> Self {
        let m = &nft.metadata;
        Self {
            mint_address: nft.mint_address.clone(),
            // uploader_user_id is not yet resolved against the identity store
            uploader_wallet_address: PLACEHOLDER_UPLOADER_WALLET.to_string(),
            title: m.title.clone(),
            abstract_text: m.abstract_text.clone(),
            authors: m.authors.clone(),
            publication_date: m.publication_date.clone(),
            content_storage_hash: m.content_storage_hash.clone(),
            content_storage_provider: m.content_storage_provider.clone(),
            metadata_uri: nft.metadata_uri.clone(),
            keywords: m.keywords.clone(),
            research_type: m.research_type.clone(),
            created_at: nft.created_at.clone(),
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

/// Parses a query integer, saturating values too large for `i64` instead of rejecting them.
/// Non-numeric input is still an error.
fn saturating_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().parse::<i64>() {
        Ok(v) => Ok(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(serde::de::Error::custom(format!(
                "expected an integer, got '{}'",
                raw
            ))),
        },
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Slice start; negative values count from the end.
    #[serde(default, deserialize_with = "saturating_i64")]
    pub skip: i64,
    /// Page size; `skip + limit` is the slice end, so negative values also count from the end.
    #[serde(default = "default_limit", deserialize_with = "saturating_i64")]
    pub limit: i64,
}

// --- dao ---

#[derive(Serialize, Debug, ToSchema)]
pub struct ProposalResponse {
    pub on_chain_proposal_id: u64,
    pub db_proposal_id: u64,
    pub title: String,
    pub status_on_chain: ProposalStatus,
    pub message: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct VoteInput {
    /// `true` for yes, `false` for no.
    pub vote_option: bool,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct VoteResponse {
    pub proposal_id: u64,
    pub voter_wallet_address: String,
    pub vote_option: bool,
    pub vote_weight: u64,
    pub message: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProposalListQuery {
    #[serde(default, deserialize_with = "saturating_i64")]
    pub skip: i64,
    #[serde(default = "default_limit", deserialize_with = "saturating_i64")]
    pub limit: i64,
    /// Case-insensitive status name, e.g. `voting`.
    #[serde(default)]
    pub status_filter: Option<String>,
}

// --- ai ---

fn default_top_k() -> u32 {
    DEFAULT_TOP_K
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AiSearchRequest {
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default = "default_top_k")]
    #[schema(minimum = 1, maximum = 20, default = 5)]
    pub top_k: u32,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct AiSearchResponse {
    #[schema(value_type = Object)]
    pub query_received: JsonValue,
    pub similar_papers: Vec<SimilarPaper>,
    pub message: String,
}
