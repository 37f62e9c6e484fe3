//! Research NFT registry.

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::page::page_range;
use crate::infra::{ChainClient, ContentStore};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

pub const DEFAULT_STORAGE_PROVIDER: &str = "IPFS";
pub const ON_CHAIN_SYMBOL: &str = "BSRTR";
/// Uploader recorded for every mint until minting is tied to an authenticated identity.
pub const PLACEHOLDER_UPLOADER_USER_ID: u64 = 1;
pub const PLACEHOLDER_UPLOADER_WALLET: &str = "SimulatedUploaderWalletAddress";

fn default_storage_provider() -> String {
    DEFAULT_STORAGE_PROVIDER.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct NftMetadataInput {
    #[schema(example = "A Novel Approach to Decentralized Science")]
    pub title: String,
    #[schema(example = "This paper details a new method for...")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    /// ISO 8601 date string.
    #[schema(example = "2025-05-15")]
    pub publication_date: String,
    /// IPFS / Arweave content hash.
    pub content_storage_hash: String,
    #[serde(default = "default_storage_provider")]
    #[schema(example = "IPFS")]
    pub content_storage_provider: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub research_type: Option<String>,
}

/// Stored NFT record. Immutable once minted.
#[derive(Debug, Clone)]
pub struct ResearchNft {
    pub id: u64,
    pub mint_address: String,
    pub uploader_user_id: u64,
    pub metadata: NftMetadataInput,
    pub metadata_uri: String,
    pub on_chain_symbol: &'static str,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    pub mint_address: String,
    pub metadata_uri: String,
    pub title: String,
}

/// NFT records keyed by mint address, iterated in mint order.
pub struct NftRegistry {
    nfts: Vec<ResearchNft>,
    by_mint: HashMap<String, usize>,
    next_nft_id: u64,
    chain: Arc<dyn ChainClient>,
    content: Arc<dyn ContentStore>,
}

impl NftRegistry {
    pub fn new(chain: Arc<dyn ChainClient>, content: Arc<dyn ContentStore>) -> Self {
        Self {
            nfts: Vec::new(),
            by_mint: HashMap::new(),
            next_nft_id: 1,
            chain,
            content,
        }
    }

    /// Publishes the metadata, mints on chain and records the NFT.
    ///
    /// The sequence counter only advances once both collaborators succeed.
    pub async fn mint(&mut self, metadata: NftMetadataInput) -> StoreResult<MintReceipt> {
        let sequence = self.next_nft_id;
        let metadata_uri = self.content.publish_metadata(&metadata).await?;
        let mint_address = self
            .chain
            .mint_research_nft(sequence, &metadata.title, &metadata_uri)
            .await?;

        if self.by_mint.contains_key(&mint_address) {
            return Err(StoreError::Upstream(anyhow::anyhow!(
                "chain returned an already registered mint address: {}",
                mint_address
            )));
        }

        let receipt = MintReceipt {
            mint_address: mint_address.clone(),
            metadata_uri: metadata_uri.clone(),
            title: metadata.title.clone(),
        };

        self.by_mint.insert(mint_address.clone(), self.nfts.len());
        self.nfts.push(ResearchNft {
            id: sequence,
            mint_address,
            uploader_user_id: PLACEHOLDER_UPLOADER_USER_ID,
            metadata,
            metadata_uri,
            on_chain_symbol: ON_CHAIN_SYMBOL,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        });
        self.next_nft_id += 1;

        info!(nft_id = sequence, mint = %receipt.mint_address, "research NFT minted");
        Ok(receipt)
    }

    pub fn get(&self, mint_address: &str) -> StoreResult<&ResearchNft> {
        self.by_mint
            .get(mint_address)
            .map(|&idx| &self.nfts[idx])
            .ok_or_else(|| StoreError::NotFound("NFT not found.".to_string()))
    }

    /// Records `[skip : skip + limit]` in mint order; out-of-range or negative bounds yield
    /// fewer or none, never an error.
    pub fn list(&self, skip: i64, limit: i64) -> Vec<&ResearchNft> {
        self.nfts[page_range(self.nfts.len(), skip, limit)].iter().collect()
    }

    pub fn len(&self) -> usize {
        self.nfts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nfts.is_empty()
    }
}
