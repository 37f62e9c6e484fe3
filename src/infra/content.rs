//! Off-chain content collaborator (IPFS / Arweave).

use crate::domain::nft::NftMetadataInput;
use async_trait::async_trait;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Publishes the NFT's off-chain JSON metadata and returns its URI.
    async fn publish_metadata(&self, metadata: &NftMetadataInput) -> anyhow::Result<String>;
}

/// Derives the URI from the content hash; nothing is uploaded.
///
/// The URI scheme is always `ipfs://`, whatever `content_storage_provider` says.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedContentStore;

pub fn simulated_metadata_uri(content_storage_hash: &str) -> String {
    format!("ipfs://{}_metadata_json", content_storage_hash)
}

#[async_trait]
impl ContentStore for SimulatedContentStore {
    async fn publish_metadata(&self, metadata: &NftMetadataInput) -> anyhow::Result<String> {
        Ok(simulated_metadata_uri(&metadata.content_storage_hash))
    }
}
