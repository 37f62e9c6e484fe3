//! Wires the stores to their collaborators. Stores are built once per process and
//! handed to the router; nothing is reached through module-level globals.

use crate::domain::discovery::{EmbeddingIndex, SimulatedIndex};
use crate::domain::{DaoRegistry, IdentityStore, LiteratureDiscovery, NftRegistry};
use crate::infra::{ChainClient, ContentStore, SimulatedChain, SimulatedContentStore};
use crate::transport::http::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Builds the application state over the given collaborators.
pub fn build_state(
    chain: Arc<dyn ChainClient>,
    content: Arc<dyn ContentStore>,
    index: Box<dyn EmbeddingIndex>,
) -> AppState {
    AppState {
        identity_store: Arc::new(Mutex::new(IdentityStore::new())),
        nft_registry: Arc::new(Mutex::new(NftRegistry::new(chain.clone(), content))),
        dao_registry: Arc::new(Mutex::new(DaoRegistry::new(chain))),
        discovery: Arc::new(LiteratureDiscovery::new(index)),
    }
}

/// State backed entirely by the in-process simulations. `discovery_seed` makes the
/// similarity scores replayable.
pub fn simulated_state(discovery_seed: Option<u64>) -> AppState {
    let index: Box<dyn EmbeddingIndex> = match discovery_seed {
        Some(seed) => Box::new(SimulatedIndex::seeded(seed)),
        None => Box::new(SimulatedIndex::from_entropy()),
    };
    build_state(
        Arc::new(SimulatedChain::new()),
        Arc::new(SimulatedContentStore),
        index,
    )
}
