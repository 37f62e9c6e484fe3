pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{build_state, simulated_state};
pub use domain::{DaoRegistry, IdentityStore, LiteratureDiscovery, NftRegistry, StoreError};
pub use infra::{ChainClient, ContentStore, SimulatedChain, SimulatedContentStore};
