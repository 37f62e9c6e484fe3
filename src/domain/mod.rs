//! Route-group stores. Each owns its own state and counters; none reads another.

pub mod dao;
pub mod discovery;
pub mod error;
pub mod identity;
pub mod nft;
pub mod page;

pub use dao::DaoRegistry;
pub use discovery::LiteratureDiscovery;
pub use error::{StoreError, StoreResult};
pub use identity::IdentityStore;
pub use nft::NftRegistry;
