pub mod chain;
pub mod config;
pub mod content;
pub mod telemetry;

pub use chain::{ChainClient, SimulatedChain};
pub use content::{ContentStore, SimulatedContentStore};
