pub mod router;
pub mod types;
pub mod handlers {
    pub mod ai;
    pub mod auth;
    pub mod common;
    pub mod dao;
    pub mod health;
    pub mod nft;
}

pub use handlers::common::ApiError;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
