//! Wallet-keyed identity records.

use crate::domain::error::{StoreError, StoreResult};
use std::collections::HashMap;
use tracing::info;

pub const WALLET_MIN_LEN: usize = 32;
pub const WALLET_MAX_LEN: usize = 44;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: u64,
    pub wallet_address: String,
    pub username: Option<String>,
}

/// Result of `IdentityStore::connect_wallet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    Created(Identity),
    Returning(Identity),
}

impl Connection {
    pub fn identity(&self) -> &Identity {
        match self {
            Connection::Created(identity) | Connection::Returning(identity) => identity,
        }
    }

    pub fn into_identity(self) -> Identity {
        match self {
            Connection::Created(identity) | Connection::Returning(identity) => identity,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Connection::Created(_) => "New user created and wallet connected successfully.",
            Connection::Returning(_) => "Wallet connected successfully. Welcome back!",
        }
    }
}

/// Shape check only: 32..=44 characters, all alphanumeric.
///
/// This is not a base58 or checksum validation; addresses containing `0`, `O`, `I`
/// or `l` pass, as do non-ASCII letters.
pub fn is_plausible_wallet_address(address: &str) -> bool {
    let len = address.chars().count();
    (WALLET_MIN_LEN..=WALLET_MAX_LEN).contains(&len) && address.chars().all(char::is_alphanumeric)
}

/// In-memory identity store. At most one record per wallet address; records are never deleted.
#[derive(Debug)]
pub struct IdentityStore {
    users: HashMap<u64, Identity>,
    by_wallet: HashMap<String, u64>,
    next_user_id: u64,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            by_wallet: HashMap::new(),
            next_user_id: 1,
        }
    }

    /// Creates the identity for `wallet_address` on first connect; later connects return the
    /// stored record unchanged.
    pub fn connect_wallet(&mut self, wallet_address: &str) -> StoreResult<Connection> {
        if !is_plausible_wallet_address(wallet_address) {
            return Err(StoreError::Validation(
                "Invalid wallet address format.".to_string(),
            ));
        }

        if let Some(identity) = self
            .by_wallet
            .get(wallet_address)
            .and_then(|id| self.users.get(id))
        {
            return Ok(Connection::Returning(identity.clone()));
        }

        let identity = Identity {
            id: self.next_user_id,
            wallet_address: wallet_address.to_string(),
            username: None,
        };
        self.users.insert(identity.id, identity.clone());
        self.by_wallet
            .insert(identity.wallet_address.clone(), identity.id);
        self.next_user_id += 1;

        info!(user_id = identity.id, wallet = %identity.wallet_address, "identity created");
        Ok(Connection::Created(identity))
    }

    pub fn get(&self, id: u64) -> Option<&Identity> {
        self.users.get(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
