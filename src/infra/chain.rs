//! On-chain collaborator: NFT minting, proposal registration and vote casting.
//!
//! Only the simulated client exists today; the registries talk to `dyn ChainClient`
//! so a real program client can replace it without touching the stores or routes.

use crate::domain::dao::ProposalInput;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// First slot of the simulated slot space.
pub const SLOT_BASE: u64 = 1_000_000;
/// Slot spacing between consecutive proposal ids.
pub const SLOTS_PER_PROPOSAL: u64 = 1_000;
/// Voting window length (~1 day at ~0.5s per slot).
pub const VOTING_PERIOD_SLOTS: u64 = 172_800;
/// Weight granted to every simulated vote.
pub const SIMULATED_VOTE_WEIGHT: u64 = 100;
pub const SIMULATED_VOTER_WALLET: &str = "SimulatedVoterWalletAddress";

/// Proposal identifiers assigned by the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnChainProposal {
    pub id: u64,
    pub start_slot: u64,
    pub end_slot: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub voter_wallet_address: String,
    pub weight: u64,
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Mints the research NFT and returns its mint address.
    async fn mint_research_nft(
        &self,
        sequence: u64,
        title: &str,
        metadata_uri: &str,
    ) -> anyhow::Result<String>;

    /// Registers a proposal and returns its on-chain id and voting window.
    async fn submit_proposal(&self, proposal: &ProposalInput) -> anyhow::Result<OnChainProposal>;

    /// Casts a vote and returns the voter and the weight applied.
    async fn cast_vote(&self, proposal_id: u64, vote_option: bool) -> anyhow::Result<VoteReceipt>;
}

/// Voting window for a proposal id: start = 1,000,000 + id * 1,000; end = start + 172,800.
pub fn voting_window(proposal_id: u64) -> (u64, u64) {
    let start = SLOT_BASE + proposal_id * SLOTS_PER_PROPOSAL;
    (start, start + VOTING_PERIOD_SLOTS)
}

/// Placeholder mint address: `FakeMintAddr` + zero-padded sequence + the first five
/// characters of the title with spaces removed.
pub fn simulated_mint_address(sequence: u64, title: &str) -> String {
    let fragment: String = title.chars().take(5).filter(|c| *c != ' ').collect();
    format!("FakeMintAddr{:03}{}", sequence, fragment)
}

/// Deterministic stand-in for the deployed program. Never fails.
///
/// The address format has no separator between sequence and title, so `(100, "0abc")`
/// and `(1000, "abc")` render the same text. Issued addresses are remembered and a
/// clash gets a `-N` suffix, keeping every mint address unique.
#[derive(Debug, Default)]
pub struct SimulatedChain {
    proposal_counter: AtomicU64,
    issued_mints: Mutex<HashSet<String>>,
}

impl SimulatedChain {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChainClient for SimulatedChain {
    async fn mint_research_nft(
        &self,
        sequence: u64,
        title: &str,
        _metadata_uri: &str,
    ) -> anyhow::Result<String> {
        let base = simulated_mint_address(sequence, title);
        // the set is only ever inserted into, so a poisoned lock still holds valid data
        let mut issued = self.issued_mints.lock().unwrap_or_else(|p| p.into_inner());
        let mut address = base.clone();
        let mut suffix = 1u64;
        while issued.contains(&address) {
            suffix += 1;
            address = format!("{}-{}", base, suffix);
        }
        issued.insert(address.clone());
        Ok(address)
    }

    async fn submit_proposal(&self, _proposal: &ProposalInput) -> anyhow::Result<OnChainProposal> {
        let id = self.proposal_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let (start_slot, end_slot) = voting_window(id);
        Ok(OnChainProposal {
            id,
            start_slot,
            end_slot,
        })
    }

    async fn cast_vote(&self, _proposal_id: u64, _vote_option: bool) -> anyhow::Result<VoteReceipt> {
        Ok(VoteReceipt {
            voter_wallet_address: SIMULATED_VOTER_WALLET.to_string(),
            weight: SIMULATED_VOTE_WEIGHT,
        })
    }
}
