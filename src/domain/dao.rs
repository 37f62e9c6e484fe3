//! DAO funding proposals and the append-only vote log.
//!
//! `Voting` is the only status a proposal ever reaches here: there is no tally, close or
//! execute operation yet, so every submitted proposal stays open. The vote path still checks
//! the status so that it keeps rejecting closed proposals once those transitions exist.
//!
//! Votes are not deduplicated per voter. Every accepted call adds its weight to a tally.

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::page::page_range;
use crate::infra::ChainClient;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

pub const DEFAULT_CURRENCY: &str = "SOL";
pub const PLACEHOLDER_PROPOSER_WALLET: &str = "SimulatedProposerWalletAddress";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum ProposalStatus {
    Pending,
    Voting,
    SucceededQuorumNotMet,
    SucceededAwaitingExecution,
    Defeated,
    Executed,
    Cancelled,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pending",
            ProposalStatus::Voting => "Voting",
            ProposalStatus::SucceededQuorumNotMet => "SucceededQuorumNotMet",
            ProposalStatus::SucceededAwaitingExecution => "SucceededAwaitingExecution",
            ProposalStatus::Defeated => "Defeated",
            ProposalStatus::Executed => "Executed",
            ProposalStatus::Cancelled => "Cancelled",
        }
    }

    /// Case-insensitive exact match against the status name.
    pub fn matches(&self, filter: &str) -> bool {
        self.as_str().to_lowercase() == filter.to_lowercase()
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct ProposalInput {
    #[schema(example = "Fund Research on Quantum Entanglement Communication")]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ipfs_hash_details: Option<String>,
    /// Smallest currency unit (lamports for SOL).
    #[schema(example = 1000000000)]
    pub requested_amount: i64,
    #[serde(default = "default_currency")]
    #[schema(example = "SOL")]
    pub currency: String,
    pub target_funding_address: String,
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Proposal {
    pub on_chain_proposal_id: u64,
    pub db_proposal_id: u64,
    pub proposer_wallet_address: String,
    pub title: String,
    pub description: String,
    pub ipfs_hash_details: Option<String>,
    pub requested_amount: i64,
    pub currency: String,
    pub target_funding_address: String,
    pub yes_votes_on_chain: u64,
    pub no_votes_on_chain: u64,
    pub start_slot_on_chain: u64,
    pub end_slot_on_chain: u64,
    pub status_on_chain: ProposalStatus,
    pub executed_on_chain: bool,
    pub created_at: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Vote {
    pub proposal_id: u64,
    pub voter_wallet_address: String,
    pub vote_option: bool,
    pub vote_weight: u64,
    pub voted_at: String,
}

/// Proposals keyed by on-chain id, plus the vote log.
pub struct DaoRegistry {
    proposals: Vec<Proposal>,
    by_on_chain_id: HashMap<u64, usize>,
    votes: Vec<Vote>,
    next_db_proposal_id: u64,
    chain: Arc<dyn ChainClient>,
}

impl DaoRegistry {
    pub fn new(chain: Arc<dyn ChainClient>) -> Self {
        Self {
            proposals: Vec::new(),
            by_on_chain_id: HashMap::new(),
            votes: Vec::new(),
            next_db_proposal_id: 1,
            chain,
        }
    }

    /// Registers the proposal on chain and records it in `Voting` with empty tallies.
    pub async fn submit(&mut self, input: ProposalInput) -> StoreResult<&Proposal> {
        let on_chain = self.chain.submit_proposal(&input).await?;
        if on_chain.id == 0 || self.by_on_chain_id.contains_key(&on_chain.id) {
            return Err(StoreError::Upstream(anyhow::anyhow!(
                "chain returned an unusable proposal id: {}",
                on_chain.id
            )));
        }

        let proposal = Proposal {
            on_chain_proposal_id: on_chain.id,
            db_proposal_id: self.next_db_proposal_id,
            proposer_wallet_address: PLACEHOLDER_PROPOSER_WALLET.to_string(),
            title: input.title,
            description: input.description,
            ipfs_hash_details: input.ipfs_hash_details,
            requested_amount: input.requested_amount,
            currency: input.currency,
            target_funding_address: input.target_funding_address,
            yes_votes_on_chain: 0,
            no_votes_on_chain: 0,
            start_slot_on_chain: on_chain.start_slot,
            end_slot_on_chain: on_chain.end_slot,
            status_on_chain: ProposalStatus::Voting,
            executed_on_chain: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        self.next_db_proposal_id += 1;

        info!(
            on_chain_id = proposal.on_chain_proposal_id,
            db_id = proposal.db_proposal_id,
            requested = proposal.requested_amount,
            "DAO proposal submitted"
        );

        let idx = self.proposals.len();
        self.by_on_chain_id.insert(proposal.on_chain_proposal_id, idx);
        self.proposals.push(proposal);
        Ok(&self.proposals[idx])
    }

    /// Casts a vote and adds its weight to the matching tally.
    pub async fn vote(&mut self, on_chain_proposal_id: u64, vote_option: bool) -> StoreResult<Vote> {
        let idx = self.index_of(on_chain_proposal_id)?;
        let status = self.proposals[idx].status_on_chain;
        if status != ProposalStatus::Voting {
            return Err(StoreError::Conflict(format!(
                "Proposal is not active for voting. Current status: {}",
                status
            )));
        }

        let receipt = self.chain.cast_vote(on_chain_proposal_id, vote_option).await?;

        let proposal = &mut self.proposals[idx];
        if vote_option {
            proposal.yes_votes_on_chain = proposal.yes_votes_on_chain.saturating_add(receipt.weight);
        } else {
            proposal.no_votes_on_chain = proposal.no_votes_on_chain.saturating_add(receipt.weight);
        }

        let vote = Vote {
            proposal_id: on_chain_proposal_id,
            voter_wallet_address: receipt.voter_wallet_address,
            vote_option,
            vote_weight: receipt.weight,
            voted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        self.votes.push(vote.clone());

        info!(
            on_chain_id = on_chain_proposal_id,
            yes = vote_option,
            weight = vote.vote_weight,
            "DAO vote cast"
        );
        Ok(vote)
    }

    pub fn get(&self, on_chain_proposal_id: u64) -> StoreResult<&Proposal> {
        self.index_of(on_chain_proposal_id)
            .map(|idx| &self.proposals[idx])
    }

    /// Submission-ordered page `[skip : skip + limit]`, filtered by status before pagination.
    /// An empty filter is treated as no filter.
    pub fn list(&self, skip: i64, limit: i64, status_filter: Option<&str>) -> Vec<&Proposal> {
        let filter = status_filter.filter(|f| !f.is_empty());
        let matching: Vec<&Proposal> = self
            .proposals
            .iter()
            .filter(|p| filter.map_or(true, |f| p.status_on_chain.matches(f)))
            .collect();
        let range = page_range(matching.len(), skip, limit);
        matching[range].to_vec()
    }

    /// Vote log entries for one proposal, oldest first.
    pub fn votes_for(&self, on_chain_proposal_id: u64) -> Vec<&Vote> {
        self.votes
            .iter()
            .filter(|v| v.proposal_id == on_chain_proposal_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    fn index_of(&self, on_chain_proposal_id: u64) -> StoreResult<usize> {
        self.by_on_chain_id
            .get(&on_chain_proposal_id)
            .copied()
            .ok_or_else(|| StoreError::NotFound("Proposal not found.".to_string()))
    }

    #[cfg(test)]
    pub(crate) fn force_status(&mut self, on_chain_proposal_id: u64, status: ProposalStatus) {
        if let Ok(idx) = self.index_of(on_chain_proposal_id) {
            self.proposals[idx].status_on_chain = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::SimulatedChain;

    fn input(title: &str, amount: i64) -> ProposalInput {
        ProposalInput {
            title: title.to_string(),
            description: "desc".to_string(),
            ipfs_hash_details: None,
            requested_amount: amount,
            currency: DEFAULT_CURRENCY.to_string(),
            target_funding_address: "RecipientWalletAddress".to_string(),
        }
    }

    fn registry() -> DaoRegistry {
        DaoRegistry::new(Arc::new(SimulatedChain::new()))
    }

    #[tokio::test]
    async fn submit_assigns_ids_and_slots() {
        let mut dao = registry();
        let first = dao.submit(input("one", 1000)).await.unwrap().clone();
        let second = dao.submit(input("two", 5)).await.unwrap().clone();

        assert_eq!(first.on_chain_proposal_id, 1);
        assert_eq!(first.db_proposal_id, 1);
        assert_eq!(first.start_slot_on_chain, 1_001_000);
        assert_eq!(first.end_slot_on_chain, 1_173_800);
        assert_eq!(first.status_on_chain, ProposalStatus::Voting);
        assert!(!first.executed_on_chain);

        assert_eq!(second.on_chain_proposal_id, 2);
        assert_eq!(second.start_slot_on_chain, 1_002_000);
        assert_eq!(second.end_slot_on_chain, 1_174_800);
    }

    #[tokio::test]
    async fn repeated_votes_all_count() {
        let mut dao = registry();
        dao.submit(input("p", 1)).await.unwrap();

        dao.vote(1, true).await.unwrap();
        dao.vote(1, true).await.unwrap();
        dao.vote(1, false).await.unwrap();

        let p = dao.get(1).unwrap();
        assert_eq!(p.yes_votes_on_chain, 200);
        assert_eq!(p.no_votes_on_chain, 100);
        assert_eq!(dao.votes_for(1).len(), 3);
        assert!(dao.votes_for(2).is_empty());
    }

    #[tokio::test]
    async fn vote_on_closed_proposal_conflicts_without_mutation() {
        let mut dao = registry();
        dao.submit(input("p", 1)).await.unwrap();
        dao.force_status(1, ProposalStatus::Defeated);

        let err = dao.vote(1, true).await.unwrap_err();
        match err {
            StoreError::Conflict(msg) => assert!(msg.contains("Current status: Defeated")),
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(dao.get(1).unwrap().yes_votes_on_chain, 0);
        assert!(dao.votes_for(1).is_empty());
    }

    #[tokio::test]
    async fn vote_on_unknown_proposal_is_not_found() {
        let mut dao = registry();
        assert!(matches!(dao.vote(9, false).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_filters_before_paginating() {
        let mut dao = registry();
        for i in 0..4 {
            dao.submit(input(&format!("p{}", i), i)).await.unwrap();
        }
        dao.force_status(1, ProposalStatus::Cancelled);
        dao.force_status(3, ProposalStatus::Cancelled);

        let voting: Vec<u64> = dao
            .list(0, 10, Some("VOTING"))
            .iter()
            .map(|p| p.on_chain_proposal_id)
            .collect();
        assert_eq!(voting, vec![2, 4]);

        let cancelled_page: Vec<u64> = dao
            .list(1, 1, Some("cancelled"))
            .iter()
            .map(|p| p.on_chain_proposal_id)
            .collect();
        assert_eq!(cancelled_page, vec![3]);

        assert_eq!(dao.list(0, 10, Some("")).len(), 4);
        let last_voting: Vec<u64> = dao
            .list(-1, 10, Some("voting"))
            .iter()
            .map(|p| p.on_chain_proposal_id)
            .collect();
        assert_eq!(last_voting, vec![4]);
        assert!(dao.list(0, 10, Some("executed")).is_empty());
    }
}
