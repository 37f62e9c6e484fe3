//! Walks the whole surface once: identity, NFT mint + lookup, proposal + vote.

mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_end_to_end_flow() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;
    let client = &server.client;
    let wallet = "A".repeat(32);

    // --- identity ---
    let resp = client
        .post(server.url("/api/v1/auth/connect_wallet"))
        .json(&json!({ "wallet_address": wallet }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = resp.json().await?;
    assert_eq!(user["id"], 1);
    assert_eq!(user["wallet_address"], wallet.as_str());
    assert!(user["username"].is_null());
    assert!(user["message"].as_str().unwrap().contains("New user created"));

    let resp = client
        .post(server.url("/api/v1/auth/connect_wallet"))
        .json(&json!({ "wallet_address": wallet }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let again: Value = resp.json().await?;
    assert_eq!(again["id"], 1);
    assert!(again["message"].as_str().unwrap().contains("Welcome back"));

    // --- nft ---
    let resp = client
        .post(server.url("/api/v1/nft/mint_research_nft"))
        .json(&json!({
            "metadata": {
                "title": "T",
                "abstract_text": "An abstract about T.",
                "authors": ["Dr. Ada Lovelace"],
                "publication_date": "2025-05-15",
                "content_storage_hash": "h1"
            }
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let minted: Value = resp.json().await?;
    assert!(minted["metadata_uri"].as_str().unwrap().contains("h1"));
    assert_eq!(minted["title"], "T");
    let mint_address = minted["mint_address"].as_str().unwrap().to_string();

    let resp = client
        .get(server.url(&format!("/api/v1/nft/get_nft_metadata/{}", mint_address)))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: Value = resp.json().await?;
    assert_eq!(detail["abstract_text"], "An abstract about T.");
    assert_eq!(detail["content_storage_provider"], "IPFS");
    assert_eq!(detail["uploader_wallet_address"], "SimulatedUploaderWalletAddress");

    // --- dao ---
    let resp = client
        .post(server.url("/api/v1/dao/submit_proposal"))
        .json(&json!({
            "title": "Fund it",
            "description": "Please",
            "requested_amount": 1000,
            "target_funding_address": "RecipientWalletAddress"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let submitted: Value = resp.json().await?;
    assert_eq!(submitted["on_chain_proposal_id"], 1);
    assert_eq!(submitted["status_on_chain"], "Voting");

    let details: Value = client
        .get(server.url("/api/v1/dao/get_proposal_details/1"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(details["start_slot_on_chain"], 1_001_000);
    assert_eq!(details["end_slot_on_chain"], 1_173_800);
    assert_eq!(details["currency"], "SOL");

    let resp = client
        .post(server.url("/api/v1/dao/vote_on_proposal/1"))
        .json(&json!({ "vote_option": true }))
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let vote: Value = resp.json().await?;
    assert_eq!(vote["vote_weight"], 100);
    assert_eq!(vote["proposal_id"], 1);

    let details: Value = client
        .get(server.url("/api/v1/dao/get_proposal_details/1"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(details["yes_votes_on_chain"], 100);
    assert_eq!(details["no_votes_on_chain"], 0);

    Ok(())
}

#[tokio::test]
async fn test_root_and_health() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;

    let root: Value = server.client.get(server.url("/")).send().await?.json().await?;
    assert!(root["message"].as_str().unwrap().contains("Visit /docs"));

    let health: Value = server.client.get(server.url("/health")).send().await?.json().await?;
    assert_eq!(health["success"], true);
    assert_eq!(health["data"]["status"], "ok");
    Ok(())
}
