mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn discover(server: &TestServer, body: Value) -> Result<reqwest::Response, reqwest::Error> {
    server
        .client
        .post(server.url("/api/v1/ai/discover_literature"))
        .json(&body)
        .send()
        .await
}

#[tokio::test]
async fn test_requires_keywords_or_abstract() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;

    for body in [json!({}), json!({ "keywords": [], "abstract": "" })] {
        let resp = discover(&server, body).await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err: Value = resp.json().await?;
        assert_eq!(err["error"], "Either keywords or an abstract must be provided.");
    }
    Ok(())
}

#[tokio::test]
async fn test_top_k_bounds_are_validated() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;

    for top_k in [0, 21] {
        let resp = discover(&server, json!({ "keywords": ["dao"], "top_k": top_k })).await?;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "top_k={}", top_k);
    }
    Ok(())
}

#[tokio::test]
async fn test_results_are_bounded_and_ranked() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;

    let resp = discover(
        &server,
        json!({ "keywords": ["blockchain", "dao"], "abstract": "DeSci funding", "top_k": 2 }),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;

    let papers = body["similar_papers"].as_array().unwrap();
    assert!(papers.len() <= 2);
    assert_eq!(body["message"], format!("Successfully retrieved {} similar papers (simulated).", papers.len()));
    assert_eq!(
        body["query_received"]["combined_input_for_similarity"],
        "blockchain dao DeSci funding"
    );

    let scores: Vec<f64> = papers
        .iter()
        .map(|p| p["similarity_score"].as_f64().unwrap())
        .collect();
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    for p in papers {
        assert!(p["abstract_snippet"].as_str().unwrap().ends_with("..."));
        assert!(p["source_url"].as_str().unwrap().starts_with("https://example.com/papers/"));
    }
    Ok(())
}

#[tokio::test]
async fn test_default_top_k_is_five() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start().await?;

    let body: Value = discover(&server, json!({ "abstract": "anything" })).await?.json().await?;
    let papers = body["similar_papers"].as_array().unwrap();
    assert_eq!(papers.len(), 5);
    assert!(papers
        .iter()
        .all(|p| p["similarity_score"].as_f64().unwrap() > 0.0));
    assert!(body["query_received"].get("keywords").is_none());
    Ok(())
}
