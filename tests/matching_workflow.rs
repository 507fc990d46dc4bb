//! End-to-end specifications for the offer matching endpoint: profiles and
//! offer sets go in as JSON, ranked results with reason strings come back.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use taxnav::api::api_router;
use taxnav::engines::tax::MemoryTaxReturnStore;
use tower::ServiceExt;

fn build_router() -> axum::Router {
    api_router(Arc::new(MemoryTaxReturnStore::default()))
}

fn profile() -> Value {
    json!({
        "agi": 50000.0,
        "age": 30,
        "state": "CA",
        "filing_status": "single",
        "needs_state_tax_return": true
    })
}

fn offers() -> Value {
    json!([
        {
            "id": "alpha",
            "name": "Alpha Tax",
            "url": "https://alpha.example.com",
            "max_agi": 79000.0,
            "supported_forms": { "state": true },
            "features": { "import_w2": true }
        },
        {
            "id": "beta",
            "name": "Beta Tax",
            "url": "https://beta.example.com",
            "max_agi": 79000.0
        },
        {
            "id": "gamma",
            "name": "Gamma Tax",
            "url": "https://gamma.example.com",
            "max_agi": 45000.0,
            "features": { "import_w2": true, "live_support": true }
        }
    ])
}

async fn dispatch(router: axum::Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/match")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&payload).expect("serialize request"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    (status, payload)
}

#[tokio::test]
async fn match_endpoint_ranks_eligible_offers_first() {
    let payload = json!({ "profile": profile(), "offers": offers() });

    let (status, body) = dispatch(build_router(), payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eligible_count"], json!(2));

    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["offer"]["id"], json!("alpha"));
    assert_eq!(results[2]["offer"]["id"], json!("gamma"));
    assert_eq!(results[2]["is_eligible"], json!(false));

    let scores: Vec<u64> = results[..2]
        .iter()
        .map(|result| result["score"].as_u64().expect("score"))
        .collect();
    assert!(scores[0] >= scores[1]);
}

#[tokio::test]
async fn match_endpoint_reports_reason_strings() {
    let payload = json!({ "profile": profile(), "offers": offers() });

    let (_, body) = dispatch(build_router(), payload).await;
    let results = body["results"].as_array().expect("results array");

    let alpha = &results[0];
    let eligible_reasons = alpha["reasons"]["eligible"]
        .as_array()
        .expect("eligible reasons");
    assert!(eligible_reasons
        .iter()
        .any(|reason| reason == "State tax return preparation included"));
    assert!(eligible_reasons
        .iter()
        .any(|reason| reason == "AGI of $50000 is within the $79000 limit"));

    let beta = &results[1];
    let warnings = beta["reasons"]["warnings"].as_array().expect("warnings");
    assert!(warnings
        .iter()
        .any(|warning| warning == "Does not support state tax returns"));

    let gamma = &results[2];
    let disqualified = gamma["reasons"]["disqualified"]
        .as_array()
        .expect("disqualified reasons");
    assert!(disqualified
        .iter()
        .any(|reason| reason == "AGI of $50000 exceeds the $45000 limit"));
}

#[tokio::test]
async fn match_endpoint_lists_top_match_ids() {
    let payload = json!({ "profile": profile(), "offers": offers() });

    let (_, body) = dispatch(build_router(), payload).await;

    let top = body["top_match_ids"].as_array().expect("top match ids");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0], json!("alpha"));
}

#[tokio::test]
async fn match_endpoint_is_idempotent() {
    let payload = json!({ "profile": profile(), "offers": offers() });

    let (_, first) = dispatch(build_router(), payload.clone()).await;
    let (_, second) = dispatch(build_router(), payload).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn match_endpoint_handles_an_empty_offer_set() {
    let payload = json!({ "profile": profile(), "offers": [] });

    let (status, body) = dispatch(build_router(), payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eligible_count"], json!(0));
    assert_eq!(body["results"], json!([]));
    assert_eq!(body["top_match_ids"], json!([]));
}
