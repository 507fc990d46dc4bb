//! HTTP surface over the matching and tax engines.
//!
//! The engines stay pure; these handlers only deserialize requests, call
//! through, and shape JSON responses. Returns persist through the
//! [`TaxReturnStore`] seam so the summary endpoint can estimate the filer's
//! current return.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::engines::matching::{self, MatchResult, MatchingEngine, Offer, UserProfile};
use crate::engines::tax::{build_breakdown, TaxReturn, TaxReturnStore};

/// Router builder exposing the match and tax-estimate endpoints.
pub fn api_router<S>(store: Arc<S>) -> Router
where
    S: TaxReturnStore + 'static,
{
    Router::new()
        .route("/api/v1/match", post(match_handler))
        .route("/api/v1/tax/return", post(save_return_handler::<S>))
        .route("/api/v1/tax/summary", get(summary_handler::<S>))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub eligible_count: usize,
    pub top_match_ids: Vec<String>,
}

pub(crate) async fn match_handler(
    axum::Json(request): axum::Json<MatchRequest>,
) -> axum::Json<MatchResponse> {
    let engine = MatchingEngine::new();
    let results = engine.score(&request.offers, &request.profile);

    let eligible_count = matching::eligible_matches(&results).len();
    let top_match_ids = matching::top_matches(&results, matching::DEFAULT_TOP_MATCHES)
        .iter()
        .map(|result| result.offer.id.clone())
        .collect();

    info!(
        offers = request.offers.len(),
        eligible = eligible_count,
        "scored match request"
    );

    axum::Json(MatchResponse {
        results,
        eligible_count,
        top_match_ids,
    })
}

pub(crate) async fn save_return_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(tax_return): axum::Json<TaxReturn>,
) -> Response
where
    S: TaxReturnStore + 'static,
{
    let tax_year = tax_return.tax_year;
    match store.save(tax_return) {
        Ok(()) => {
            let payload = json!({ "status": "saved", "tax_year": tax_year });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<S>(State(store): State<Arc<S>>) -> Response
where
    S: TaxReturnStore + 'static,
{
    match store.current() {
        Ok(Some(tax_return)) => {
            let breakdown = build_breakdown(&tax_return);
            (StatusCode::OK, axum::Json(breakdown)).into_response()
        }
        Ok(None) => {
            let payload = json!({ "error": "no tax return on file" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
