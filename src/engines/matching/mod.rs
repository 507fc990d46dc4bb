//! Partner-offer matching engine.
//!
//! Scores every offer against a taxpayer profile under hard eligibility gates
//! and soft additive preference scoring, returning all offers (ineligible
//! ones included, for transparency) sorted eligible-first and then by
//! descending score.

pub mod directory;
pub mod domain;
mod rules;
mod weights;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use directory::{load_offers, load_offers_from_path, OfferDirectoryError};
pub use domain::{
    Offer, OfferFeatures, SpecialEligibility, StateRestriction, StateRestrictionKind,
    SupportedForms, UserProfile,
};

/// Default number of matches surfaced on a results screen.
pub const DEFAULT_TOP_MATCHES: usize = 3;

/// Reason strings collected while evaluating one offer, bucketed by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReasons {
    pub eligible: Vec<String>,
    pub warnings: Vec<String>,
    pub disqualified: Vec<String>,
}

/// Scored outcome for a single offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub offer: Offer,
    pub score: u8,
    pub is_eligible: bool,
    pub reasons: MatchReasons,
}

/// Stateless scorer applying the eligibility gates and weight table to each
/// offer independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine;

impl MatchingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a set of offers against a profile.
    ///
    /// Deterministic for identical inputs. Every eligible result sorts before
    /// every ineligible one; within each partition scores are non-increasing.
    pub fn score(&self, offers: &[Offer], profile: &UserProfile) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = offers
            .iter()
            .map(|offer| {
                let evaluation = rules::evaluate_offer(offer, profile);
                MatchResult {
                    offer: offer.clone(),
                    score: evaluation.score.clamp(0.0, 100.0).round() as u8,
                    is_eligible: evaluation.is_eligible,
                    reasons: evaluation.reasons,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.is_eligible
                .cmp(&a.is_eligible)
                .then(b.score.cmp(&a.score))
        });
        results
    }
}

/// First `limit` eligible results from an already-sorted result list.
pub fn top_matches(results: &[MatchResult], limit: usize) -> Vec<&MatchResult> {
    results
        .iter()
        .filter(|result| result.is_eligible)
        .take(limit)
        .collect()
}

/// Eligible partition of a result list.
pub fn eligible_matches(results: &[MatchResult]) -> Vec<&MatchResult> {
    results.iter().filter(|result| result.is_eligible).collect()
}

/// Ineligible partition of a result list.
pub fn ineligible_matches(results: &[MatchResult]) -> Vec<&MatchResult> {
    results
        .iter()
        .filter(|result| !result.is_eligible)
        .collect()
}
