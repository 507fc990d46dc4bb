use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engines::tax::FilingStatus;

/// Whether a partner's state list names where it operates or where it does
/// not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateRestrictionKind {
    Include,
    Exclude,
}

/// Geographic availability restriction on an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRestriction {
    pub kind: StateRestrictionKind,
    pub states: BTreeSet<String>,
}

/// Forms and schedules a partner can prepare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedForms {
    #[serde(default)]
    pub federal: Vec<String>,
    #[serde(default)]
    pub state: bool,
    #[serde(default)]
    pub schedules: BTreeSet<String>,
}

/// Product features a partner advertises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferFeatures {
    #[serde(default)]
    pub prior_year_returns: bool,
    #[serde(default)]
    pub import_w2: bool,
    #[serde(default)]
    pub live_support: bool,
    #[serde(default)]
    pub mobile_app: bool,
    #[serde(default)]
    pub spanish_language: bool,
}

/// Populations a partner builds dedicated features for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialEligibility {
    #[serde(default)]
    pub students: bool,
    #[serde(default)]
    pub military: bool,
    #[serde(default)]
    pub disabilities: bool,
    #[serde(default)]
    pub senior_citizens: bool,
}

/// A filing-partner offer. Immutable reference data: loaded once, never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub url: String,
    pub max_agi: f64,
    #[serde(default)]
    pub min_age: Option<u8>,
    #[serde(default)]
    pub max_age: Option<u8>,
    #[serde(default)]
    pub state_restrictions: Option<StateRestriction>,
    #[serde(default)]
    pub military_only: bool,
    #[serde(default)]
    pub supported_forms: SupportedForms,
    #[serde(default)]
    pub features: OfferFeatures,
    #[serde(default)]
    pub special_eligibility: SpecialEligibility,
}

/// The taxpayer profile a match request scores against. Constructed fresh per
/// request; no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub agi: f64,
    #[serde(default)]
    pub age: Option<u8>,
    /// Two-letter state code.
    pub state: String,
    #[serde(default)]
    pub needs_state_tax_return: bool,
    pub filing_status: FilingStatus,
    #[serde(default)]
    pub has_schedules: BTreeSet<String>,
    #[serde(default)]
    pub needs_prior_year_return: bool,
    #[serde(default)]
    pub is_military: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub prefer_spanish: bool,
    #[serde(default)]
    pub wants_live_support: bool,
    #[serde(default)]
    pub wants_mobile_app: bool,
}
