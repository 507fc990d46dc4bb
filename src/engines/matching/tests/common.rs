use std::collections::BTreeSet;

use crate::engines::matching::domain::{
    Offer, OfferFeatures, SpecialEligibility, StateRestriction, StateRestrictionKind,
    SupportedForms, UserProfile,
};
use crate::engines::tax::FilingStatus;

pub(super) fn offer(id: &str) -> Offer {
    Offer {
        id: id.to_string(),
        name: format!("Partner {id}"),
        url: format!("https://partner-{id}.example.com"),
        max_agi: 79000.0,
        min_age: None,
        max_age: None,
        state_restrictions: None,
        military_only: false,
        supported_forms: SupportedForms::default(),
        features: OfferFeatures::default(),
        special_eligibility: SpecialEligibility::default(),
    }
}

pub(super) fn profile() -> UserProfile {
    UserProfile {
        agi: 50000.0,
        age: Some(30),
        state: "CA".to_string(),
        needs_state_tax_return: false,
        filing_status: FilingStatus::Single,
        has_schedules: BTreeSet::new(),
        needs_prior_year_return: false,
        is_military: false,
        is_student: false,
        has_disability: false,
        prefer_spanish: false,
        wants_live_support: false,
        wants_mobile_app: false,
    }
}

pub(super) fn include_states(states: &[&str]) -> Option<StateRestriction> {
    Some(StateRestriction {
        kind: StateRestrictionKind::Include,
        states: states.iter().map(|state| state.to_string()).collect(),
    })
}

pub(super) fn exclude_states(states: &[&str]) -> Option<StateRestriction> {
    Some(StateRestriction {
        kind: StateRestrictionKind::Exclude,
        states: states.iter().map(|state| state.to_string()).collect(),
    })
}

pub(super) fn schedules(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
