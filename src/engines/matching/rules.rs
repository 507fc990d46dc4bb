//! Per-offer eligibility gates and additive scoring.
//!
//! Checks run in a fixed order and every check appends a human-readable
//! reason to one of the three buckets. The reason text and its order within
//! each bucket are part of the public contract; tests assert on both.

use super::domain::{Offer, StateRestrictionKind, UserProfile};
use super::weights;
use super::MatchReasons;

pub(crate) struct OfferEvaluation {
    pub score: f64,
    pub is_eligible: bool,
    pub reasons: MatchReasons,
}

pub(crate) fn evaluate_offer(offer: &Offer, profile: &UserProfile) -> OfferEvaluation {
    let mut score = 0.0;
    let mut is_eligible = true;
    let mut reasons = MatchReasons::default();

    // 1. AGI: hard gate, inclusive at the limit, with a headroom bonus.
    if profile.agi > offer.max_agi {
        is_eligible = false;
        reasons.disqualified.push(format!(
            "AGI of ${:.0} exceeds the ${:.0} limit",
            profile.agi, offer.max_agi
        ));
    } else {
        reasons.eligible.push(format!(
            "AGI of ${:.0} is within the ${:.0} limit",
            profile.agi, offer.max_agi
        ));
        if offer.max_agi > 0.0 {
            let headroom_pct = (offer.max_agi - profile.agi) / offer.max_agi * 100.0;
            score += (headroom_pct / 10.0).min(weights::AGI_HEADROOM_MAX);
        }
    }

    // 2. Age bounds: hard gate, only checked when the filer supplied an age.
    if let Some(age) = profile.age {
        let mut age_violated = false;
        if let Some(min_age) = offer.min_age {
            if age < min_age {
                is_eligible = false;
                age_violated = true;
                reasons
                    .disqualified
                    .push(format!("Below the minimum age of {min_age}"));
            }
        }
        if let Some(max_age) = offer.max_age {
            if age > max_age {
                is_eligible = false;
                age_violated = true;
                reasons
                    .disqualified
                    .push(format!("Above the maximum age of {max_age}"));
            }
        }
        if !age_violated && (offer.min_age.is_some() || offer.max_age.is_some()) {
            score += weights::AGE_REQUIREMENT_MET;
            reasons
                .eligible
                .push("Meets the age requirement".to_string());
        }
    }

    // 3. Military-only offers: hard gate.
    if offer.military_only {
        if profile.is_military {
            score += weights::MILITARY_ONLY_MATCH;
            reasons
                .eligible
                .push("Offer dedicated to military filers".to_string());
        } else {
            is_eligible = false;
            reasons
                .disqualified
                .push("Available to military filers only".to_string());
        }
    }

    // 4. State restriction: hard gate; availability is asserted either way
    //    when not disqualified.
    let state_blocked = match &offer.state_restrictions {
        Some(restriction) => match restriction.kind {
            StateRestrictionKind::Include => !restriction.states.contains(&profile.state),
            StateRestrictionKind::Exclude => restriction.states.contains(&profile.state),
        },
        None => false,
    };
    if state_blocked {
        is_eligible = false;
        reasons
            .disqualified
            .push(format!("Not available in {}", profile.state));
    } else {
        score += weights::STATE_AVAILABLE;
        reasons
            .eligible
            .push(format!("Available in {}", profile.state));
    }

    // 5. State return support: soft.
    if profile.needs_state_tax_return {
        if offer.supported_forms.state {
            score += weights::STATE_RETURN_SUPPORTED;
            reasons
                .eligible
                .push("State tax return preparation included".to_string());
        } else {
            score += weights::STATE_RETURN_MISSING;
            reasons
                .warnings
                .push("Does not support state tax returns".to_string());
        }
    }

    // 6. Schedule coverage: soft, one combined warning for all gaps.
    let missing_schedules: Vec<&str> = profile
        .has_schedules
        .iter()
        .filter(|schedule| !offer.supported_forms.schedules.contains(*schedule))
        .map(String::as_str)
        .collect();
    if !missing_schedules.is_empty() {
        score += weights::SCHEDULE_MISSING_EACH * missing_schedules.len() as f64;
        reasons.warnings.push(format!(
            "Missing support for schedule(s): {}",
            missing_schedules.join(", ")
        ));
    } else if !profile.has_schedules.is_empty() {
        score += weights::SCHEDULES_COVERED;
        reasons
            .eligible
            .push("Supports all schedules you need".to_string());
    }

    // 7. Prior-year returns: soft.
    if profile.needs_prior_year_return {
        if offer.features.prior_year_returns {
            score += weights::PRIOR_YEAR_SUPPORTED;
            reasons
                .eligible
                .push("Supports prior year returns".to_string());
        } else {
            score += weights::PRIOR_YEAR_MISSING;
            reasons
                .warnings
                .push("No prior year return support".to_string());
        }
    }

    // 8. Special-eligibility bonuses: independent, additive.
    if profile.is_military && offer.special_eligibility.military {
        score += weights::MILITARY_FEATURES;
        reasons
            .eligible
            .push("Special features for military filers".to_string());
    }
    if profile.is_student && offer.special_eligibility.students {
        score += weights::STUDENT_FEATURES;
        reasons
            .eligible
            .push("Special features for students".to_string());
    }
    if profile.has_disability && offer.special_eligibility.disabilities {
        score += weights::DISABILITY_FEATURES;
        reasons
            .eligible
            .push("Accessibility features for filers with disabilities".to_string());
    }
    if matches!(profile.age, Some(age) if age >= weights::SENIOR_AGE)
        && offer.special_eligibility.senior_citizens
    {
        score += weights::SENIOR_FEATURES;
        reasons
            .eligible
            .push("Features for senior filers".to_string());
    }

    // 9. Preference bonuses and penalties.
    if profile.prefer_spanish {
        if offer.features.spanish_language {
            score += weights::SPANISH_AVAILABLE;
            reasons.eligible.push("Available in Spanish".to_string());
        } else {
            score += weights::SPANISH_UNAVAILABLE;
            reasons
                .warnings
                .push("Not available in Spanish".to_string());
        }
    }
    if profile.wants_live_support {
        if offer.features.live_support {
            score += weights::LIVE_SUPPORT_AVAILABLE;
            reasons
                .eligible
                .push("Live customer support included".to_string());
        } else {
            score += weights::LIVE_SUPPORT_UNAVAILABLE;
            reasons
                .warnings
                .push("No live customer support".to_string());
        }
    }
    if profile.wants_mobile_app {
        if offer.features.mobile_app {
            score += weights::MOBILE_APP_AVAILABLE;
            reasons.eligible.push("Mobile app available".to_string());
        } else {
            score += weights::MOBILE_APP_UNAVAILABLE;
            reasons.warnings.push("No mobile app".to_string());
        }
    }

    // 10. Flat feature bonus.
    if offer.features.import_w2 {
        score += weights::W2_IMPORT;
        reasons
            .eligible
            .push("Can import W-2 data automatically".to_string());
    }

    OfferEvaluation {
        score,
        is_eligible,
        reasons,
    }
}
