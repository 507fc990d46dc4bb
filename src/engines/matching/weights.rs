//! Hand-tuned score deltas, one named constant per scoring rule.
//!
//! These are domain-tuned magic numbers with no underlying formula; keeping
//! them in one table keeps the scoring model auditable and lets each rule be
//! tested in isolation.

/// Largest bonus the AGI headroom rule can award.
pub(crate) const AGI_HEADROOM_MAX: f64 = 10.0;

/// Bonus when an offer defines an age bound and the filer satisfies it.
pub(crate) const AGE_REQUIREMENT_MET: f64 = 5.0;

/// Bonus when a military-only offer meets a military filer.
pub(crate) const MILITARY_ONLY_MATCH: f64 = 15.0;

/// Bonus whenever the offer is available in the filer's state.
pub(crate) const STATE_AVAILABLE: f64 = 5.0;

pub(crate) const STATE_RETURN_SUPPORTED: f64 = 10.0;
pub(crate) const STATE_RETURN_MISSING: f64 = -15.0;

/// Penalty per schedule the filer needs but the offer lacks.
pub(crate) const SCHEDULE_MISSING_EACH: f64 = -5.0;
pub(crate) const SCHEDULES_COVERED: f64 = 10.0;

pub(crate) const PRIOR_YEAR_SUPPORTED: f64 = 10.0;
pub(crate) const PRIOR_YEAR_MISSING: f64 = -10.0;

pub(crate) const MILITARY_FEATURES: f64 = 10.0;
pub(crate) const STUDENT_FEATURES: f64 = 8.0;
pub(crate) const DISABILITY_FEATURES: f64 = 8.0;
pub(crate) const SENIOR_FEATURES: f64 = 8.0;

/// Age at which senior-focused features start to count.
pub(crate) const SENIOR_AGE: u8 = 55;

pub(crate) const SPANISH_AVAILABLE: f64 = 8.0;
pub(crate) const SPANISH_UNAVAILABLE: f64 = -3.0;

pub(crate) const LIVE_SUPPORT_AVAILABLE: f64 = 6.0;
pub(crate) const LIVE_SUPPORT_UNAVAILABLE: f64 = -2.0;

pub(crate) const MOBILE_APP_AVAILABLE: f64 = 6.0;
pub(crate) const MOBILE_APP_UNAVAILABLE: f64 = -2.0;

/// Flat bonus for W-2 import, awarded regardless of preference.
pub(crate) const W2_IMPORT: f64 = 3.0;
