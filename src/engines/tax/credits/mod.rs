//! Credit calculations with their phase-in and phase-out schedules.
//!
//! Each function is total over its numeric domain: out-of-range inputs clamp
//! or return zero rather than erroring, and no result is ever negative.

mod education;
mod eic;
mod family;

pub use education::{
    calculate_american_opportunity_credit, calculate_lifetime_learning_credit,
};
pub use eic::calculate_earned_income_credit;
pub use family::{
    calculate_additional_child_tax_credit, calculate_child_care_credit,
    calculate_child_tax_credit,
};
