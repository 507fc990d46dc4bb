//! Child tax credit, its refundable portion, and the child and dependent
//! care credit.

use crate::engines::tax::domain::{round_to_cents, round_to_dollars, resolve_tax_year, FilingStatus};

const CTC_PER_CHILD: f64 = 2000.0;
const CTC_PHASEOUT_THRESHOLD_JOINT: f64 = 400000.0;
const CTC_PHASEOUT_THRESHOLD_OTHER: f64 = 200000.0;
const CTC_REDUCTION_STEP: f64 = 1000.0;
const CTC_REDUCTION_PER_STEP: f64 = 50.0;

const ACTC_REFUNDABLE_PER_CHILD: f64 = 1800.0;
const ACTC_EARNED_INCOME_FLOOR: f64 = 2500.0;
const ACTC_EARNED_INCOME_RATE: f64 = 0.15;

const CARE_MAX_EXPENSES_ONE: f64 = 3000.0;
const CARE_MAX_EXPENSES_TWO_PLUS: f64 = 6000.0;
const CARE_TOP_RATE: f64 = 0.35;
const CARE_FLOOR_RATE: f64 = 0.20;
const CARE_RATE_STEP: f64 = 0.01;
const CARE_AGI_STEP: f64 = 2000.0;
const CARE_AGI_START: f64 = 15000.0;

/// Nonrefundable child tax credit: $2,000 per qualifying child, reduced by
/// $50 for each full or partial $1,000 of AGI over the filing-status
/// threshold. Never negative.
pub fn calculate_child_tax_credit(
    qualifying_children: u32,
    agi: f64,
    filing_status: FilingStatus,
    tax_year: u16,
) -> f64 {
    // Credit figures are unchanged across the supported years.
    let _ = resolve_tax_year(tax_year);

    if qualifying_children == 0 {
        return 0.0;
    }

    let base = qualifying_children as f64 * CTC_PER_CHILD;

    let threshold = match filing_status {
        FilingStatus::MarriedJoint => CTC_PHASEOUT_THRESHOLD_JOINT,
        _ => CTC_PHASEOUT_THRESHOLD_OTHER,
    };

    if agi <= threshold {
        return base;
    }

    let reduction = ((agi - threshold) / CTC_REDUCTION_STEP).ceil() * CTC_REDUCTION_PER_STEP;
    (base - reduction).max(0.0)
}

/// Refundable additional child tax credit, capped at $1,800 per child, 15% of
/// earned income over $2,500, and the portion of the nonrefundable child tax
/// credit that income tax could not absorb.
pub fn calculate_additional_child_tax_credit(
    qualifying_children: u32,
    earned_income: f64,
    unused_child_tax_credit: f64,
    tax_year: u16,
) -> f64 {
    let _ = resolve_tax_year(tax_year);

    if qualifying_children == 0 || unused_child_tax_credit <= 0.0 {
        return 0.0;
    }

    let per_child_cap = qualifying_children as f64 * ACTC_REFUNDABLE_PER_CHILD;
    let earned_income_cap =
        (earned_income - ACTC_EARNED_INCOME_FLOOR).max(0.0) * ACTC_EARNED_INCOME_RATE;

    let max_refundable = per_child_cap.min(earned_income_cap);
    round_to_cents(max_refundable.min(unused_child_tax_credit).max(0.0))
}

/// Child and dependent care credit. Allowable expenses cap at $3,000 for one
/// dependent or $6,000 for two or more; the credit rate starts at 35% and
/// steps down one point per full $2,000 of AGI above $15,000, flooring at
/// 20%. Whole-dollar rounding.
pub fn calculate_child_care_credit(
    qualifying_expenses: f64,
    qualifying_dependents: u32,
    agi: f64,
    tax_year: u16,
) -> f64 {
    let _ = resolve_tax_year(tax_year);

    if qualifying_expenses <= 0.0 || qualifying_dependents == 0 {
        return 0.0;
    }

    let max_expenses = if qualifying_dependents >= 2 {
        CARE_MAX_EXPENSES_TWO_PLUS
    } else {
        CARE_MAX_EXPENSES_ONE
    };
    let allowable = qualifying_expenses.min(max_expenses);

    let steps = if agi > CARE_AGI_START {
        ((agi - CARE_AGI_START) / CARE_AGI_STEP).floor()
    } else {
        0.0
    };
    let rate = (CARE_TOP_RATE - steps * CARE_RATE_STEP).max(CARE_FLOOR_RATE);

    round_to_dollars(allowable * rate)
}
