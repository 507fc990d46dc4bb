//! American opportunity and lifetime learning education credits.
//!
//! Both share the same MAGI phase-out band: [80,000, 90,000) for single-style
//! statuses and [160,000, 180,000) for joint filers, scaling the credit down
//! linearly inside the band and to zero at or above its end.

use crate::engines::tax::domain::{round_to_dollars, resolve_tax_year, FilingStatus};

const AOTC_FULL_CREDIT_EXPENSES: f64 = 2000.0;
const AOTC_PARTIAL_RATE: f64 = 0.25;
const AOTC_MAX_CREDIT: f64 = 2500.0;

const LLC_MAX_EXPENSES: f64 = 10000.0;
const LLC_RATE: f64 = 0.20;

#[derive(Debug, Clone, Copy)]
struct PhaseoutBand {
    start: f64,
    end: f64,
}

const BAND_SINGLE: PhaseoutBand = PhaseoutBand {
    start: 80000.0,
    end: 90000.0,
};
const BAND_JOINT: PhaseoutBand = PhaseoutBand {
    start: 160000.0,
    end: 180000.0,
};

fn band_for(filing_status: FilingStatus) -> PhaseoutBand {
    match filing_status {
        FilingStatus::MarriedJoint => BAND_JOINT,
        _ => BAND_SINGLE,
    }
}

fn apply_phaseout(credit: f64, agi: f64, band: PhaseoutBand) -> f64 {
    if agi >= band.end {
        return 0.0;
    }
    if agi <= band.start {
        return credit;
    }
    credit * (1.0 - (agi - band.start) / (band.end - band.start))
}

/// American opportunity credit: 100% of the first $2,000 of qualified
/// expenses plus 25% of the next $2,000, capped at $2,500, phased out across
/// the MAGI band. Whole-dollar rounding.
pub fn calculate_american_opportunity_credit(
    qualified_expenses: f64,
    agi: f64,
    filing_status: FilingStatus,
    tax_year: u16,
) -> f64 {
    let _ = resolve_tax_year(tax_year);

    if qualified_expenses <= 0.0 {
        return 0.0;
    }

    let base = if qualified_expenses <= AOTC_FULL_CREDIT_EXPENSES {
        qualified_expenses
    } else {
        AOTC_FULL_CREDIT_EXPENSES
            + (qualified_expenses - AOTC_FULL_CREDIT_EXPENSES).min(AOTC_FULL_CREDIT_EXPENSES)
                * AOTC_PARTIAL_RATE
    };
    let credit = base.min(AOTC_MAX_CREDIT);

    round_to_dollars(apply_phaseout(credit, agi, band_for(filing_status)))
}

/// Lifetime learning credit: 20% of up to $10,000 of qualified expenses,
/// phased out across the same MAGI band as the AOTC. Whole-dollar rounding.
pub fn calculate_lifetime_learning_credit(
    qualified_expenses: f64,
    agi: f64,
    filing_status: FilingStatus,
    tax_year: u16,
) -> f64 {
    let _ = resolve_tax_year(tax_year);

    if qualified_expenses <= 0.0 {
        return 0.0;
    }

    let credit = qualified_expenses.min(LLC_MAX_EXPENSES) * LLC_RATE;
    round_to_dollars(apply_phaseout(credit, agi, band_for(filing_status)))
}
