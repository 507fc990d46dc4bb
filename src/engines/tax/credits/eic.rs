//! Earned income credit parameters and phase-out math.

use crate::engines::tax::domain::{round_to_cents, resolve_tax_year, FilingStatus};

/// Limit pair keyed by whether the taxpayer files jointly.
#[derive(Debug, Clone, Copy)]
struct IncomeLimits {
    single: f64,
    married: f64,
}

impl IncomeLimits {
    fn for_status(&self, filing_status: FilingStatus) -> f64 {
        match filing_status {
            FilingStatus::MarriedJoint => self.married,
            _ => self.single,
        }
    }
}

/// Per-child-count EIC parameters for one tax year.
#[derive(Debug, Clone, Copy)]
struct EicParams {
    max_credit: f64,
    income_limit: IncomeLimits,
    phaseout_start: IncomeLimits,
}

/// Credit accrual rate per dollar of earned income, by child count.
const PHASE_IN_RATES: [f64; 4] = [0.0765, 0.34, 0.40, 0.45];
/// Credit reduction rate per dollar of AGI over the phase-out start.
const PHASEOUT_RATES: [f64; 4] = [0.0765, 0.1598, 0.2106, 0.2106];

const PARAMS_2024: [EicParams; 4] = [
    EicParams {
        max_credit: 632.0,
        income_limit: IncomeLimits {
            single: 18591.0,
            married: 25511.0,
        },
        phaseout_start: IncomeLimits {
            single: 10330.0,
            married: 17250.0,
        },
    },
    EicParams {
        max_credit: 4213.0,
        income_limit: IncomeLimits {
            single: 49084.0,
            married: 56004.0,
        },
        phaseout_start: IncomeLimits {
            single: 22720.0,
            married: 29640.0,
        },
    },
    EicParams {
        max_credit: 6960.0,
        income_limit: IncomeLimits {
            single: 55768.0,
            married: 62688.0,
        },
        phaseout_start: IncomeLimits {
            single: 22720.0,
            married: 29640.0,
        },
    },
    EicParams {
        max_credit: 7830.0,
        income_limit: IncomeLimits {
            single: 59899.0,
            married: 66819.0,
        },
        phaseout_start: IncomeLimits {
            single: 22720.0,
            married: 29640.0,
        },
    },
];

const PARAMS_2025: [EicParams; 4] = [
    EicParams {
        max_credit: 649.0,
        income_limit: IncomeLimits {
            single: 19104.0,
            married: 26214.0,
        },
        phaseout_start: IncomeLimits {
            single: 10620.0,
            married: 17730.0,
        },
    },
    EicParams {
        max_credit: 4328.0,
        income_limit: IncomeLimits {
            single: 50434.0,
            married: 57554.0,
        },
        phaseout_start: IncomeLimits {
            single: 23350.0,
            married: 30470.0,
        },
    },
    EicParams {
        max_credit: 7152.0,
        income_limit: IncomeLimits {
            single: 57310.0,
            married: 64430.0,
        },
        phaseout_start: IncomeLimits {
            single: 23350.0,
            married: 30470.0,
        },
    },
    EicParams {
        max_credit: 8046.0,
        income_limit: IncomeLimits {
            single: 61555.0,
            married: 68675.0,
        },
        phaseout_start: IncomeLimits {
            single: 23350.0,
            married: 30470.0,
        },
    },
];

fn params_for(tax_year: u16) -> &'static [EicParams; 4] {
    match resolve_tax_year(tax_year) {
        2025 => &PARAMS_2025,
        _ => &PARAMS_2024,
    }
}

/// Compute the earned income credit.
///
/// Child counts above three are treated as "three or more". The credit phases
/// in against earned income, caps at the per-child-count maximum, and phases
/// out against AGI above the status-dependent start; both AGI and earned
/// income must sit under the status-dependent income limit or the credit is
/// zero outright. Rounded to cents, never negative.
pub fn calculate_earned_income_credit(
    agi: f64,
    earned_income: f64,
    qualifying_children: u32,
    filing_status: FilingStatus,
    tax_year: u16,
) -> f64 {
    if earned_income <= 0.0 {
        return 0.0;
    }

    let children = qualifying_children.min(3) as usize;
    let params = &params_for(tax_year)[children];

    let income_limit = params.income_limit.for_status(filing_status);
    if agi > income_limit || earned_income > income_limit {
        return 0.0;
    }

    let mut credit = (earned_income * PHASE_IN_RATES[children]).min(params.max_credit);

    let phaseout_start = params.phaseout_start.for_status(filing_status);
    if agi > phaseout_start {
        credit -= (agi - phaseout_start) * PHASEOUT_RATES[children];
    }

    round_to_cents(credit.max(0.0))
}
