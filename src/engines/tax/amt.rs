//! Tentative alternative minimum tax.
//!
//! This module computes only the tentative minimum tax. It does not compare
//! against regular tax; consumers own the `max(regular, tentative) - regular`
//! reconciliation that produces an actual AMT liability.

use super::domain::{round_to_dollars, resolve_tax_year, FilingStatus};

/// Cap on the approximated SALT add-back when reconstructing AMTI.
const SALT_ADDBACK_CAP: f64 = 10000.0;
/// Share of itemized deductions treated as state and local taxes.
const SALT_ADDBACK_SHARE: f64 = 0.3;
/// Exemption reduction per dollar of AMTI over the phase-out threshold.
const EXEMPTION_PHASEOUT_RATE: f64 = 0.25;
const LOW_RATE: f64 = 0.26;
const HIGH_RATE: f64 = 0.28;

#[derive(Debug, Clone, Copy)]
struct AmtParams {
    exemption: f64,
    phaseout_threshold: f64,
    /// AMT base above which the 28% rate applies.
    rate_breakpoint: f64,
}

fn params_for(tax_year: u16, filing_status: FilingStatus) -> AmtParams {
    use FilingStatus::*;

    match (resolve_tax_year(tax_year), filing_status) {
        (2025, Single | HeadOfHousehold) => AmtParams {
            exemption: 88100.0,
            phaseout_threshold: 626350.0,
            rate_breakpoint: 239100.0,
        },
        (2025, MarriedJoint | QualifyingWidow) => AmtParams {
            exemption: 137000.0,
            phaseout_threshold: 1252700.0,
            rate_breakpoint: 239100.0,
        },
        (2025, MarriedSeparate) => AmtParams {
            exemption: 68500.0,
            phaseout_threshold: 626350.0,
            rate_breakpoint: 119550.0,
        },
        (_, Single | HeadOfHousehold) => AmtParams {
            exemption: 85700.0,
            phaseout_threshold: 609350.0,
            rate_breakpoint: 232600.0,
        },
        (_, MarriedJoint | QualifyingWidow) => AmtParams {
            exemption: 133300.0,
            phaseout_threshold: 1218700.0,
            rate_breakpoint: 232600.0,
        },
        (_, MarriedSeparate) => AmtParams {
            exemption: 66650.0,
            phaseout_threshold: 609350.0,
            rate_breakpoint: 116300.0,
        },
    }
}

/// Compute the tentative minimum tax.
///
/// AMTI approximates taxable income plus the disallowed SALT deduction
/// (30% of itemized deductions, capped at $10,000). The status-indexed
/// exemption phases out at 25 cents per dollar of AMTI over the threshold,
/// and the remaining base is taxed at 26% up to the breakpoint and 28%
/// beyond it. Whole-dollar rounding; never negative.
pub fn calculate_tentative_minimum_tax(
    taxable_income: f64,
    itemized_deductions: f64,
    filing_status: FilingStatus,
    tax_year: u16,
) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let params = params_for(tax_year, filing_status);

    let salt_addback = (itemized_deductions.max(0.0) * SALT_ADDBACK_SHARE).min(SALT_ADDBACK_CAP);
    let amti = taxable_income + salt_addback;

    let exemption_reduction =
        (amti - params.phaseout_threshold).max(0.0) * EXEMPTION_PHASEOUT_RATE;
    let exemption = (params.exemption - exemption_reduction).max(0.0);

    let amt_base = (amti - exemption).max(0.0);

    let tax = if amt_base <= params.rate_breakpoint {
        amt_base * LOW_RATE
    } else {
        params.rate_breakpoint * LOW_RATE + (amt_base - params.rate_breakpoint) * HIGH_RATE
    };

    round_to_dollars(tax)
}
