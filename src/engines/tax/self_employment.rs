//! Self-employment tax (Schedule SE) on net self-employment earnings.

use serde::{Deserialize, Serialize};

use super::domain::{round_to_cents, resolve_tax_year, FilingStatus};

/// Portion of net self-employment income subject to SE tax.
const NET_EARNINGS_FACTOR: f64 = 0.9235;
/// Combined Social Security rate (employee + employer shares).
const SOCIAL_SECURITY_RATE: f64 = 0.124;
/// Combined Medicare rate.
const MEDICARE_RATE: f64 = 0.029;
/// Additional Medicare surtax rate above the filing-status threshold.
const ADDITIONAL_MEDICARE_RATE: f64 = 0.009;

const ADDITIONAL_MEDICARE_THRESHOLD_JOINT: f64 = 250000.0;
const ADDITIONAL_MEDICARE_THRESHOLD_OTHER: f64 = 200000.0;

/// Self-employment tax outcome: the tax itself plus the employer-equivalent
/// half that is deductible as an adjustment to income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelfEmploymentTax {
    pub se_tax: f64,
    pub deductible_amount: f64,
}

impl SelfEmploymentTax {
    const ZERO: SelfEmploymentTax = SelfEmploymentTax {
        se_tax: 0.0,
        deductible_amount: 0.0,
    };
}

/// Social Security wage base for a tax year.
fn wage_base(tax_year: u16) -> f64 {
    match resolve_tax_year(tax_year) {
        2022 => 147000.0,
        2023 => 160200.0,
        2025 => 176100.0,
        _ => 168600.0,
    }
}

/// Compute self-employment tax on net self-employment income.
///
/// The Social Security portion caps at the year's wage base; the Medicare
/// portion is uncapped, with the 0.9% surtax applying above 250000 for joint
/// filers and 200000 otherwise. Zero or negative income yields zero for both
/// fields.
pub fn calculate_self_employment_tax(
    net_se_income: f64,
    filing_status: FilingStatus,
    tax_year: u16,
) -> SelfEmploymentTax {
    if net_se_income <= 0.0 {
        return SelfEmploymentTax::ZERO;
    }

    let se_income = net_se_income * NET_EARNINGS_FACTOR;

    let social_security = se_income.min(wage_base(tax_year)) * SOCIAL_SECURITY_RATE;
    let medicare = se_income * MEDICARE_RATE;

    let surtax_threshold = match filing_status {
        FilingStatus::MarriedJoint => ADDITIONAL_MEDICARE_THRESHOLD_JOINT,
        _ => ADDITIONAL_MEDICARE_THRESHOLD_OTHER,
    };
    let additional_medicare = (se_income - surtax_threshold).max(0.0) * ADDITIONAL_MEDICARE_RATE;

    let se_tax = round_to_cents(social_security + medicare + additional_medicare);
    SelfEmploymentTax {
        se_tax,
        deductible_amount: round_to_cents(se_tax * 0.5),
    }
}
