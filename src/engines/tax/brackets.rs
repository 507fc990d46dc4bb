//! Federal bracket ladders and standard deductions for tax years 2022-2025.
//!
//! Every ladder is a sorted, gap-free sequence of seven brackets covering
//! `[0, infinity)`; the top bracket carries no upper bound. The figures here
//! are part of the behavioral contract and must match the published tables
//! exactly. 2025 values are projections.

use serde::Serialize;

use super::domain::{round_to_cents, resolve_tax_year, FilingStatus};

/// One rung of a bracket ladder. `max` is `None` for the top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub rate: f64,
    pub min: f64,
    pub max: Option<f64>,
}

const fn bracket(rate: f64, min: f64, max: f64) -> TaxBracket {
    TaxBracket {
        rate,
        min,
        max: Some(max),
    }
}

const fn top_bracket(rate: f64, min: f64) -> TaxBracket {
    TaxBracket {
        rate,
        min,
        max: None,
    }
}

const fn ladder(bounds: [f64; 6]) -> [TaxBracket; 7] {
    [
        bracket(0.10, 0.0, bounds[0]),
        bracket(0.12, bounds[0], bounds[1]),
        bracket(0.22, bounds[1], bounds[2]),
        bracket(0.24, bounds[2], bounds[3]),
        bracket(0.32, bounds[3], bounds[4]),
        bracket(0.35, bounds[4], bounds[5]),
        top_bracket(0.37, bounds[5]),
    ]
}

const SINGLE_2022: [TaxBracket; 7] =
    ladder([10275.0, 41775.0, 89075.0, 170050.0, 215950.0, 539900.0]);
const MARRIED_JOINT_2022: [TaxBracket; 7] =
    ladder([20550.0, 83550.0, 178150.0, 340100.0, 431900.0, 647850.0]);
const MARRIED_SEPARATE_2022: [TaxBracket; 7] =
    ladder([10275.0, 41775.0, 89075.0, 170050.0, 215950.0, 323925.0]);
const HEAD_OF_HOUSEHOLD_2022: [TaxBracket; 7] =
    ladder([14650.0, 55900.0, 89050.0, 170050.0, 215950.0, 539900.0]);

const SINGLE_2023: [TaxBracket; 7] =
    ladder([11000.0, 44725.0, 95375.0, 182100.0, 231250.0, 578125.0]);
const MARRIED_JOINT_2023: [TaxBracket; 7] =
    ladder([22000.0, 89450.0, 190750.0, 364200.0, 462500.0, 693750.0]);
const MARRIED_SEPARATE_2023: [TaxBracket; 7] =
    ladder([11000.0, 44725.0, 95375.0, 182100.0, 231250.0, 346875.0]);
const HEAD_OF_HOUSEHOLD_2023: [TaxBracket; 7] =
    ladder([15700.0, 59850.0, 95350.0, 182100.0, 231250.0, 578100.0]);

const SINGLE_2024: [TaxBracket; 7] =
    ladder([11600.0, 47150.0, 100525.0, 191950.0, 243725.0, 609350.0]);
const MARRIED_JOINT_2024: [TaxBracket; 7] =
    ladder([23200.0, 94300.0, 201050.0, 383900.0, 487450.0, 731200.0]);
const MARRIED_SEPARATE_2024: [TaxBracket; 7] =
    ladder([11600.0, 47150.0, 100525.0, 191950.0, 243725.0, 365600.0]);
const HEAD_OF_HOUSEHOLD_2024: [TaxBracket; 7] =
    ladder([16550.0, 63100.0, 100500.0, 191950.0, 243725.0, 609350.0]);

const SINGLE_2025: [TaxBracket; 7] =
    ladder([11925.0, 48475.0, 103350.0, 197300.0, 250525.0, 626350.0]);
const MARRIED_JOINT_2025: [TaxBracket; 7] =
    ladder([23850.0, 96950.0, 206700.0, 394600.0, 501050.0, 751600.0]);
const MARRIED_SEPARATE_2025: [TaxBracket; 7] =
    ladder([11925.0, 48475.0, 103350.0, 197300.0, 250525.0, 375800.0]);
const HEAD_OF_HOUSEHOLD_2025: [TaxBracket; 7] =
    ladder([17000.0, 64850.0, 103350.0, 197300.0, 250525.0, 626350.0]);

/// Bracket ladder for a tax year and filing status.
///
/// Qualifying widow(er)s use the married-filing-jointly ladder. Unknown years
/// resolve through [`resolve_tax_year`].
pub fn brackets_for(tax_year: u16, filing_status: FilingStatus) -> &'static [TaxBracket; 7] {
    use FilingStatus::*;

    match (resolve_tax_year(tax_year), filing_status) {
        (2022, Single) => &SINGLE_2022,
        (2022, MarriedJoint | QualifyingWidow) => &MARRIED_JOINT_2022,
        (2022, MarriedSeparate) => &MARRIED_SEPARATE_2022,
        (2022, HeadOfHousehold) => &HEAD_OF_HOUSEHOLD_2022,
        (2023, Single) => &SINGLE_2023,
        (2023, MarriedJoint | QualifyingWidow) => &MARRIED_JOINT_2023,
        (2023, MarriedSeparate) => &MARRIED_SEPARATE_2023,
        (2023, HeadOfHousehold) => &HEAD_OF_HOUSEHOLD_2023,
        (2025, Single) => &SINGLE_2025,
        (2025, MarriedJoint | QualifyingWidow) => &MARRIED_JOINT_2025,
        (2025, MarriedSeparate) => &MARRIED_SEPARATE_2025,
        (2025, HeadOfHousehold) => &HEAD_OF_HOUSEHOLD_2025,
        (_, Single) => &SINGLE_2024,
        (_, MarriedJoint | QualifyingWidow) => &MARRIED_JOINT_2024,
        (_, MarriedSeparate) => &MARRIED_SEPARATE_2024,
        (_, HeadOfHousehold) => &HEAD_OF_HOUSEHOLD_2024,
    }
}

/// Standard deduction for a tax year and filing status.
pub fn standard_deduction(tax_year: u16, filing_status: FilingStatus) -> f64 {
    use FilingStatus::*;

    match (resolve_tax_year(tax_year), filing_status) {
        (2022, Single | MarriedSeparate) => 12950.0,
        (2022, MarriedJoint | QualifyingWidow) => 25900.0,
        (2022, HeadOfHousehold) => 19400.0,
        (2023, Single | MarriedSeparate) => 13850.0,
        (2023, MarriedJoint | QualifyingWidow) => 27700.0,
        (2023, HeadOfHousehold) => 20800.0,
        (2025, Single | MarriedSeparate) => 15000.0,
        (2025, MarriedJoint | QualifyingWidow) => 30000.0,
        (2025, HeadOfHousehold) => 22500.0,
        (_, Single | MarriedSeparate) => 14600.0,
        (_, MarriedJoint | QualifyingWidow) => 29200.0,
        (_, HeadOfHousehold) => 21900.0,
    }
}

/// Piecewise bracket integration of federal income tax on taxable income.
///
/// Walks the ladder in ascending order, taxing the slice of income that falls
/// inside each bracket, and stops once the income ceiling is reached.
/// Non-positive income yields zero. Rounded to cents.
pub fn calculate_income_tax(taxable_income: f64, filing_status: FilingStatus, tax_year: u16) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let mut tax = 0.0;
    for bracket in brackets_for(tax_year, filing_status) {
        if taxable_income <= bracket.min {
            break;
        }

        let ceiling = match bracket.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        tax += (ceiling - bracket.min) * bracket.rate;

        if matches!(bracket.max, Some(max) if taxable_income <= max) {
            break;
        }
    }

    round_to_cents(tax)
}
