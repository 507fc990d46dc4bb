//! Federal income tax estimation engine.
//!
//! Pure calculation functions parameterized by tax year and filing status,
//! backed by immutable per-year tables for 2022-2025. Every function degrades
//! gracefully: out-of-range numeric input yields zero or clamps, and unknown
//! tax years fall back to the 2024 tables through one logged decision point
//! ([`resolve_tax_year`]).

mod amt;
mod brackets;
mod credits;
pub mod domain;
pub mod returns;
mod self_employment;
mod summary;

#[cfg(test)]
mod tests;

pub use amt::calculate_tentative_minimum_tax;
pub use brackets::{brackets_for, calculate_income_tax, standard_deduction, TaxBracket};
pub use credits::{
    calculate_additional_child_tax_credit, calculate_american_opportunity_credit,
    calculate_child_care_credit, calculate_child_tax_credit, calculate_earned_income_credit,
    calculate_lifetime_learning_credit,
};
pub use domain::{
    resolve_tax_year, FilingStatus, EARLIEST_TAX_YEAR, FALLBACK_TAX_YEAR, LATEST_TAX_YEAR,
};
pub use returns::{
    Adjustments, CapitalGainIncome, CreditInputs, DeductionChoice, Dependent, DividendIncome,
    EducationCreditKind, IncomeRecords, InterestIncome, ItemizedDeductions, MemoryTaxReturnStore,
    MiscIncome, Payments, RentalIncome, ReturnProgress, SelfEmploymentIncome, StoreError,
    TaxReturn, TaxReturnStore, TaxpayerIdentity, WageIncome,
};
pub use self_employment::{calculate_self_employment_tax, SelfEmploymentTax};
pub use summary::{build_breakdown, CreditBreakdown, TaxBreakdown};
