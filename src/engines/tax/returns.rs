//! Structured tax-return records consumed by the calculation engine, plus the
//! storage seam calling code persists them through.
//!
//! The engine functions never touch the store; they receive primitive slices
//! of these records from callers.

use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::FilingStatus;

/// Identity block for the primary taxpayer or spouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxpayerIdentity {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub ssn_last_four: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// A claimed dependent with the credit qualifications intake determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    pub qualifies_for_child_tax_credit: bool,
    #[serde(default)]
    pub qualifies_for_dependent_care: bool,
}

/// W-2 wage document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageIncome {
    pub employer: String,
    pub wages: f64,
    pub federal_withholding: f64,
}

/// 1099-INT interest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestIncome {
    pub payer: String,
    pub amount: f64,
}

/// 1099-DIV dividend document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendIncome {
    pub payer: String,
    pub ordinary: f64,
    pub qualified: f64,
}

/// A capital asset disposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainIncome {
    pub description: String,
    pub proceeds: f64,
    pub cost_basis: f64,
}

/// 1099-MISC / 1099-NEC style other income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscIncome {
    pub payer: String,
    pub amount: f64,
    #[serde(default)]
    pub federal_withholding: f64,
}

/// Schedule C business activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfEmploymentIncome {
    pub business: String,
    pub gross_receipts: f64,
    pub expenses: f64,
}

/// Schedule E rental activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalIncome {
    pub property: String,
    pub rents_received: f64,
    pub expenses: f64,
}

/// All income documents attached to a return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecords {
    #[serde(default)]
    pub wages: Vec<WageIncome>,
    #[serde(default)]
    pub interest: Vec<InterestIncome>,
    #[serde(default)]
    pub dividends: Vec<DividendIncome>,
    #[serde(default)]
    pub capital_gains: Vec<CapitalGainIncome>,
    #[serde(default)]
    pub miscellaneous: Vec<MiscIncome>,
    #[serde(default)]
    pub self_employment: Vec<SelfEmploymentIncome>,
    #[serde(default)]
    pub rental: Vec<RentalIncome>,
}

/// Schedule A line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemizedDeductions {
    #[serde(default)]
    pub medical_expenses: f64,
    #[serde(default)]
    pub state_local_taxes: f64,
    #[serde(default)]
    pub mortgage_interest: f64,
    #[serde(default)]
    pub charitable_contributions: f64,
    #[serde(default)]
    pub other: f64,
}

impl ItemizedDeductions {
    pub fn total(&self) -> f64 {
        self.medical_expenses
            + self.state_local_taxes
            + self.mortgage_interest
            + self.charitable_contributions
            + self.other
    }
}

/// The filer's standard-versus-itemized election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeductionChoice {
    Standard,
    Itemized(ItemizedDeductions),
}

impl Default for DeductionChoice {
    fn default() -> Self {
        DeductionChoice::Standard
    }
}

/// Above-the-line adjustments to income.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    #[serde(default)]
    pub educator_expenses: f64,
    #[serde(default)]
    pub student_loan_interest: f64,
    #[serde(default)]
    pub ira_contributions: f64,
    #[serde(default)]
    pub hsa_contributions: f64,
}

impl Adjustments {
    pub fn total(&self) -> f64 {
        self.educator_expenses
            + self.student_loan_interest
            + self.ira_contributions
            + self.hsa_contributions
    }
}

/// Which education credit the filer elects, when any applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationCreditKind {
    AmericanOpportunity,
    LifetimeLearning,
}

/// Inputs feeding the credit calculations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditInputs {
    #[serde(default)]
    pub child_care_expenses: f64,
    #[serde(default)]
    pub education_expenses: f64,
    #[serde(default)]
    pub education_credit: Option<EducationCreditKind>,
}

/// Payments already made toward the year's liability, beyond withholding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub estimated_payments: f64,
    #[serde(default)]
    pub prior_year_overpayment_applied: f64,
}

/// Editing-progress metadata carried alongside the return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnProgress {
    pub last_section: String,
    pub updated_on: NaiveDate,
    pub ready_for_review: bool,
}

/// A full Form 1040 style return as assembled by intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReturn {
    pub tax_year: u16,
    pub filing_status: FilingStatus,
    pub taxpayer: TaxpayerIdentity,
    #[serde(default)]
    pub spouse: Option<TaxpayerIdentity>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    #[serde(default)]
    pub income: IncomeRecords,
    #[serde(default)]
    pub deductions: DeductionChoice,
    #[serde(default)]
    pub adjustments: Adjustments,
    #[serde(default)]
    pub credit_inputs: CreditInputs,
    #[serde(default)]
    pub payments: Payments,
    pub progress: ReturnProgress,
}

impl TaxReturn {
    pub fn total_wages(&self) -> f64 {
        self.income.wages.iter().map(|doc| doc.wages).sum()
    }

    /// Net Schedule C profit or loss across all businesses.
    pub fn net_self_employment_income(&self) -> f64 {
        self.income
            .self_employment
            .iter()
            .map(|doc| doc.gross_receipts - doc.expenses)
            .sum()
    }

    pub fn federal_withholding(&self) -> f64 {
        let wage_withholding: f64 = self
            .income
            .wages
            .iter()
            .map(|doc| doc.federal_withholding)
            .sum();
        let misc_withholding: f64 = self
            .income
            .miscellaneous
            .iter()
            .map(|doc| doc.federal_withholding)
            .sum();
        wage_withholding + misc_withholding
    }

    pub fn qualifying_children(&self) -> u32 {
        self.dependents
            .iter()
            .filter(|dependent| dependent.qualifies_for_child_tax_credit)
            .count() as u32
    }

    pub fn care_eligible_dependents(&self) -> u32 {
        self.dependents
            .iter()
            .filter(|dependent| dependent.qualifies_for_dependent_care)
            .count() as u32
    }
}

/// Storage abstraction mirroring the persistence layer's
/// get-current / save contract so the service can be exercised in isolation.
pub trait TaxReturnStore: Send + Sync {
    fn current(&self) -> Result<Option<TaxReturn>, StoreError>;
    fn save(&self, tax_return: TaxReturn) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("tax return store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store backing the service and tests.
#[derive(Debug, Default)]
pub struct MemoryTaxReturnStore {
    current: Mutex<Option<TaxReturn>>,
}

impl TaxReturnStore for MemoryTaxReturnStore {
    fn current(&self) -> Result<Option<TaxReturn>, StoreError> {
        let guard = self
            .current
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, tax_return: TaxReturn) -> Result<(), StoreError> {
        let mut guard = self
            .current
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        *guard = Some(tax_return);
        Ok(())
    }
}
