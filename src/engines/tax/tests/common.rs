use chrono::NaiveDate;

use crate::engines::tax::domain::FilingStatus;
use crate::engines::tax::returns::{
    Dependent, ReturnProgress, TaxReturn, TaxpayerIdentity, WageIncome,
};

pub(super) fn identity(first: &str) -> TaxpayerIdentity {
    TaxpayerIdentity {
        first_name: first.to_string(),
        last_name: "Example".to_string(),
        ssn_last_four: Some("1234".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1988, 4, 12),
    }
}

pub(super) fn child(first: &str) -> Dependent {
    Dependent {
        first_name: first.to_string(),
        last_name: "Example".to_string(),
        relationship: "daughter".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2018, 6, 1),
        qualifies_for_child_tax_credit: true,
        qualifies_for_dependent_care: true,
    }
}

pub(super) fn wage(employer: &str, wages: f64, withholding: f64) -> WageIncome {
    WageIncome {
        employer: employer.to_string(),
        wages,
        federal_withholding: withholding,
    }
}

/// Single filer, 2024, no income attached yet.
pub(super) fn empty_return() -> TaxReturn {
    TaxReturn {
        tax_year: 2024,
        filing_status: FilingStatus::Single,
        taxpayer: identity("Avery"),
        spouse: None,
        dependents: Vec::new(),
        income: Default::default(),
        deductions: Default::default(),
        adjustments: Default::default(),
        credit_inputs: Default::default(),
        payments: Default::default(),
        progress: ReturnProgress {
            last_section: "income".to_string(),
            updated_on: NaiveDate::from_ymd_opt(2025, 2, 10).expect("valid date"),
            ready_for_review: false,
        },
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.02,
        "expected {expected}, got {actual}"
    );
}
