use crate::engines::tax::returns::{
    CapitalGainIncome, DeductionChoice, EducationCreditKind, InterestIncome, ItemizedDeductions,
    RentalIncome, SelfEmploymentIncome,
};
use crate::engines::tax::{build_breakdown, calculate_self_employment_tax};

use super::common::{assert_close, child, empty_return, wage};

#[test]
fn wage_only_return_walks_the_full_chain() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Acme", 60000.0, 7000.0));

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.total_income, 60000.0);
    assert_eq!(breakdown.total_adjustments, 0.0);
    assert_eq!(breakdown.adjusted_gross_income, 60000.0);
    assert_eq!(breakdown.deduction, 14600.0);
    assert_eq!(breakdown.taxable_income, 45400.0);
    assert_eq!(breakdown.income_tax, 5216.0);
    assert_eq!(breakdown.self_employment_tax, 0.0);
    assert_eq!(breakdown.total_tax, 5216.0);
    assert_eq!(breakdown.total_payments, 7000.0);
    assert_eq!(breakdown.refund, 1784.0);
    assert_eq!(breakdown.amount_owed, 0.0);
    assert!(breakdown.tentative_minimum_tax.is_none());
}

#[test]
fn self_employment_feeds_both_tax_and_adjustments() {
    let mut tax_return = empty_return();
    tax_return.income.self_employment.push(SelfEmploymentIncome {
        business: "Design studio".to_string(),
        gross_receipts: 40000.0,
        expenses: 10000.0,
    });

    let breakdown = build_breakdown(&tax_return);
    let expected_se =
        calculate_self_employment_tax(30000.0, tax_return.filing_status, tax_return.tax_year);

    assert_eq!(breakdown.total_income, 30000.0);
    assert_close(breakdown.self_employment_tax, expected_se.se_tax);
    assert_close(breakdown.total_adjustments, expected_se.deductible_amount);
    assert_close(
        breakdown.adjusted_gross_income,
        30000.0 - expected_se.deductible_amount,
    );
    assert_close(
        breakdown.total_tax,
        breakdown.income_tax + expected_se.se_tax,
    );
}

#[test]
fn unused_child_tax_credit_becomes_refundable() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Diner", 30000.0, 1000.0));
    tax_return.dependents.push(child("Mia"));
    tax_return.dependents.push(child("Noah"));

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.taxable_income, 15400.0);
    assert_eq!(breakdown.income_tax, 1616.0);
    assert_eq!(breakdown.credits.child_tax_credit, 4000.0);
    // 4,000 of credit against 1,616 of tax leaves 2,384 to refund, under both
    // the per-child and earned-income caps.
    assert_eq!(breakdown.credits.additional_child_tax_credit, 2384.0);
    assert_close(breakdown.credits.earned_income_credit, 5426.83);
    assert_eq!(breakdown.total_tax, 0.0);
    assert_close(breakdown.refund, 1000.0 + 5426.83 + 2384.0);
    assert_eq!(breakdown.amount_owed, 0.0);
}

#[test]
fn education_and_care_credits_apply_before_the_child_tax_credit() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Clinic", 55000.0, 3000.0));
    tax_return.dependents.push(child("Ada"));
    tax_return.credit_inputs.child_care_expenses = 4000.0;
    tax_return.credit_inputs.education_expenses = 5000.0;
    tax_return.credit_inputs.education_credit = Some(EducationCreditKind::LifetimeLearning);

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.credits.child_care_credit, 600.0);
    assert_eq!(breakdown.credits.education_credit, 1000.0);
    assert_eq!(breakdown.credits.child_tax_credit, 2000.0);
    // Income tax absorbs the whole child tax credit here, so nothing spills
    // into the refundable portion.
    assert_eq!(breakdown.credits.additional_child_tax_credit, 0.0);
    assert_close(
        breakdown.total_tax,
        (breakdown.income_tax - 600.0 - 1000.0 - 2000.0).max(0.0),
    );
}

#[test]
fn itemizers_get_a_tentative_minimum_tax_figure() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Firm", 250_000.0, 50000.0));
    tax_return.deductions = DeductionChoice::Itemized(ItemizedDeductions {
        medical_expenses: 0.0,
        state_local_taxes: 15000.0,
        mortgage_interest: 12000.0,
        charitable_contributions: 3000.0,
        other: 0.0,
    });

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.deduction, 30000.0);
    let tentative = breakdown
        .tentative_minimum_tax
        .expect("itemizers carry the figure");
    assert!(tentative > 0.0);
}

#[test]
fn negative_aggregates_floor_at_zero() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Shop", 40000.0, 4000.0));
    tax_return.income.capital_gains.push(CapitalGainIncome {
        description: "Index fund".to_string(),
        proceeds: 5000.0,
        cost_basis: 9000.0,
    });
    tax_return.income.rental.push(RentalIncome {
        property: "Duplex".to_string(),
        rents_received: 10000.0,
        expenses: 14000.0,
    });
    tax_return.income.self_employment.push(SelfEmploymentIncome {
        business: "Side project".to_string(),
        gross_receipts: 1000.0,
        expenses: 6000.0,
    });

    let breakdown = build_breakdown(&tax_return);

    // Losses do not reduce wage income, and a net loss owes no SE tax.
    assert_eq!(breakdown.total_income, 40000.0);
    assert_eq!(breakdown.self_employment_tax, 0.0);
}

#[test]
fn interest_income_counts_toward_total_income() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Acme", 50000.0, 5000.0));
    tax_return.income.interest.push(InterestIncome {
        payer: "Credit union".to_string(),
        amount: 1200.0,
    });

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.total_income, 51200.0);
}

#[test]
fn estimated_payments_and_carryovers_add_to_withholding() {
    let mut tax_return = empty_return();
    tax_return.income.wages.push(wage("Acme", 60000.0, 4000.0));
    tax_return.payments.estimated_payments = 1500.0;
    tax_return.payments.prior_year_overpayment_applied = 250.0;

    let breakdown = build_breakdown(&tax_return);

    assert_eq!(breakdown.total_payments, 5750.0);
    // 5,216 of tax against 5,750 of payments.
    assert_eq!(breakdown.refund, 534.0);
    assert_eq!(breakdown.amount_owed, 0.0);
}
