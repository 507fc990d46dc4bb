//! Review-screen breakdown assembling the full calculation chain from a
//! [`TaxReturn`]: total income, AGI, deduction, taxable income, tax before
//! credits, credits, total tax, payments, and the resulting refund or
//! balance due.

use serde::{Deserialize, Serialize};

use super::amt::calculate_tentative_minimum_tax;
use super::brackets::{calculate_income_tax, standard_deduction};
use super::credits::{
    calculate_additional_child_tax_credit, calculate_american_opportunity_credit,
    calculate_child_care_credit, calculate_child_tax_credit, calculate_earned_income_credit,
    calculate_lifetime_learning_credit,
};
use super::domain::{round_to_cents, FilingStatus};
use super::returns::{DeductionChoice, EducationCreditKind, TaxReturn};
use super::self_employment::calculate_self_employment_tax;

/// Individual credit amounts feeding the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    pub child_tax_credit: f64,
    pub child_care_credit: f64,
    pub education_credit: f64,
    pub earned_income_credit: f64,
    pub additional_child_tax_credit: f64,
}

/// The assembled estimate, line by line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub tax_year: u16,
    pub filing_status: FilingStatus,
    pub total_income: f64,
    pub total_adjustments: f64,
    pub adjusted_gross_income: f64,
    pub deduction: f64,
    pub taxable_income: f64,
    pub income_tax: f64,
    pub self_employment_tax: f64,
    pub credits: CreditBreakdown,
    pub total_tax: f64,
    pub total_payments: f64,
    pub refund: f64,
    pub amount_owed: f64,
    /// Informational only. This is the tentative minimum tax for itemizing
    /// filers; an actual AMT liability is `max(regular, tentative) - regular`,
    /// a comparison deliberately left to the consumer of this breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tentative_minimum_tax: Option<f64>,
}

/// Build the review breakdown for a return.
///
/// Negative aggregate positions (net capital losses, net business or rental
/// losses) floor at zero in total income; self-employment tax still sees the
/// true net so losses suppress it.
pub fn build_breakdown(tax_return: &TaxReturn) -> TaxBreakdown {
    let year = tax_return.tax_year;
    let status = tax_return.filing_status;

    let wages = tax_return.total_wages();
    let interest: f64 = tax_return.income.interest.iter().map(|doc| doc.amount).sum();
    let dividends: f64 = tax_return.income.dividends.iter().map(|doc| doc.ordinary).sum();
    let capital_gains: f64 = tax_return
        .income
        .capital_gains
        .iter()
        .map(|lot| lot.proceeds - lot.cost_basis)
        .sum::<f64>()
        .max(0.0);
    let miscellaneous: f64 = tax_return
        .income
        .miscellaneous
        .iter()
        .map(|doc| doc.amount)
        .sum();
    let net_se_income = tax_return.net_self_employment_income();
    let se_profit = net_se_income.max(0.0);
    let rental: f64 = tax_return
        .income
        .rental
        .iter()
        .map(|doc| doc.rents_received - doc.expenses)
        .sum::<f64>()
        .max(0.0);

    let total_income =
        wages + interest + dividends + capital_gains + miscellaneous + se_profit + rental;

    let se = calculate_self_employment_tax(net_se_income, status, year);

    let total_adjustments = tax_return.adjustments.total() + se.deductible_amount;
    let agi = (total_income - total_adjustments).max(0.0);

    let (deduction, itemized_total) = match &tax_return.deductions {
        DeductionChoice::Standard => (standard_deduction(year, status), None),
        DeductionChoice::Itemized(items) => {
            let total = items.total();
            (total, Some(total))
        }
    };

    let taxable_income = (agi - deduction).max(0.0);
    let income_tax = calculate_income_tax(taxable_income, status, year);

    let children = tax_return.qualifying_children();
    let earned_income = wages + se_profit;

    let child_tax_credit = calculate_child_tax_credit(children, agi, status, year);
    let child_care_credit = calculate_child_care_credit(
        tax_return.credit_inputs.child_care_expenses,
        tax_return.care_eligible_dependents(),
        agi,
        year,
    );
    let education_credit = match tax_return.credit_inputs.education_credit {
        Some(EducationCreditKind::AmericanOpportunity) => calculate_american_opportunity_credit(
            tax_return.credit_inputs.education_expenses,
            agi,
            status,
            year,
        ),
        Some(EducationCreditKind::LifetimeLearning) => calculate_lifetime_learning_credit(
            tax_return.credit_inputs.education_expenses,
            agi,
            status,
            year,
        ),
        None => 0.0,
    };

    // Nonrefundable credits apply in order; the child tax credit goes last so
    // its unused remainder can convert into the refundable additional credit.
    let tax_after_other_credits = (income_tax - child_care_credit - education_credit).max(0.0);
    let child_tax_credit_used = child_tax_credit.min(tax_after_other_credits);
    let tax_after_credits = (tax_after_other_credits - child_tax_credit).max(0.0);
    let unused_child_tax_credit = child_tax_credit - child_tax_credit_used;

    let additional_child_tax_credit =
        calculate_additional_child_tax_credit(children, earned_income, unused_child_tax_credit, year);
    let earned_income_credit =
        calculate_earned_income_credit(agi, earned_income, children, status, year);

    let total_tax = round_to_cents(tax_after_credits + se.se_tax);

    let total_payments = round_to_cents(
        tax_return.federal_withholding()
            + tax_return.payments.estimated_payments
            + tax_return.payments.prior_year_overpayment_applied
            + earned_income_credit
            + additional_child_tax_credit,
    );

    let balance = round_to_cents(total_payments - total_tax);

    let tentative_minimum_tax = itemized_total
        .map(|itemized| calculate_tentative_minimum_tax(taxable_income, itemized, status, year));

    TaxBreakdown {
        tax_year: year,
        filing_status: status,
        total_income: round_to_cents(total_income),
        total_adjustments: round_to_cents(total_adjustments),
        adjusted_gross_income: round_to_cents(agi),
        deduction: round_to_cents(deduction),
        taxable_income: round_to_cents(taxable_income),
        income_tax,
        self_employment_tax: se.se_tax,
        credits: CreditBreakdown {
            child_tax_credit,
            child_care_credit,
            education_credit,
            earned_income_credit,
            additional_child_tax_credit,
        },
        total_tax,
        total_payments,
        refund: balance.max(0.0),
        amount_owed: (-balance).max(0.0),
        tentative_minimum_tax,
    }
}
