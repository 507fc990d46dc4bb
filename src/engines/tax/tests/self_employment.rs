use crate::engines::tax::domain::FilingStatus;
use crate::engines::tax::calculate_self_employment_tax;

use super::common::assert_close;

#[test]
fn non_positive_net_income_owes_nothing() {
    let zero = calculate_self_employment_tax(0.0, FilingStatus::Single, 2024);
    assert_eq!(zero.se_tax, 0.0);
    assert_eq!(zero.deductible_amount, 0.0);

    let loss = calculate_self_employment_tax(-5000.0, FilingStatus::Single, 2024);
    assert_eq!(loss.se_tax, 0.0);
    assert_eq!(loss.deductible_amount, 0.0);
}

#[test]
fn typical_schedule_c_profit() {
    // 50,000 * 0.9235 = 46,175 taxed at 12.4% + 2.9%.
    let result = calculate_self_employment_tax(50000.0, FilingStatus::Single, 2024);
    assert_close(result.se_tax, 7064.78);
    assert_close(result.deductible_amount, result.se_tax / 2.0);
}

#[test]
fn social_security_portion_caps_at_the_wage_base() {
    let result = calculate_self_employment_tax(300_000.0, FilingStatus::Single, 2024);
    // 168,600 * 0.124 + 277,050 * 0.029 + 77,050 * 0.009.
    assert_close(result.se_tax, 29_634.3);
}

#[test]
fn medicare_surtax_threshold_depends_on_filing_status() {
    let single = calculate_self_employment_tax(260_000.0, FilingStatus::Single, 2024);
    let joint = calculate_self_employment_tax(260_000.0, FilingStatus::MarriedJoint, 2024);

    // 260,000 * 0.9235 = 240,110 sits above the 200,000 single threshold but
    // below the 250,000 joint threshold.
    assert!(single.se_tax > joint.se_tax);
    assert_close(single.se_tax - joint.se_tax, (240_110.0 - 200_000.0) * 0.009);
}

#[test]
fn wage_base_grows_by_year() {
    let high_income = 300_000.0;
    let tax_2022 = calculate_self_employment_tax(high_income, FilingStatus::Single, 2022).se_tax;
    let tax_2023 = calculate_self_employment_tax(high_income, FilingStatus::Single, 2023).se_tax;
    let tax_2024 = calculate_self_employment_tax(high_income, FilingStatus::Single, 2024).se_tax;
    let tax_2025 = calculate_self_employment_tax(high_income, FilingStatus::Single, 2025).se_tax;

    assert!(tax_2022 < tax_2023);
    assert!(tax_2023 < tax_2024);
    assert!(tax_2024 < tax_2025);
}

#[test]
fn unknown_year_uses_the_fallback_wage_base() {
    let fallback = calculate_self_employment_tax(300_000.0, FilingStatus::Single, 1990);
    let year_2024 = calculate_self_employment_tax(300_000.0, FilingStatus::Single, 2024);
    assert_eq!(fallback, year_2024);
}
