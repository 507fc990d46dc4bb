use serde::{Deserialize, Serialize};
use tracing::warn;

/// Federal filing status recognized across every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
    QualifyingWidow,
}

impl FilingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married-joint",
            FilingStatus::MarriedSeparate => "married-separate",
            FilingStatus::HeadOfHousehold => "head-of-household",
            FilingStatus::QualifyingWidow => "qualifying-widow",
        }
    }

    pub fn ordered() -> [FilingStatus; 5] {
        [
            FilingStatus::Single,
            FilingStatus::MarriedJoint,
            FilingStatus::MarriedSeparate,
            FilingStatus::HeadOfHousehold,
            FilingStatus::QualifyingWidow,
        ]
    }
}

/// Earliest tax year with parameter tables.
pub const EARLIEST_TAX_YEAR: u16 = 2022;

/// Latest tax year with parameter tables (projected figures).
pub const LATEST_TAX_YEAR: u16 = 2025;

/// Year whose tables back calculations when the requested year is unknown.
pub const FALLBACK_TAX_YEAR: u16 = 2024;

/// Resolve a requested tax year to a supported table year.
///
/// Unknown years degrade to [`FALLBACK_TAX_YEAR`] instead of erroring; the
/// substitution is logged so operators can spot callers sending years the
/// tables do not cover.
pub fn resolve_tax_year(tax_year: u16) -> u16 {
    if (EARLIEST_TAX_YEAR..=LATEST_TAX_YEAR).contains(&tax_year) {
        tax_year
    } else {
        warn!(
            requested = tax_year,
            fallback = FALLBACK_TAX_YEAR,
            "unsupported tax year, using fallback tables"
        );
        FALLBACK_TAX_YEAR
    }
}

/// Round a currency amount to cents.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round a currency amount to whole dollars.
pub(crate) fn round_to_dollars(amount: f64) -> f64 {
    amount.round()
}
