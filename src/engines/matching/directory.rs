//! CSV import for the partner offer directory.
//!
//! The directory export is one row per partner with semicolon-delimited list
//! columns (states, federal forms, schedules). Empty cells map to the type's
//! default, so sparse exports stay loadable.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{
    Offer, OfferFeatures, SpecialEligibility, StateRestriction, StateRestrictionKind,
    SupportedForms,
};

/// Error raised while loading the offer directory.
#[derive(Debug, thiserror::Error)]
pub enum OfferDirectoryError {
    #[error("failed to read offer directory: {0}")]
    Csv(#[from] csv::Error),
    #[error("offer '{id}': unknown state restriction kind '{kind}'")]
    UnknownRestrictionKind { id: String, kind: String },
}

/// Parse offers from a CSV reader.
pub fn load_offers<R: Read>(reader: R) -> Result<Vec<Offer>, OfferDirectoryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut offers = Vec::new();

    for record in csv_reader.deserialize::<OfferRow>() {
        offers.push(record?.into_offer()?);
    }

    Ok(offers)
}

/// Parse offers from a CSV file on disk.
pub fn load_offers_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Offer>, OfferDirectoryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut offers = Vec::new();

    for record in csv_reader.deserialize::<OfferRow>() {
        offers.push(record?.into_offer()?);
    }

    Ok(offers)
}

#[derive(Debug, Deserialize)]
struct OfferRow {
    id: String,
    name: String,
    url: String,
    max_agi: f64,
    #[serde(default)]
    min_age: Option<u8>,
    #[serde(default)]
    max_age: Option<u8>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state_restriction: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    states: Option<String>,
    #[serde(default)]
    military_only: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    federal_forms: Option<String>,
    #[serde(default)]
    state_returns: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    schedules: Option<String>,
    #[serde(default)]
    prior_year_returns: bool,
    #[serde(default)]
    import_w2: bool,
    #[serde(default)]
    live_support: bool,
    #[serde(default)]
    mobile_app: bool,
    #[serde(default)]
    spanish_language: bool,
    #[serde(default)]
    students: bool,
    #[serde(default)]
    military: bool,
    #[serde(default)]
    disabilities: bool,
    #[serde(default)]
    senior_citizens: bool,
}

impl OfferRow {
    fn into_offer(self) -> Result<Offer, OfferDirectoryError> {
        let state_restrictions = match self.state_restriction.as_deref() {
            None => None,
            Some(raw) => {
                let kind = match raw.to_ascii_lowercase().as_str() {
                    "include" => StateRestrictionKind::Include,
                    "exclude" => StateRestrictionKind::Exclude,
                    other => {
                        return Err(OfferDirectoryError::UnknownRestrictionKind {
                            id: self.id,
                            kind: other.to_string(),
                        })
                    }
                };
                Some(StateRestriction {
                    kind,
                    states: split_list(self.states.as_deref(), true),
                })
            }
        };

        Ok(Offer {
            id: self.id,
            name: self.name,
            url: self.url,
            max_agi: self.max_agi,
            min_age: self.min_age,
            max_age: self.max_age,
            state_restrictions,
            military_only: self.military_only,
            supported_forms: SupportedForms {
                federal: split_list(self.federal_forms.as_deref(), false)
                    .into_iter()
                    .collect(),
                state: self.state_returns,
                schedules: split_list(self.schedules.as_deref(), true),
            },
            features: OfferFeatures {
                prior_year_returns: self.prior_year_returns,
                import_w2: self.import_w2,
                live_support: self.live_support,
                mobile_app: self.mobile_app,
                spanish_language: self.spanish_language,
            },
            special_eligibility: SpecialEligibility {
                students: self.students,
                military: self.military,
                disabilities: self.disabilities,
                senior_citizens: self.senior_citizens,
            },
        })
    }
}

fn split_list(raw: Option<&str>, uppercase: bool) -> BTreeSet<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                if uppercase {
                    item.to_ascii_uppercase()
                } else {
                    item.to_string()
                }
            })
            .collect()
    })
    .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
