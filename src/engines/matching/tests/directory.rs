use std::io::Cursor;

use crate::engines::matching::directory::{load_offers, OfferDirectoryError};
use crate::engines::matching::domain::StateRestrictionKind;

const HEADER: &str = "id,name,url,max_agi,min_age,max_age,state_restriction,states,\
military_only,federal_forms,state_returns,schedules,prior_year_returns,import_w2,\
live_support,mobile_app,spanish_language,students,military,disabilities,senior_citizens";

fn csv_with(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

#[test]
fn parses_a_fully_populated_row() {
    let csv = csv_with(&[
        "alpha,Alpha Tax,https://alpha.example.com,79000,18,64,include,CA; NY,\
false,1040;1040-SR,true,A;C;SE,true,true,true,false,true,true,false,true,false",
    ]);

    let offers = load_offers(Cursor::new(csv)).expect("directory parses");

    assert_eq!(offers.len(), 1);
    let offer = &offers[0];
    assert_eq!(offer.id, "alpha");
    assert_eq!(offer.max_agi, 79000.0);
    assert_eq!(offer.min_age, Some(18));
    assert_eq!(offer.max_age, Some(64));

    let restriction = offer.state_restrictions.as_ref().expect("restriction kept");
    assert_eq!(restriction.kind, StateRestrictionKind::Include);
    assert!(restriction.states.contains("CA"));
    assert!(restriction.states.contains("NY"));

    assert!(offer.supported_forms.state);
    assert!(offer.supported_forms.schedules.contains("SE"));
    assert_eq!(offer.supported_forms.federal.len(), 2);
    assert!(offer.features.prior_year_returns);
    assert!(offer.special_eligibility.students);
}

#[test]
fn empty_cells_fall_back_to_defaults() {
    let csv = csv_with(&[
        "bare,Bare Tax,https://bare.example.com,65000,,,,,\
false,,false,,false,false,false,false,false,false,false,false,false",
    ]);

    let offers = load_offers(Cursor::new(csv)).expect("sparse row parses");

    let offer = &offers[0];
    assert_eq!(offer.min_age, None);
    assert_eq!(offer.max_age, None);
    assert!(offer.state_restrictions.is_none());
    assert!(offer.supported_forms.schedules.is_empty());
    assert!(offer.supported_forms.federal.is_empty());
}

#[test]
fn exclude_restriction_kind_is_recognized() {
    let csv = csv_with(&[
        "excl,Excl Tax,https://excl.example.com,65000,,,exclude,ny; nj,\
false,,false,,false,false,false,false,false,false,false,false,false",
    ]);

    let offers = load_offers(Cursor::new(csv)).expect("exclude row parses");

    let restriction = offers[0]
        .state_restrictions
        .as_ref()
        .expect("restriction kept");
    assert_eq!(restriction.kind, StateRestrictionKind::Exclude);
    // State codes normalize to uppercase.
    assert!(restriction.states.contains("NY"));
    assert!(restriction.states.contains("NJ"));
}

#[test]
fn unknown_restriction_kind_is_an_error() {
    let csv = csv_with(&[
        "bad,Bad Tax,https://bad.example.com,65000,,,within,CA,\
false,,false,,false,false,false,false,false,false,false,false,false",
    ]);

    let err = load_offers(Cursor::new(csv)).expect_err("unknown kind rejected");

    match err {
        OfferDirectoryError::UnknownRestrictionKind { id, kind } => {
            assert_eq!(id, "bad");
            assert_eq!(kind, "within");
        }
        other => panic!("expected unknown restriction kind error, got {other:?}"),
    }
}

#[test]
fn schedule_lists_are_uppercased_and_trimmed() {
    let csv = csv_with(&[
        "sched,Sched Tax,https://sched.example.com,65000,,,,,\
false,, false, a; c ; se ,false,false,false,false,false,false,false,false,false",
    ]);

    let offers = load_offers(Cursor::new(csv)).expect("schedule row parses");

    let schedules = &offers[0].supported_forms.schedules;
    assert!(schedules.contains("A"));
    assert!(schedules.contains("C"));
    assert!(schedules.contains("SE"));
    assert_eq!(schedules.len(), 3);
}
