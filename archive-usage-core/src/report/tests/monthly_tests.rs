use crate::facet::FacetName;
use crate::record::RequestEvent;
use crate::report::{FiscalQuarter, FiscalYear, aggregate_monthly, gigabytes};
use crate::test_helpers::{E3SM_PATH, event};
use pretty_assertions::assert_eq;

const TWO_MIB: &str = "2097152";

#[test]
fn counts_every_request_but_only_served_bytes() {
    // Arrange
    let events = vec![
        event("15/Jul/2019", E3SM_PATH, "200", TWO_MIB),
        event("20/Jul/2019", E3SM_PATH, "404", "-"),
    ];

    // Act
    let monthly = aggregate_monthly(&events, None);

    // Assert
    assert_eq!(monthly.len(), 1);
    let july = &monthly[0];
    assert_eq!((july.calendar_year, july.calendar_month), (2019, 7));
    assert_eq!(july.requests, 2);
    assert_eq!(july.bytes, 2_097_152);
    assert!((july.gb - 0.001_953_125).abs() < 1e-12);
}

#[test]
fn failed_request_with_bytes_contributes_nothing() {
    let events = vec![event("01/Aug/2019", E3SM_PATH, "404", "999999")];

    let monthly = aggregate_monthly(&events, None);

    assert_eq!(monthly[0].requests, 1);
    assert_eq!(monthly[0].bytes, 0);
    assert_eq!(monthly[0].gb, 0.0);
}

#[test]
fn partial_content_counts_towards_bytes() {
    let events = vec![
        event("01/Aug/2019", E3SM_PATH, "206", "100"),
        event("02/Aug/2019", E3SM_PATH, "200", "50"),
        event("03/Aug/2019", E3SM_PATH, "304", "25"),
    ];

    let monthly = aggregate_monthly(&events, None);

    assert_eq!(monthly[0].requests, 3);
    assert_eq!(monthly[0].bytes, 150);
}

#[test]
fn months_are_sorted_chronologically() {
    let events = vec![
        event("01/Jan/2020", E3SM_PATH, "200", "1"),
        event("01/Dec/2019", E3SM_PATH, "200", "1"),
        event("01/Jul/2019", E3SM_PATH, "200", "1"),
    ];

    let monthly = aggregate_monthly(&events, None);

    let months: Vec<(i32, u32)> = monthly
        .iter()
        .map(|m| (m.calendar_year, m.calendar_month))
        .collect();
    assert_eq!(months, vec![(2019, 7), (2019, 12), (2020, 1)]);
}

#[test]
fn monthly_buckets_carry_fiscal_coordinates() {
    let events = vec![event("15/Jan/2020", E3SM_PATH, "200", "1")];

    let monthly = aggregate_monthly(&events, None);

    let fiscal = monthly[0].fiscal;
    assert_eq!(fiscal.fiscal_year, FiscalYear(2020));
    assert_eq!(fiscal.fiscal_quarter, FiscalQuarter::Q3);
    assert_eq!(fiscal.fiscal_month, 7);
}

#[test]
fn facet_grouping_keeps_unclassified_events() {
    // Arrange
    let day_path = E3SM_PATH.replace("/mon/", "/day/");
    let bare_path = E3SM_PATH.replace("/mon/", "/unknown/");
    let events = vec![
        event("01/Jul/2019", E3SM_PATH, "200", "1"),
        event("02/Jul/2019", &day_path, "200", "2"),
        event("03/Jul/2019", &day_path, "200", "4"),
        event("04/Jul/2019", &bare_path, "200", "8"),
    ];

    // Act
    let monthly = aggregate_monthly(&events, Some(FacetName::TimeFrequency));

    // Assert
    let groups: Vec<(Option<&str>, u64, u64)> = monthly
        .iter()
        .map(|m| (m.facet_value, m.requests, m.bytes))
        .collect();
    assert_eq!(
        groups,
        vec![(None, 1, 8), (Some("day"), 2, 6), (Some("mon"), 1, 1)]
    );
}

#[test]
fn facet_value_is_ignored_without_facet() {
    let day_path = E3SM_PATH.replace("/mon/", "/day/");
    let events = vec![
        event("01/Jul/2019", E3SM_PATH, "200", "1"),
        event("02/Jul/2019", &day_path, "200", "2"),
    ];

    let monthly = aggregate_monthly(&events, None);

    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].facet_value, None);
    assert_eq!(monthly[0].requests, 2);
}

#[test]
fn empty_input_has_no_buckets() {
    let events: Vec<RequestEvent> = Vec::new();

    assert!(aggregate_monthly(&events, None).is_empty());
}

#[test]
fn gigabytes_use_binary_units() {
    assert_eq!(gigabytes(1024 * 1024 * 1024), 1.0);
    assert_eq!(gigabytes(0), 0.0);
}
