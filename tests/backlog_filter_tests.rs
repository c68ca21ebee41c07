mod common;

use chrono::NaiveDate;
use common::{sample_tickets, ticket};
use rsurvey::backlog::{Filter, apply_filters};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_empty_filter_keeps_everything_in_order() {
    let tickets = sample_tickets();
    let out = apply_filters(&tickets, &Filter::default());
    assert_eq!(out, tickets);
}

#[test]
fn test_filtered_is_ordered_subset() {
    let tickets = sample_tickets();
    let filter = Filter {
        attendant: Some(2),
        start: Some(day("2024-01-05")),
        end: None,
    };

    let out = apply_filters(&tickets, &filter);
    assert!(!out.is_empty());

    let ids: Vec<i64> = out.iter().map(|t| t.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "server order must be preserved");

    for t in &out {
        assert!(tickets.contains(t));
        assert_eq!(t.id_attendant, 2);
        assert!(t.created_date() >= day("2024-01-05"));
    }
}

#[test]
fn test_attendant_filter_is_exact_id_match() {
    let tickets = vec![
        ticket(1, "2024-01-01T10:00:00Z", 1),
        ticket(2, "2024-01-01T10:00:00Z", 11),
        ticket(3, "2024-01-01T10:00:00Z", 21),
    ];
    let filter = Filter::from_args(Some(1), None, None).unwrap();
    let out = apply_filters(&tickets, &filter);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 1);
}

#[test]
fn test_date_range_is_inclusive_on_both_ends() {
    let tickets = vec![
        ticket(1, "2024-03-09T23:59:59Z", 1),
        ticket(2, "2024-03-10T00:00:00Z", 1),
        ticket(3, "2024-03-12T23:59:59.999Z", 1),
        ticket(4, "2024-03-13T00:00:00Z", 1),
    ];
    let filter = Filter::from_args(None, Some("2024-03-10"), Some("2024-03-12")).unwrap();
    let ids: Vec<i64> = apply_filters(&tickets, &filter).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_start_after_end_yields_empty() {
    let tickets = sample_tickets();
    let filter = Filter::from_args(None, Some("2024-01-20"), Some("2024-01-10")).unwrap();
    assert!(apply_filters(&tickets, &filter).is_empty());
}

#[test]
fn test_filter_is_idempotent_and_source_untouched() {
    let tickets = sample_tickets();
    let before = tickets.clone();
    let filter = Filter::from_args(Some(3), Some("2024-01-03"), Some("2024-01-20")).unwrap();

    let once = apply_filters(&tickets, &filter);
    let twice = apply_filters(&once, &filter);
    assert_eq!(once, twice);
    assert_eq!(tickets, before);
}

#[test]
fn test_offset_timestamps_compare_on_utc_day() {
    // 22:30 at -03:00 is already the next day in UTC
    let tickets = vec![ticket(1, "2024-05-01T22:30:00-03:00", 1)];
    let on_first = Filter::from_args(None, Some("2024-05-01"), Some("2024-05-01")).unwrap();
    let on_second = Filter::from_args(None, Some("2024-05-02"), Some("2024-05-02")).unwrap();
    assert!(apply_filters(&tickets, &on_first).is_empty());
    assert_eq!(apply_filters(&tickets, &on_second).len(), 1);
}

#[test]
fn test_invalid_date_is_rejected() {
    let err = Filter::from_args(None, Some("01/05/2024"), None).unwrap_err();
    assert!(err.to_string().contains("Invalid date format"));
}
