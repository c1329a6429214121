//! Tests for report-type filtering, priority resolution, and deduplication

use super::{timed, utc};
use crate::app::services::series_builder::report_type::{
    dedup_first_by_timestamp, drop_superseded_types, preference_rank, retain_allowed_types,
    sort_by_preference,
};

fn prefs(types: &[&str]) -> Vec<String> {
    types.iter().map(|s| s.to_string()).collect()
}

// -----------------------------------------------------------------------------
// retain_allowed_types
// -----------------------------------------------------------------------------

#[test]
fn test_retain_filters_to_allowed() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 1), Some("SOD"), 2),
        timed(utc(2023, 1, 1, 2), Some("FM-12"), 3),
    ];
    let kept = retain_allowed_types(rows, &prefs(&["FM-12", "FM-15"]));
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].value, 1);
    assert_eq!(kept[1].value, 3);
}

#[test]
fn test_retain_empty_list_disables_filter() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 1), Some("SOD"), 2),
    ];
    let kept = retain_allowed_types(rows, &[]);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_retain_drops_untyped_rows_when_filtering() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), None, 1),
        timed(utc(2023, 1, 1, 1), Some("FM-15"), 2),
    ];
    let kept = retain_allowed_types(rows, &prefs(&["FM-15"]));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].value, 2);
}

// -----------------------------------------------------------------------------
// drop_superseded_types
// -----------------------------------------------------------------------------

#[test]
fn test_superseded_types_dropped_when_preferred_present() {
    // FM-12 and FM-15 occupy disjoint timestamps; all FM-15 rows go.
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-12"), 1),
        timed(utc(2023, 1, 1, 1), Some("FM-15"), 2),
        timed(utc(2023, 1, 1, 2), Some("FM-15"), 3),
    ];
    let kept = drop_superseded_types(rows, &prefs(&["FM-12", "FM-15"]));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].value, 1);
}

#[test]
fn test_no_drop_when_preferred_absent() {
    // NYC files FM-15 only; nothing is discarded.
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 1), Some("FM-15"), 2),
    ];
    let kept = drop_superseded_types(rows, &prefs(&["FM-12", "FM-15"]));
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_single_preference_is_noop() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 1), Some("SOD"), 2),
    ];
    let kept = drop_superseded_types(rows, &prefs(&["FM-15"]));
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_second_preference_drops_third() {
    // First preference absent, second present: only types after the
    // second are dropped.
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("B"), 1),
        timed(utc(2023, 1, 1, 1), Some("C"), 2),
    ];
    let kept = drop_superseded_types(rows, &prefs(&["A", "B", "C"]));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].value, 1);
}

#[test]
fn test_untyped_rows_survive_supersede_filter() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-12"), 1),
        timed(utc(2023, 1, 1, 1), None, 2),
    ];
    let kept = drop_superseded_types(rows, &prefs(&["FM-12", "FM-15"]));
    assert_eq!(kept.len(), 2);
}

// -----------------------------------------------------------------------------
// sort_by_preference / preference_rank
// -----------------------------------------------------------------------------

#[test]
fn test_preference_rank_order() {
    let preferences = prefs(&["FM-12", "FM-15"]);
    assert_eq!(preference_rank(Some("FM-12"), &preferences), 0);
    assert_eq!(preference_rank(Some("FM-15"), &preferences), 1);
    assert_eq!(preference_rank(Some("SOD"), &preferences), 2);
    assert_eq!(preference_rank(None, &preferences), 2);
}

#[test]
fn test_sort_by_preference_is_stable() {
    let mut rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 1), Some("FM-12"), 2),
        timed(utc(2023, 1, 1, 2), Some("FM-15"), 3),
        timed(utc(2023, 1, 1, 3), Some("FM-12"), 4),
    ];
    sort_by_preference(&mut rows, &prefs(&["FM-12", "FM-15"]));
    let values: Vec<i32> = rows.iter().map(|r| r.value).collect();
    // FM-12 rows first in original relative order, then FM-15 rows.
    assert_eq!(values, vec![2, 4, 1, 3]);
}

#[test]
fn test_sort_without_preferences_is_noop() {
    let mut rows = vec![
        timed(utc(2023, 1, 1, 1), Some("FM-15"), 1),
        timed(utc(2023, 1, 1, 0), Some("FM-12"), 2),
    ];
    sort_by_preference(&mut rows, &[]);
    assert_eq!(rows[0].value, 1);
    assert_eq!(rows[1].value, 2);
}

// -----------------------------------------------------------------------------
// dedup_first_by_timestamp
// -----------------------------------------------------------------------------

#[test]
fn test_dedup_keeps_first_occurrence() {
    let rows = vec![
        timed(utc(2023, 3, 1, 6), Some("FM-15"), 15.0),
        timed(utc(2023, 3, 1, 6), Some("FM-15"), 16.0),
        timed(utc(2023, 3, 1, 7), Some("FM-15"), 17.0),
    ];
    let kept = dedup_first_by_timestamp(rows);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].value, 15.0);
    assert_eq!(kept[1].value, 17.0);
}

#[test]
fn test_dedup_is_idempotent() {
    let rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-12"), 1),
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 2),
        timed(utc(2023, 1, 1, 1), Some("FM-15"), 3),
    ];
    let once = dedup_first_by_timestamp(rows);
    let twice = dedup_first_by_timestamp(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_preference_sort_then_dedup_keeps_priority_row() {
    // Two rows at the same instant: after the stable preference sort the
    // FM-12 row is first and survives the dedup.
    let mut rows = vec![
        timed(utc(2023, 1, 1, 0), Some("FM-15"), 10.0),
        timed(utc(2023, 1, 1, 0), Some("FM-12"), 10.1),
    ];
    sort_by_preference(&mut rows, &prefs(&["FM-12", "FM-15"]));
    let kept = dedup_first_by_timestamp(rows);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].report_type.as_deref(), Some("FM-12"));
    assert_eq!(kept[0].value, 10.1);
}
