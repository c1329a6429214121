//! Report-type resolution for duplicate observations
//!
//! ISD stations file several report types (FM-12 SYNOP, FM-15 METAR, ...)
//! that can describe the same instant, or - worse - occupy disjoint
//! timestamps at different resolutions. This module implements the
//! deterministic rules for picking exactly one surviving row:
//!
//! - Precipitation: filter to the allowed types, then keep the first
//!   occurrence per timestamp. No cross-type priority is needed because
//!   the reporting windows of the two reference stations do not overlap
//!   ambiguously at one timestamp. That is a simplifying assumption
//!   inherited from the station set, not a universal ISD guarantee.
//! - Temperature: when the first preferred type is present anywhere in
//!   the data, every type listed after it is dropped globally (Heathrow
//!   files FM-12 at 0.1 degC resolution and FM-15 at whole degrees on
//!   disjoint timestamps; mixing them puts artificial spikes at every
//!   integer degC). Remaining rows are stably sorted by preference rank
//!   so the per-timestamp dedup keeps the highest-priority row.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// A decoded value paired with its timestamp and originating report type
#[derive(Debug, Clone, PartialEq)]
pub struct TimedRecord<V> {
    pub timestamp: DateTime<Utc>,
    pub report_type: Option<String>,
    pub value: V,
}

/// Keep only rows whose report type is in the allowed list.
///
/// An empty list disables filtering. Rows without a report type are
/// dropped when a filter is active, matching the source-data convention
/// that untyped rows are not reliable hourly observations.
pub fn retain_allowed_types<V>(
    rows: Vec<TimedRecord<V>>,
    allowed: &[String],
) -> Vec<TimedRecord<V>> {
    if allowed.is_empty() {
        return rows;
    }
    let before = rows.len();
    let kept: Vec<_> = rows
        .into_iter()
        .filter(|row| {
            row.report_type
                .as_deref()
                .is_some_and(|rt| allowed.iter().any(|a| a == rt))
        })
        .collect();
    info!(
        "Filtered by report type {:?}: kept {}/{} rows",
        allowed,
        kept.len(),
        before
    );
    kept
}

/// Drop every row whose type lies strictly after the first preference
/// present in the data.
///
/// This is a global pre-filter, not a per-timestamp tie-break: it removes
/// a coarse-resolution series even where it does not collide with the
/// fine-resolution one. With fewer than two preferences there is nothing
/// to resolve.
pub fn drop_superseded_types<V>(
    rows: Vec<TimedRecord<V>>,
    preferences: &[String],
) -> Vec<TimedRecord<V>> {
    if preferences.len() < 2 {
        return rows;
    }
    for (rank, preferred) in preferences[..preferences.len() - 1].iter().enumerate() {
        let present = rows
            .iter()
            .any(|row| row.report_type.as_deref() == Some(preferred.as_str()));
        if !present {
            continue;
        }
        let superseded = &preferences[rank + 1..];
        let before = rows.len();
        let kept: Vec<_> = rows
            .into_iter()
            .filter(|row| {
                !row.report_type
                    .as_deref()
                    .is_some_and(|rt| superseded.iter().any(|s| s == rt))
            })
            .collect();
        info!(
            "'{}' reports present; dropped lower-priority types {:?} ({} -> {} rows)",
            preferred,
            superseded,
            before,
            kept.len()
        );
        return kept;
    }
    rows
}

/// Stable sort by preference rank so the per-timestamp dedup keeps the
/// highest-priority row. Unknown types rank after every listed type;
/// original order is preserved within equal ranks.
pub fn sort_by_preference<V>(rows: &mut [TimedRecord<V>], preferences: &[String]) {
    if preferences.is_empty() {
        return;
    }
    rows.sort_by_key(|row| preference_rank(row.report_type.as_deref(), preferences));
}

/// Rank of a report type in the preference list (lower = higher priority)
pub fn preference_rank(report_type: Option<&str>, preferences: &[String]) -> usize {
    report_type
        .and_then(|rt| preferences.iter().position(|p| p == rt))
        .unwrap_or(preferences.len())
}

/// Keep the first occurrence per timestamp in current row order.
///
/// Idempotent: re-applying to its own output is a no-op.
pub fn dedup_first_by_timestamp<V>(rows: Vec<TimedRecord<V>>) -> Vec<TimedRecord<V>> {
    let before = rows.len();
    let mut seen: HashSet<DateTime<Utc>> = HashSet::with_capacity(before);
    let kept: Vec<_> = rows
        .into_iter()
        .filter(|row| seen.insert(row.timestamp))
        .collect();
    if kept.len() < before {
        debug!("Removed {} duplicate-timestamp rows", before - kept.len());
    }
    kept
}
