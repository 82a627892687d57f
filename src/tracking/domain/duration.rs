//! Duration aggregation over work log intervals.
//!
//! Everything in this module is a pure fold over a slice of [`WorkLog`]
//! values and an explicit `now`. Nothing here is persisted; summaries are
//! recomputed on demand so the interval set stays the single source of
//! truth. Callers that need a live ticking display re-invoke
//! [`summarize`] with a fresh `now`; the timer is a trigger, not state.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{EmployeeId, WorkLog};

/// Derived elapsed-time view of one assignment's work logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSummary {
    /// Whole seconds across closed logs, plus live time of an open log.
    pub total_seconds: i64,

    /// `true` when an open log exists.
    pub is_active: bool,
}

/// Daily work-hours rollup for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHoursBucket {
    /// Employee the hours belong to.
    pub employee_id: EmployeeId,

    /// Calendar date (UTC) the hours are attributed to.
    pub date: NaiveDate,

    /// Whole seconds worked on this date.
    pub total_seconds: i64,

    /// Number of work logs attributed to this date.
    pub log_count: usize,
}

impl WorkHoursBucket {
    /// Creates an empty bucket for one employee-day.
    #[must_use]
    pub const fn empty(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            total_seconds: 0,
            log_count: 0,
        }
    }
}

/// Folds work logs into a [`DurationSummary`] at `now`.
///
/// Closed logs contribute `end - start`; an open log contributes
/// `now - start`. The slice is re-sorted by start time before folding, so
/// caller-supplied order is never trusted. An empty slice yields zero
/// seconds and no activity.
#[must_use]
pub fn summarize(logs: &[WorkLog], now: DateTime<Utc>) -> DurationSummary {
    let mut ordered: Vec<&WorkLog> = logs.iter().collect();
    ordered.sort_by_key(|log| log.started_at);

    let mut summary = DurationSummary::default();
    for log in ordered {
        summary.total_seconds += contribution(log, now);
        summary.is_active |= log.is_open();
    }
    summary
}

/// Partitions work logs into per-day [`WorkHoursBucket`]s at `now`.
///
/// A log is attributed wholly to the UTC calendar date it was opened on;
/// a log that crosses midnight is not split across days. The bucket totals
/// therefore always sum to the [`summarize`] total for the same slice.
#[must_use]
pub fn bucket_by_day(
    employee_id: EmployeeId,
    logs: &[WorkLog],
    now: DateTime<Utc>,
) -> BTreeMap<NaiveDate, WorkHoursBucket> {
    let mut buckets = BTreeMap::new();
    for log in logs {
        let date = log.started_at.date_naive();
        let bucket = buckets
            .entry(date)
            .or_insert_with(|| WorkHoursBucket::empty(employee_id, date));
        bucket.total_seconds += contribution(log, now);
        bucket.log_count += 1;
    }
    buckets
}

/// Whole seconds one log contributes, clamped to a minimum of 0.
///
/// A closed log whose end precedes its start is a corrupt record; it counts
/// as zero and is flagged, never surfaced as an error, because reporting
/// views must degrade gracefully.
fn contribution(log: &WorkLog, now: DateTime<Utc>) -> i64 {
    if log
        .ended_at
        .is_some_and(|ended_at| ended_at < log.started_at)
    {
        warn!(
            work_log_id = %log.id,
            assignment_id = %log.assignment_id,
            "work log ends before it starts, counting zero seconds"
        );
        return 0;
    }
    log.seconds(now)
}
