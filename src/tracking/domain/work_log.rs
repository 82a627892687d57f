//! Work log intervals recording timed work against an assignment.
//!
//! A work log is one contiguous stretch of work: opened when an employee
//! starts or resumes an assignment, closed when they pause, finish, or the
//! assignment is cancelled. An absent end timestamp means work is in
//! progress. Closed logs are immutable; the end timestamp is set exactly
//! once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssignmentId, WorkLogDomainError, WorkLogId};

/// A single timed work interval owned by one assignment.
///
/// # Examples
///
/// ```
/// use overhaul::tracking::domain::{AssignmentId, WorkLog};
/// use mockable::{Clock, DefaultClock};
///
/// let clock = DefaultClock;
/// let log = WorkLog::open(AssignmentId::new(), None, &clock);
/// assert!(log.is_open());
/// assert_eq!(log.seconds(clock.utc()), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLog {
    /// Unique identifier for this interval.
    pub id: WorkLogId,

    /// The assignment this interval belongs to.
    pub assignment_id: AssignmentId,

    /// When the interval was opened.
    pub started_at: DateTime<Utc>,

    /// When the interval was closed (`None` while work is in progress).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    /// Free-form note captured when the interval was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WorkLog {
    /// Opens a new interval at the current clock time.
    #[must_use]
    pub fn open(
        assignment_id: AssignmentId,
        note: Option<String>,
        clock: &impl mockable::Clock,
    ) -> Self {
        Self {
            id: WorkLogId::new(),
            assignment_id,
            started_at: clock.utc(),
            ended_at: None,
            note,
        }
    }

    /// Returns `true` while the interval has no end timestamp.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Closes the interval at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkLogDomainError::AlreadyClosed`] when the end timestamp
    /// is already set, or [`WorkLogDomainError::EndsBeforeStart`] when `at`
    /// precedes the start timestamp. The log is unchanged on error.
    pub fn close(&mut self, at: DateTime<Utc>) -> Result<(), WorkLogDomainError> {
        if self.ended_at.is_some() {
            return Err(WorkLogDomainError::AlreadyClosed(self.id));
        }
        if at < self.started_at {
            return Err(WorkLogDomainError::EndsBeforeStart {
                work_log_id: self.id,
                started_at: self.started_at,
                ended_at: at,
            });
        }
        self.ended_at = Some(at);
        Ok(())
    }

    /// Returns the whole seconds this interval contributes at `now`.
    ///
    /// Closed intervals contribute `end - start`; an open interval
    /// contributes `now - start`. Either term is clamped to a minimum of 0
    /// so corrupt records never produce negative durations.
    #[must_use]
    pub fn seconds(&self, now: DateTime<Utc>) -> i64 {
        let end = self.ended_at.unwrap_or(now);
        end.signed_duration_since(self.started_at)
            .num_seconds()
            .max(0)
    }
}
