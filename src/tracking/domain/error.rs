//! Error types for time-tracking domain validation and parsing.

use super::{AssignmentId, AssignmentStatus, WorkLogId};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while mutating assignment aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The requested status transition is not legal from the current status.
    #[error("assignment {assignment_id}: illegal transition {from} -> {to}")]
    InvalidTransition {
        /// Assignment the transition was attempted on.
        assignment_id: AssignmentId,
        /// Status the assignment currently holds.
        from: AssignmentStatus,
        /// Status the caller asked for.
        to: AssignmentStatus,
    },
}

/// Errors returned while mutating work log intervals.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkLogDomainError {
    /// The work log already carries an end timestamp.
    #[error("work log {0} is already closed")]
    AlreadyClosed(WorkLogId),

    /// The requested end timestamp precedes the start timestamp.
    #[error("work log {work_log_id} cannot end at {ended_at}, before start {started_at}")]
    EndsBeforeStart {
        /// Work log the close was attempted on.
        work_log_id: WorkLogId,
        /// When the interval was opened.
        started_at: DateTime<Utc>,
        /// The rejected end timestamp.
        ended_at: DateTime<Utc>,
    },
}

/// Error returned while parsing assignment statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment status: {0}")]
pub struct ParseAssignmentStatusError(pub String);
