//! Store port for work log intervals.
//!
//! The store is the single source of truth for "is there an open log".
//! Implementations must enforce the one-open-log-per-assignment constraint
//! atomically and assign every start and end timestamp from their own clock
//! at the moment of the call, so caller clock skew can never produce a
//! negative interval.

use crate::tracking::domain::{AssignmentId, WorkLog, WorkLogId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work log store operations.
pub type WorkLogStoreResult<T> = Result<T, WorkLogStoreError>;

/// Work log persistence contract.
#[async_trait]
pub trait WorkLogStore: Send + Sync {
    /// Opens a new interval for the assignment at the store's current time.
    ///
    /// # Errors
    ///
    /// Returns [`WorkLogStoreError::OpenLogExists`] when the assignment
    /// already has an open interval. This is a recoverable race: the caller
    /// should re-query via [`WorkLogStore::find_open`] and adopt the
    /// existing interval as authoritative rather than retry blindly.
    async fn open(
        &self,
        assignment_id: AssignmentId,
        note: Option<String>,
    ) -> WorkLogStoreResult<WorkLog>;

    /// Closes the interval at the store's current time.
    ///
    /// # Errors
    ///
    /// Returns [`WorkLogStoreError::NotFound`] when no such interval exists
    /// and [`WorkLogStoreError::AlreadyClosed`] when its end timestamp is
    /// already set.
    async fn close(&self, work_log_id: WorkLogId) -> WorkLogStoreResult<WorkLog>;

    /// Returns all intervals for the assignment, ascending by start time.
    ///
    /// Each call is a fresh query, not a resumable stream.
    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> WorkLogStoreResult<Vec<WorkLog>>;

    /// Returns the assignment's open interval, if one exists.
    async fn find_open(&self, assignment_id: AssignmentId)
    -> WorkLogStoreResult<Option<WorkLog>>;
}

/// Errors returned by work log store implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkLogStoreError {
    /// The assignment already has an open interval.
    #[error("assignment {0} already has an open work log")]
    OpenLogExists(AssignmentId),

    /// The interval was not found.
    #[error("work log not found: {0}")]
    NotFound(WorkLogId),

    /// The interval is already closed.
    #[error("work log already closed: {0}")]
    AlreadyClosed(WorkLogId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkLogStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
