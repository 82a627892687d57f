//! Service layer coupling assignment transitions to work log lifecycle.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::debug;

use crate::tracking::{
    domain::{Assignment, AssignmentDomainError, AssignmentId, AssignmentStatus, WorkLog},
    ports::{
        AssignmentRepository, AssignmentRepositoryError, WorkLogStore, WorkLogStoreError,
    },
};

/// Service-level errors for time-tracking operations.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Transition validation failed.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),

    /// Assignment directory operation failed.
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),

    /// Work log store operation failed.
    #[error(transparent)]
    WorkLogs(#[from] WorkLogStoreError),

    /// The assignment is unknown to the directory.
    #[error("unknown assignment: {0}")]
    UnknownAssignment(AssignmentId),

    /// The store's interval state changed between two calls of one
    /// operation; the caller must re-query before acting again.
    #[error("work log state for assignment {0} changed mid-operation, re-query required")]
    OutOfSync(AssignmentId),
}

/// Result type for time-tracking service operations.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Result of one completed tracking transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingOutcome {
    /// The assignment after the transition.
    pub assignment: Assignment,

    /// The work log the transition opened or closed, if any.
    pub work_log: Option<WorkLog>,

    /// `true` when the store's view disagreed with the caller's and the
    /// operation adopted the store's state instead of overwriting it.
    pub refreshed: bool,
}

/// Orchestrates the assignment lifecycle against the external stores.
///
/// Every operation re-reads the assignment from the directory, performs the
/// remote work log mutation first, and persists the status change only after
/// the store call succeeds. The store stays authoritative for "is there an
/// open log": on a conflict the service adopts the store's interval rather
/// than retrying a blind write.
#[derive(Clone)]
pub struct TimeTrackingService<R, S, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    C: Clock + Send + Sync,
{
    assignments: Arc<R>,
    work_logs: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> TimeTrackingService<R, S, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    C: Clock + Send + Sync,
{
    /// Creates a new time-tracking service.
    #[must_use]
    pub const fn new(assignments: Arc<R>, work_logs: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            assignments,
            work_logs,
            clock,
        }
    }

    /// Starts work on a freshly dispatched assignment.
    ///
    /// Opens a work log and moves `Assigned` to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless the
    /// assignment is currently `Assigned`, or a store/directory error.
    pub async fn start(
        &self,
        assignment_id: AssignmentId,
        note: Option<String>,
    ) -> TrackingResult<TrackingOutcome> {
        let assignment = self.load(assignment_id).await?;
        require_status(
            &assignment,
            AssignmentStatus::Assigned,
            AssignmentStatus::InProgress,
        )?;
        let (log, refreshed) = self.open_log(assignment_id, note).await?;
        self.advance(assignment, AssignmentStatus::InProgress, Some(log), refreshed)
            .await
    }

    /// Interrupts running work.
    ///
    /// Closes the open work log and moves `InProgress` to `Paused`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless the
    /// assignment is currently `InProgress`, or a store/directory error.
    pub async fn pause(&self, assignment_id: AssignmentId) -> TrackingResult<TrackingOutcome> {
        let assignment = self.load(assignment_id).await?;
        require_status(
            &assignment,
            AssignmentStatus::InProgress,
            AssignmentStatus::Paused,
        )?;
        let (log, closed_now) = self.close_open_log(assignment_id).await?;
        self.advance(assignment, AssignmentStatus::Paused, log, !closed_now)
            .await
    }

    /// Resumes interrupted work.
    ///
    /// Opens a fresh work log and moves `Paused` back to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless the
    /// assignment is currently `Paused`, or a store/directory error.
    pub async fn resume(
        &self,
        assignment_id: AssignmentId,
        note: Option<String>,
    ) -> TrackingResult<TrackingOutcome> {
        let assignment = self.load(assignment_id).await?;
        require_status(
            &assignment,
            AssignmentStatus::Paused,
            AssignmentStatus::InProgress,
        )?;
        let (log, refreshed) = self.open_log(assignment_id, note).await?;
        self.advance(assignment, AssignmentStatus::InProgress, Some(log), refreshed)
            .await
    }

    /// Completes running work.
    ///
    /// Closes the open work log and moves `InProgress` to `Completed`.
    /// A paused assignment cannot be finished directly; it must be resumed
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] unless the
    /// assignment is currently `InProgress`, or a store/directory error.
    pub async fn finish(&self, assignment_id: AssignmentId) -> TrackingResult<TrackingOutcome> {
        let assignment = self.load(assignment_id).await?;
        require_status(
            &assignment,
            AssignmentStatus::InProgress,
            AssignmentStatus::Completed,
        )?;
        let (log, closed_now) = self.close_open_log(assignment_id).await?;
        self.advance(assignment, AssignmentStatus::Completed, log, !closed_now)
            .await
    }

    /// Abandons an assignment from any non-terminal status.
    ///
    /// Closes the open work log if one exists and moves the assignment to
    /// `Cancelled`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] when the
    /// assignment is already terminal, or a store/directory error.
    pub async fn cancel(&self, assignment_id: AssignmentId) -> TrackingResult<TrackingOutcome> {
        let assignment = self.load(assignment_id).await?;
        if assignment.status().is_terminal() {
            return Err(AssignmentDomainError::InvalidTransition {
                assignment_id,
                from: assignment.status(),
                to: AssignmentStatus::Cancelled,
            }
            .into());
        }
        let (log, closed_now) = self.close_open_log(assignment_id).await?;
        // Only a running assignment implies an open log, so only there does
        // a missing close count as a divergent view.
        let refreshed = assignment.status() == AssignmentStatus::InProgress && !closed_now;
        self.advance(assignment, AssignmentStatus::Cancelled, log, refreshed)
            .await
    }

    async fn load(&self, assignment_id: AssignmentId) -> TrackingResult<Assignment> {
        (self.assignments.find_by_id(assignment_id).await?)
            .ok_or(TrackingError::UnknownAssignment(assignment_id))
    }

    /// Opens a work log, adopting an existing open log on conflict.
    async fn open_log(
        &self,
        assignment_id: AssignmentId,
        note: Option<String>,
    ) -> TrackingResult<(WorkLog, bool)> {
        match self.work_logs.open(assignment_id, note).await {
            Ok(log) => Ok((log, false)),
            Err(WorkLogStoreError::OpenLogExists(_)) => {
                debug!(
                    assignment_id = %assignment_id,
                    "open work log already present, adopting the store's interval"
                );
                (self.work_logs.find_open(assignment_id).await?)
                    .map(|log| (log, true))
                    .ok_or(TrackingError::OutOfSync(assignment_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Closes the assignment's open work log if one exists.
    ///
    /// When nothing is open (or another caller won the close race) this is
    /// an idempotent no-op that yields the most recently closed log. The
    /// flag reports whether this call performed the close itself.
    async fn close_open_log(
        &self,
        assignment_id: AssignmentId,
    ) -> TrackingResult<(Option<WorkLog>, bool)> {
        if let Some(open) = self.work_logs.find_open(assignment_id).await? {
            match self.work_logs.close(open.id).await {
                Ok(closed) => return Ok((Some(closed), true)),
                Err(WorkLogStoreError::AlreadyClosed(_) | WorkLogStoreError::NotFound(_)) => {
                    debug!(
                        assignment_id = %assignment_id,
                        work_log_id = %open.id,
                        "work log was closed concurrently, treating close as no-op"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
        let logs = self.work_logs.list_for_assignment(assignment_id).await?;
        let last_closed = logs.into_iter().rev().find(|log| !log.is_open());
        Ok((last_closed, false))
    }

    /// Applies the validated status change and persists it.
    async fn advance(
        &self,
        mut assignment: Assignment,
        to: AssignmentStatus,
        work_log: Option<WorkLog>,
        refreshed: bool,
    ) -> TrackingResult<TrackingOutcome> {
        assignment.transition_to(to, &*self.clock)?;
        self.assignments.update(&assignment).await?;
        Ok(TrackingOutcome {
            assignment,
            work_log,
            refreshed,
        })
    }
}

/// Rejects an operation whose source status does not match.
///
/// Operations are stricter than the raw transition table: `start` and
/// `resume` both target `InProgress` but are only legal from `Assigned` and
/// `Paused` respectively.
fn require_status(
    assignment: &Assignment,
    expected: AssignmentStatus,
    to: AssignmentStatus,
) -> Result<(), AssignmentDomainError> {
    if assignment.status() == expected {
        return Ok(());
    }
    Err(AssignmentDomainError::InvalidTransition {
        assignment_id: assignment.id(),
        from: assignment.status(),
        to,
    })
}
