//! Service layer for duration summaries and daily work-hours rollups.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use crate::tracking::{
    domain::{
        AssignmentId, DurationSummary, EmployeeId, WorkHoursBucket, bucket_by_day, summarize,
    },
    ports::{
        AssignmentRepository, AssignmentRepositoryError, WorkLogStore, WorkLogStoreError,
    },
};

/// Service-level errors for work-hours queries.
#[derive(Debug, Error)]
pub enum WorkHoursError {
    /// Assignment directory operation failed.
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),

    /// Work log store operation failed.
    #[error(transparent)]
    WorkLogs(#[from] WorkLogStoreError),
}

/// Result type for work-hours service operations.
pub type WorkHoursResult<T> = Result<T, WorkHoursError>;

/// Read-side service deriving elapsed time from the work log store.
///
/// Every query re-reads the interval set and folds it at the clock's
/// current time, so repeated calls give a live view of running work without
/// any state held here. A display tick is just another call.
#[derive(Clone)]
pub struct WorkHoursService<R, S, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    C: Clock + Send + Sync,
{
    assignments: Arc<R>,
    work_logs: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> WorkHoursService<R, S, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    C: Clock + Send + Sync,
{
    /// Creates a new work-hours service.
    #[must_use]
    pub const fn new(assignments: Arc<R>, work_logs: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            assignments,
            work_logs,
            clock,
        }
    }

    /// Summarizes the elapsed time of one assignment at the current time.
    ///
    /// # Errors
    ///
    /// Returns [`WorkHoursError::WorkLogs`] when the interval query fails.
    pub async fn duration_for(
        &self,
        assignment_id: AssignmentId,
    ) -> WorkHoursResult<DurationSummary> {
        let logs = self.work_logs.list_for_assignment(assignment_id).await?;
        Ok(summarize(&logs, self.clock.utc()))
    }

    /// Rolls up an employee's work logs into per-day buckets.
    ///
    /// Gathers the intervals of every assignment dispatched to the employee
    /// and partitions them by the calendar date they were opened on.
    ///
    /// # Errors
    ///
    /// Returns [`WorkHoursError`] when the directory or interval queries
    /// fail.
    pub async fn daily_hours_for(
        &self,
        employee_id: EmployeeId,
    ) -> WorkHoursResult<BTreeMap<NaiveDate, WorkHoursBucket>> {
        let assignments = self.assignments.list_for_employee(employee_id).await?;
        let mut logs = Vec::new();
        for assignment in assignments {
            logs.extend(
                self.work_logs
                    .list_for_assignment(assignment.id())
                    .await?,
            );
        }
        Ok(bucket_by_day(employee_id, &logs, self.clock.utc()))
    }
}
