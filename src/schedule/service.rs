//! Service resolving the aggregates a schedule view is projected from.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;

use crate::tracking::{
    domain::{EmployeeId, summarize},
    ports::{
        AppointmentResolver, AppointmentResolverError, AssignmentRepository,
        AssignmentRepositoryError, WorkLogStore, WorkLogStoreError,
    },
};

use super::{ScheduleEntry, WeekSchedule};

/// Service-level errors for schedule resolution.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Assignment directory operation failed.
    #[error(transparent)]
    Assignments(#[from] AssignmentRepositoryError),

    /// Work log store operation failed.
    #[error(transparent)]
    WorkLogs(#[from] WorkLogStoreError),

    /// Appointment lookup failed.
    #[error(transparent)]
    Appointments(#[from] AppointmentResolverError),
}

/// Result type for schedule service operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Resolves an employee's assignments into display-ready schedule entries.
///
/// This is the caller side of the projection: it fetches and decorates, then
/// hands the finished aggregates to [`WeekSchedule::project`], which stays a
/// pure function of its inputs.
#[derive(Clone)]
pub struct ScheduleService<R, S, P, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    P: AppointmentResolver,
    C: Clock + Send + Sync,
{
    assignments: Arc<R>,
    work_logs: Arc<S>,
    appointments: Arc<P>,
    clock: Arc<C>,
}

impl<R, S, P, C> ScheduleService<R, S, P, C>
where
    R: AssignmentRepository,
    S: WorkLogStore,
    P: AppointmentResolver,
    C: Clock + Send + Sync,
{
    /// Creates a new schedule service.
    #[must_use]
    pub const fn new(
        assignments: Arc<R>,
        work_logs: Arc<S>,
        appointments: Arc<P>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            assignments,
            work_logs,
            appointments,
            clock,
        }
    }

    /// Projects the employee's week containing `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when any of the collaborator lookups fail.
    pub async fn week_for_employee(
        &self,
        employee_id: EmployeeId,
        reference_date: NaiveDate,
    ) -> ScheduleResult<WeekSchedule> {
        let entries = self.entries_for_employee(employee_id).await?;
        Ok(WeekSchedule::project(entries, reference_date))
    }

    /// Resolves every assignment of the employee into a schedule entry.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when any of the collaborator lookups fail.
    pub async fn entries_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> ScheduleResult<Vec<ScheduleEntry>> {
        let assignments = self.assignments.list_for_employee(employee_id).await?;
        let mut entries = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let appointment = self
                .appointments
                .details(assignment.appointment_id())
                .await?;
            let logs = self
                .work_logs
                .list_for_assignment(assignment.id())
                .await?;
            let duration = summarize(&logs, self.clock.utc());
            entries.push(ScheduleEntry::new(assignment, appointment, duration));
        }
        Ok(entries)
    }
}
