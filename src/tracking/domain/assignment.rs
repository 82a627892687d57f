//! Assignment aggregate root.

use super::{AppointmentId, AssignmentDomainError, AssignmentId, AssignmentStatus, EmployeeId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of workshop work dispatched to one employee for one appointment.
///
/// Assignments are created externally when an appointment is dispatched and
/// are never deleted; they only move through the lifecycle until a terminal
/// status is reached. All status mutation goes through
/// [`Assignment::transition_to`], which rejects moves the transition table
/// does not permit and leaves the aggregate untouched on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    id: AssignmentId,
    appointment_id: AppointmentId,
    employee_id: EmployeeId,
    status: AssignmentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted assignment aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignmentData {
    /// Persisted assignment identifier.
    pub id: AssignmentId,
    /// Persisted appointment reference.
    pub appointment_id: AppointmentId,
    /// Persisted employee reference.
    pub employee_id: EmployeeId,
    /// Persisted lifecycle status.
    pub status: AssignmentStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Creates a freshly dispatched assignment in [`AssignmentStatus::Assigned`].
    #[must_use]
    pub fn new(
        appointment_id: AppointmentId,
        employee_id: EmployeeId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AssignmentId::new(),
            appointment_id,
            employee_id,
            status: AssignmentStatus::Assigned,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an assignment from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedAssignmentData) -> Self {
        Self {
            id: data.id,
            appointment_id: data.appointment_id,
            employee_id: data.employee_id,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the appointment this assignment was dispatched for.
    #[must_use]
    pub const fn appointment_id(&self) -> AppointmentId {
        self.appointment_id
    }

    /// Returns the employee the work is assigned to.
    #[must_use]
    pub const fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` if the assignment has reached a terminal status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves the assignment to `to` when the transition table permits it.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidTransition`] when the move is
    /// not legal from the current status; the aggregate is left unchanged.
    pub fn transition_to(
        &mut self,
        to: AssignmentStatus,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        if !self.status.can_transition_to(to) {
            return Err(AssignmentDomainError::InvalidTransition {
                assignment_id: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
