//! Display aggregate combining an assignment with its appointment metadata.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::tracking::domain::{AppointmentDetails, Assignment, DurationSummary};

/// One row of a schedule view: an assignment already enriched with the
/// booking metadata and elapsed-time summary the caller resolved for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The assignment being displayed.
    pub assignment: Assignment,

    /// Booking metadata resolved from the external appointment system.
    pub appointment: AppointmentDetails,

    /// Elapsed-time summary at resolution time.
    pub duration: DurationSummary,
}

impl ScheduleEntry {
    /// Creates a schedule entry from resolved parts.
    #[must_use]
    pub const fn new(
        assignment: Assignment,
        appointment: AppointmentDetails,
        duration: DurationSummary,
    ) -> Self {
        Self {
            assignment,
            appointment,
            duration,
        }
    }

    /// Returns the date the underlying appointment is scheduled on.
    #[must_use]
    pub const fn scheduled_date(&self) -> NaiveDate {
        self.appointment.scheduled_date
    }

    /// Returns the time of day the underlying appointment is scheduled at.
    #[must_use]
    pub const fn scheduled_time(&self) -> NaiveTime {
        self.appointment.scheduled_time
    }
}
