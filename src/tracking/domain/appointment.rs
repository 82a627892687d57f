//! Appointment metadata used to decorate assignments for display.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Display metadata for the appointment an assignment was dispatched for.
///
/// Resolved from the external booking system purely for presentation; the
/// state machine and duration aggregation never depend on its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetails {
    /// Customer the vehicle belongs to.
    pub customer_name: String,

    /// Human-readable vehicle description ("2019 Vauxhall Corsa, blue").
    pub vehicle_description: String,

    /// Booked service ("MOT", "brake pad replacement").
    pub service_name: String,

    /// Date the appointment is scheduled on.
    pub scheduled_date: NaiveDate,

    /// Time of day the appointment is scheduled at.
    pub scheduled_time: NaiveTime,
}
