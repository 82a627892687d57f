//! Weekly schedule projection for Overhaul.
//!
//! Groups already-resolved assignment aggregates by day of week for
//! presentation. The projection itself is pure and stateless; the service in
//! this module does the fetching and decoration the projector deliberately
//! does not.

mod entry;
mod service;
mod week;

pub use entry::ScheduleEntry;
pub use service::{ScheduleError, ScheduleResult, ScheduleService};
pub use week::{DaySchedule, WeekSchedule};

#[cfg(test)]
mod tests;
