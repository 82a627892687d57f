//! Port contracts for assignment time tracking.
//!
//! Ports define infrastructure-agnostic interfaces for the external
//! collaborators the tracking services depend on: the assignment directory,
//! the work log store, and the appointment booking system.

pub mod appointment;
pub mod assignment;
pub mod work_log;

pub use appointment::{AppointmentResolver, AppointmentResolverError, AppointmentResolverResult};
pub use assignment::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult};
pub use work_log::{WorkLogStore, WorkLogStoreError, WorkLogStoreResult};
