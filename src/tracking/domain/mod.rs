//! Domain model for assignment time tracking.
//!
//! The tracking domain models the assignment lifecycle, the work log
//! intervals each transition opens and closes, and the pure duration
//! aggregation derived from them, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod appointment;
mod assignment;
mod duration;
mod error;
mod ids;
mod status;
mod work_log;

pub use appointment::AppointmentDetails;
pub use assignment::{Assignment, PersistedAssignmentData};
pub use duration::{DurationSummary, WorkHoursBucket, bucket_by_day, summarize};
pub use error::{AssignmentDomainError, ParseAssignmentStatusError, WorkLogDomainError};
pub use ids::{AppointmentId, AssignmentId, EmployeeId, WorkLogId};
pub use status::AssignmentStatus;
pub use work_log::WorkLog;
