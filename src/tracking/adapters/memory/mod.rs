//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit and integration testing without external service dependencies.

mod appointment;
mod assignment;
mod work_log;

pub use appointment::InMemoryAppointmentResolver;
pub use assignment::InMemoryAssignmentRepository;
pub use work_log::InMemoryWorkLogStore;
