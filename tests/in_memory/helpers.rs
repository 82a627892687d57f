//! Shared test helpers for in-memory integration tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use overhaul::schedule::ScheduleService;
use overhaul::tracking::{
    adapters::memory::{
        InMemoryAppointmentResolver, InMemoryAssignmentRepository, InMemoryWorkLogStore,
    },
    domain::{AppointmentDetails, AppointmentId, Assignment, EmployeeId},
    ports::AssignmentRepository,
    services::{TimeTrackingService, WorkHoursService},
};

/// Base timestamp for scenarios: Monday 2025-03-10 08:00:00 UTC.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0)
        .single()
        .expect("valid base timestamp")
}

/// Manually advanced clock shared by every collaborator in a test.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock to an absolute instant.
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().expect("clock lock poisoned") = to;
    }

    /// Advances the clock by whole seconds.
    pub fn advance(&self, seconds: i64) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += Duration::seconds(seconds);
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// The full set of services wired over shared in-memory collaborators.
pub struct Workshop {
    pub clock: Arc<SteppingClock>,
    pub assignments: Arc<InMemoryAssignmentRepository>,
    pub work_logs: Arc<InMemoryWorkLogStore<SteppingClock>>,
    pub appointments: Arc<InMemoryAppointmentResolver>,
    pub tracking: TimeTrackingService<
        InMemoryAssignmentRepository,
        InMemoryWorkLogStore<SteppingClock>,
        SteppingClock,
    >,
    pub work_hours: WorkHoursService<
        InMemoryAssignmentRepository,
        InMemoryWorkLogStore<SteppingClock>,
        SteppingClock,
    >,
    pub schedule: ScheduleService<
        InMemoryAssignmentRepository,
        InMemoryWorkLogStore<SteppingClock>,
        InMemoryAppointmentResolver,
        SteppingClock,
    >,
}

/// Provides a freshly wired workshop for each test.
#[fixture]
pub fn workshop() -> Workshop {
    let clock = Arc::new(SteppingClock::new(t0()));
    let assignments = Arc::new(InMemoryAssignmentRepository::new());
    let work_logs = Arc::new(InMemoryWorkLogStore::new(Arc::clone(&clock)));
    let appointments = Arc::new(InMemoryAppointmentResolver::new());
    let tracking = TimeTrackingService::new(
        Arc::clone(&assignments),
        Arc::clone(&work_logs),
        Arc::clone(&clock),
    );
    let work_hours = WorkHoursService::new(
        Arc::clone(&assignments),
        Arc::clone(&work_logs),
        Arc::clone(&clock),
    );
    let schedule = ScheduleService::new(
        Arc::clone(&assignments),
        Arc::clone(&work_logs),
        Arc::clone(&appointments),
        Arc::clone(&clock),
    );
    Workshop {
        clock,
        assignments,
        work_logs,
        appointments,
        tracking,
        work_hours,
        schedule,
    }
}

/// Builds appointment metadata scheduled at `hour:00` on `scheduled_date`.
pub fn appointment_details(
    scheduled_date: NaiveDate,
    hour: u32,
    customer: &str,
) -> AppointmentDetails {
    AppointmentDetails {
        customer_name: customer.to_owned(),
        vehicle_description: "2017 panel van, white".to_owned(),
        service_name: "clutch replacement".to_owned(),
        scheduled_date,
        scheduled_time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
    }
}

/// Seeds an appointment and dispatches an assignment for it.
pub async fn dispatch(
    workshop: &Workshop,
    employee_id: EmployeeId,
    details: AppointmentDetails,
) -> Assignment {
    let appointment_id = AppointmentId::new();
    workshop
        .appointments
        .insert(appointment_id, details)
        .expect("appointment should seed");
    let assignment = Assignment::new(appointment_id, employee_id, &*workshop.clock);
    workshop
        .assignments
        .store(&assignment)
        .await
        .expect("assignment should store");
    assignment
}
