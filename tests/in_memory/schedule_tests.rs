//! In-memory integration tests for the weekly schedule view.

use chrono::{Datelike, Duration, Weekday};
use rstest::rstest;

use overhaul::tracking::domain::EmployeeId;

use super::helpers::{Workshop, appointment_details, dispatch, t0, workshop};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_week_shows_decorated_running_work(workshop: Workshop) {
    let employee_id = EmployeeId::new();
    let monday = t0().date_naive();
    let wednesday = monday + Duration::days(2);
    let running = dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 8, "Adeyemi"),
    )
    .await;
    dispatch(
        &workshop,
        employee_id,
        appointment_details(wednesday, 10, "Bauer"),
    )
    .await;

    workshop
        .tracking
        .start(running.id(), None)
        .await
        .expect("start should succeed");
    workshop.clock.advance(900);

    let week = workshop
        .schedule
        .week_for_employee(employee_id, monday)
        .await
        .expect("projection should resolve");

    assert_eq!(week.week_start(), monday);
    let monday_entries = week.entries_for(Weekday::Mon);
    assert_eq!(monday_entries.len(), 1);
    assert!(
        monday_entries
            .iter()
            .all(|entry| entry.duration.is_active && entry.duration.total_seconds == 900)
    );
    assert_eq!(week.entries_for(Weekday::Wed).len(), 1);

    let busy: Vec<Weekday> = week.non_empty_days().map(|day| day.weekday).collect();
    assert_eq!(busy, vec![Weekday::Mon, Weekday::Wed]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn focus_day_rotation_preserves_content(workshop: Workshop) {
    let employee_id = EmployeeId::new();
    let monday = t0().date_naive();
    let friday = monday + Duration::days(4);
    dispatch(
        &workshop,
        employee_id,
        appointment_details(friday, 9, "Castellanos"),
    )
    .await;

    let week = workshop
        .schedule
        .week_for_employee(employee_id, monday)
        .await
        .expect("projection should resolve")
        .starting_from(friday.weekday());

    let first_day = week.days().first().expect("week should have days");
    assert_eq!(first_day.weekday, Weekday::Fri);
    assert_eq!(first_day.entries.len(), 1);
    assert_eq!(week.days().len(), 7);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn entries_within_a_day_are_ordered_by_scheduled_time(workshop: Workshop) {
    let employee_id = EmployeeId::new();
    let monday = t0().date_naive();
    dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 14, "Dimitrov"),
    )
    .await;
    dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 8, "Eze"),
    )
    .await;

    let week = workshop
        .schedule
        .week_for_employee(employee_id, monday)
        .await
        .expect("projection should resolve");

    let customers: Vec<&str> = week
        .entries_for(Weekday::Mon)
        .iter()
        .map(|entry| entry.appointment.customer_name.as_str())
        .collect();
    assert_eq!(customers, vec!["Eze", "Dimitrov"]);
}
