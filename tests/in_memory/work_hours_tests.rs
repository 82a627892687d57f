//! In-memory integration tests for daily work-hours rollups.

use chrono::Duration;
use rstest::rstest;

use overhaul::tracking::domain::EmployeeId;

use super::helpers::{Workshop, appointment_details, dispatch, t0, workshop};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn week_of_work_rolls_up_per_day(workshop: Workshop) {
    let employee_id = EmployeeId::new();
    let monday = t0().date_naive();
    let first = dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 8, "Ueda"),
    )
    .await;
    let second = dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 13, "Varga"),
    )
    .await;

    // Monday: one hour on the first job.
    workshop
        .tracking
        .start(first.id(), None)
        .await
        .expect("start should succeed");
    workshop.clock.advance(3600);
    workshop
        .tracking
        .pause(first.id())
        .await
        .expect("pause should succeed");

    // Tuesday: 45 minutes on the second job, left running.
    workshop.clock.set(t0() + Duration::days(1));
    workshop
        .tracking
        .start(second.id(), None)
        .await
        .expect("start should succeed");
    workshop.clock.advance(2700);

    let buckets = workshop
        .work_hours
        .daily_hours_for(employee_id)
        .await
        .expect("rollup should resolve");

    let tuesday = (t0() + Duration::days(1)).date_naive();
    assert_eq!(buckets.len(), 2);
    assert_eq!(
        buckets
            .get(&monday)
            .map(|bucket| (bucket.total_seconds, bucket.log_count)),
        Some((3600, 1))
    );
    assert_eq!(
        buckets
            .get(&tuesday)
            .map(|bucket| (bucket.total_seconds, bucket.log_count)),
        Some((2700, 1))
    );

    // Bucket totals agree with the per-assignment summaries.
    let first_total = workshop
        .work_hours
        .duration_for(first.id())
        .await
        .expect("summary should resolve")
        .total_seconds;
    let second_total = workshop
        .work_hours
        .duration_for(second.id())
        .await
        .expect("summary should resolve")
        .total_seconds;
    let bucket_total: i64 = buckets.values().map(|bucket| bucket.total_seconds).sum();
    assert_eq!(bucket_total, first_total + second_total);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rollup_only_counts_the_requested_employee(workshop: Workshop) {
    let employee_id = EmployeeId::new();
    let colleague_id = EmployeeId::new();
    let monday = t0().date_naive();
    let own = dispatch(
        &workshop,
        employee_id,
        appointment_details(monday, 9, "Walsh"),
    )
    .await;
    let colleagues = dispatch(
        &workshop,
        colleague_id,
        appointment_details(monday, 9, "Xu"),
    )
    .await;

    for assignment_id in [own.id(), colleagues.id()] {
        workshop
            .tracking
            .start(assignment_id, None)
            .await
            .expect("start should succeed");
    }
    workshop.clock.advance(600);

    let buckets = workshop
        .work_hours
        .daily_hours_for(employee_id)
        .await
        .expect("rollup should resolve");

    assert_eq!(
        buckets
            .get(&monday)
            .map(|bucket| (bucket.total_seconds, bucket.log_count)),
        Some((600, 1))
    );
}
