//! Weekly schedule projection.
//!
//! Pure display grouping: entries are bucketed by the weekday of their
//! scheduled date within one reference week. Rotation and empty-day
//! filtering are ordering concerns layered on top of the grouped days; no
//! data is fetched here.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// One day of a projected week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day of week this bucket covers.
    pub weekday: Weekday,

    /// Calendar date of the day within the reference week.
    pub date: NaiveDate,

    /// Entries scheduled on this day, ascending by scheduled time.
    pub entries: Vec<ScheduleEntry>,
}

/// A week of assignments grouped by day for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    week_start: NaiveDate,
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Groups entries into the Monday-first week containing `reference_date`.
    ///
    /// Entries scheduled outside the reference week are omitted. Within each
    /// day, entries are ordered by scheduled time ascending.
    #[must_use]
    pub fn project(entries: Vec<ScheduleEntry>, reference_date: NaiveDate) -> Self {
        let week_start = reference_date
            - Days::new(u64::from(reference_date.weekday().num_days_from_monday()));
        let mut days: Vec<DaySchedule> = (0..7)
            .map(|offset| {
                let date = week_start + Days::new(offset);
                DaySchedule {
                    weekday: date.weekday(),
                    date,
                    entries: Vec::new(),
                }
            })
            .collect();

        for entry in entries {
            let date = entry.scheduled_date();
            if let Some(day) = days.iter_mut().find(|day| day.date == date) {
                day.entries.push(entry);
            }
        }
        for day in &mut days {
            day.entries.sort_by_key(ScheduleEntry::scheduled_time);
        }

        Self { week_start, days }
    }

    /// Returns the Monday the projected week starts on.
    #[must_use]
    pub const fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Returns the days in display order.
    #[must_use]
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Returns the entries scheduled on the given weekday.
    #[must_use]
    pub fn entries_for(&self, weekday: Weekday) -> &[ScheduleEntry] {
        self.days
            .iter()
            .find(|day| day.weekday == weekday)
            .map_or(&[], |day| day.entries.as_slice())
    }

    /// Rotates the display order so it begins at `weekday`.
    ///
    /// The focus day moves to the front; relative order is preserved. An
    /// unknown weekday (impossible for a full week) leaves the order
    /// untouched.
    #[must_use]
    pub fn starting_from(mut self, weekday: Weekday) -> Self {
        if let Some(position) = self.days.iter().position(|day| day.weekday == weekday) {
            self.days.rotate_left(position);
        }
        self
    }

    /// Returns the days that have at least one entry, in display order.
    pub fn non_empty_days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter().filter(|day| !day.entries.is_empty())
    }
}
