use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Fixed textual format of the start timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One validated focus session.
///
/// The calendar fields (`date`, `week_start`, `day_of_week`) are derived in
/// `new` and cannot drift from `start` afterwards: the struct has no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    task_name: String,
    start: NaiveDateTime,
    duration_minutes: f64,
    date: NaiveDate,
    week_start: NaiveDate,
    day_of_week: u8,
}

impl SessionRecord {
    /// Build a record, deriving the Monday-anchored week.
    ///
    /// Returns `None` when the label is blank, the duration is not a
    /// positive finite number, or the week start falls outside chrono's range.
    pub fn new(task_name: &str, start: NaiveDateTime, duration_minutes: f64) -> Option<Self> {
        if task_name.trim().is_empty() || !duration_minutes.is_finite() || duration_minutes <= 0.0
        {
            return None;
        }

        let date = start.date();
        let day_of_week = date.weekday().num_days_from_monday();
        let week_start = date.checked_sub_days(Days::new(u64::from(day_of_week)))?;

        Some(Self {
            task_name: task_name.to_string(),
            start,
            duration_minutes,
            date,
            week_start,
            day_of_week: day_of_week as u8,
        })
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// 0 = Monday … 6 = Sunday
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Start position on the vertical axis (seconds are not significant).
    pub fn start_hour_of_day(&self) -> f64 {
        f64::from(self.start.hour()) + f64::from(self.start.minute()) / 60.0
    }

    pub fn end_hour_of_day(&self) -> f64 {
        self.start_hour_of_day() + self.duration_hours()
    }
}
