//! Week/day grouping of validated sessions.

use crate::models::SessionRecord;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Sessions of one Monday-anchored week, keyed by day of week (0 = Monday).
///
/// A day without sessions has no entry; `day()` returns an empty slice for it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    days: BTreeMap<u8, Vec<SessionRecord>>,
}

impl WeekBucket {
    fn new(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            days: BTreeMap::new(),
        }
    }

    /// Last calendar day of the week (Sunday).
    pub fn week_end(&self) -> NaiveDate {
        self.week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Sessions of one day in chronological order.
    pub fn day(&self, day_of_week: u8) -> &[SessionRecord] {
        self.days
            .get(&day_of_week)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Days that have at least one session, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (u8, &[SessionRecord])> {
        self.days.iter().map(|(d, s)| (*d, s.as_slice()))
    }

    pub fn sessions(&self) -> impl Iterator<Item = &SessionRecord> {
        self.days.values().flatten()
    }

    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn total_minutes(&self) -> f64 {
        self.sessions().map(SessionRecord::duration_minutes).sum()
    }
}

/// All weeks, iterated in ascending `week_start` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekGrouping {
    weeks: BTreeMap<NaiveDate, WeekBucket>,
}

impl WeekGrouping {
    pub fn weeks(&self) -> impl Iterator<Item = &WeekBucket> {
        self.weeks.values()
    }

    pub fn week(&self, week_start: NaiveDate) -> Option<&WeekBucket> {
        self.weeks.get(&week_start)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn session_count(&self) -> usize {
        self.weeks.values().map(WeekBucket::session_count).sum()
    }

    pub fn total_minutes(&self) -> f64 {
        self.weeks.values().map(WeekBucket::total_minutes).sum()
    }

    pub fn sessions(&self) -> impl Iterator<Item = &SessionRecord> {
        self.weeks.values().flat_map(WeekBucket::sessions)
    }
}

/// Partition records into weeks and weekdays.
///
/// Day lists are sorted by start time with a stable sort, so sessions that
/// start at the same second keep their input order.
pub fn group_by_week(records: Vec<SessionRecord>) -> WeekGrouping {
    let mut weeks: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();

    for record in records {
        weeks
            .entry(record.week_start())
            .or_insert_with_key(|ws| WeekBucket::new(*ws))
            .days
            .entry(record.day_of_week())
            .or_default()
            .push(record);
    }

    for bucket in weeks.values_mut() {
        for sessions in bucket.days.values_mut() {
            sessions.sort_by_key(SessionRecord::start);
        }
    }

    WeekGrouping { weeks }
}
