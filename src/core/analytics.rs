//! Per-session series behind the analysis charts: durations over time,
//! duration distribution, weekday/hour counts, the weekday × hour grid and
//! the cumulative focus time.

use crate::core::insights::{Keyword, top_keywords};
use crate::models::SessionRecord;
use chrono::{NaiveDateTime, Timelike};

pub const HISTOGRAM_BINS: usize = 15;

/// Keywords shown in the keyword chart.
pub const CHART_KEYWORDS: usize = 20;

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    pub at: NaiveDateTime,
    pub minutes: f64,
}

/// `[lower, upper)`; the last bin also holds `upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnalytics {
    /// Every session duration, by start time
    pub durations: Vec<TimePoint>,
    /// Running total of minutes, by start time
    pub cumulative: Vec<TimePoint>,
    pub histogram: Vec<HistogramBin>,
    pub sessions_by_weekday: [usize; 7],
    pub sessions_by_hour: [usize; HOURS_PER_DAY],
    /// Session counts, `[weekday][hour]`, Monday first
    pub day_hour: [[usize; HOURS_PER_DAY]; 7],
    /// `None` for weekdays without sessions
    pub avg_minutes_by_weekday: [Option<f64>; 7],
    pub keywords: Vec<Keyword>,
}

impl SessionAnalytics {
    pub fn session_count(&self) -> usize {
        self.durations.len()
    }

    pub fn total_minutes(&self) -> f64 {
        self.cumulative.last().map_or(0.0, |p| p.minutes)
    }
}

/// Build every chart series; `None` when there are no sessions.
pub fn build_analytics<'a, I>(records: I) -> Option<SessionAnalytics>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut sessions: Vec<&SessionRecord> = records.into_iter().collect();
    if sessions.is_empty() {
        return None;
    }
    sessions.sort_by_key(|s| s.start());

    let mut sessions_by_weekday = [0usize; 7];
    let mut sessions_by_hour = [0usize; HOURS_PER_DAY];
    let mut day_hour = [[0usize; HOURS_PER_DAY]; 7];
    let mut minutes_by_weekday = [0.0_f64; 7];

    let mut durations = Vec::with_capacity(sessions.len());
    let mut cumulative = Vec::with_capacity(sessions.len());
    let mut running = 0.0;

    for s in &sessions {
        let dow = usize::from(s.day_of_week());
        let hour = s.start().hour() as usize;

        sessions_by_weekday[dow] += 1;
        sessions_by_hour[hour] += 1;
        day_hour[dow][hour] += 1;
        minutes_by_weekday[dow] += s.duration_minutes();

        running += s.duration_minutes();
        durations.push(TimePoint {
            at: s.start(),
            minutes: s.duration_minutes(),
        });
        cumulative.push(TimePoint {
            at: s.start(),
            minutes: running,
        });
    }

    let avg_minutes_by_weekday = std::array::from_fn(|d| {
        (sessions_by_weekday[d] > 0).then(|| minutes_by_weekday[d] / sessions_by_weekday[d] as f64)
    });

    let values: Vec<f64> = durations.iter().map(|p| p.minutes).collect();

    Some(SessionAnalytics {
        histogram: histogram(&values, HISTOGRAM_BINS),
        keywords: top_keywords(sessions.iter().map(|s| s.task_name()), CHART_KEYWORDS),
        durations,
        cumulative,
        sessions_by_weekday,
        sessions_by_hour,
        day_hour,
        avg_minutes_by_weekday,
    })
}

/// Equal-width bins between the smallest and largest value. When every
/// value is the same the single range is widened by half a unit each side.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }

    out
}
