use crate::core::calculator::axis::{AxisRange, derive_axis};
use crate::core::calculator::color::{Rgb, session_color};
use crate::core::calculator::label::display_label;
use crate::core::grouper::WeekBucket;
use crate::errors::AppResult;
use crate::models::SessionRecord;
use chrono::{Days, NaiveDate};

pub const DAYS_PER_WEEK: u8 = 7;

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Geometry of one session block, in hours on the week's axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSession {
    pub vertical_offset: f64,
    pub height: f64,
    pub color: Rgb,
    pub display_label: String,
}

impl RenderedSession {
    pub fn bottom(&self) -> f64 {
        self.vertical_offset + self.height
    }
}

/// One day column: drawable blocks plus the day's total.
///
/// `total_minutes` covers every session of the day, including sessions that
/// start before the axis and therefore have no block.
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub day_of_week: u8,
    pub date: NaiveDate,
    pub sessions: Vec<RenderedSession>,
    pub total_minutes: f64,
    pub session_count: usize,
}

impl DayColumn {
    pub fn name(&self) -> &'static str {
        DAY_NAMES[usize::from(self.day_of_week)]
    }

    pub fn total_hours(&self) -> f64 {
        self.total_minutes / 60.0
    }
}

/// Everything a renderer needs to draw one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub axis: AxisRange,
    /// Always seven entries, Monday first.
    pub days: Vec<DayColumn>,
}

impl WeekLayout {
    pub fn week_end(&self) -> NaiveDate {
        self.days
            .last()
            .map(|d| d.date)
            .unwrap_or(self.week_start)
    }

    pub fn total_minutes(&self) -> f64 {
        self.days.iter().map(|d| d.total_minutes).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.total_minutes() / 60.0
    }

    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.session_count).sum()
    }

    /// Average over all seven days, empty days included.
    pub fn avg_hours_per_day(&self) -> f64 {
        self.total_hours() / f64::from(DAYS_PER_WEEK)
    }

    pub fn rendered_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }
}

/// Lay out one week: shared axis, then each of the seven day columns.
pub fn layout_week(bucket: &WeekBucket) -> AppResult<WeekLayout> {
    let axis = derive_axis(bucket.sessions())?;

    let days = (0..DAYS_PER_WEEK)
        .map(|dow| {
            let date = bucket
                .week_start
                .checked_add_days(Days::new(u64::from(dow)))
                .unwrap_or(NaiveDate::MAX);
            layout_day(dow, date, bucket.day(dow), &axis)
        })
        .collect();

    Ok(WeekLayout {
        week_start: bucket.week_start,
        axis,
        days,
    })
}

/// Lay out one day. `sessions` must already be in chronological order.
///
/// Sessions starting before the axis start produce no block; colours are
/// spread over the remaining blocks only.
pub fn layout_day(
    day_of_week: u8,
    date: NaiveDate,
    sessions: &[SessionRecord],
    axis: &AxisRange,
) -> DayColumn {
    let visible: Vec<&SessionRecord> = sessions
        .iter()
        .filter(|s| s.start_hour_of_day() >= axis.start_hour())
        .collect();
    let count = visible.len();

    let rendered = visible
        .into_iter()
        .enumerate()
        .map(|(i, s)| RenderedSession {
            vertical_offset: s.start_hour_of_day(),
            height: s.duration_hours(),
            color: session_color(i, count),
            display_label: display_label(s.task_name()),
        })
        .collect();

    DayColumn {
        day_of_week,
        date,
        sessions: rendered,
        total_minutes: sessions.iter().map(SessionRecord::duration_minutes).sum(),
        session_count: sessions.len(),
    }
}
