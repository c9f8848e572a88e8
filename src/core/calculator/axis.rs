use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;

/// First hour shown on every weekly timeline.
pub const START_HOUR: f64 = 7.0;

/// Headroom after the latest session so its label is not clipped.
pub const END_PADDING_HOURS: f64 = 0.5;

/// The axis never extends past midnight.
pub const MAX_END_HOUR: f64 = 24.0;

/// Shared vertical time-of-day scale of one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    start_hour: f64,
    end_hour: f64,
}

impl AxisRange {
    /// Checked constructor: both bounds finite, `start <= end <= 24`.
    pub fn new(start_hour: f64, end_hour: f64) -> AppResult<Self> {
        if !start_hour.is_finite() || !end_hour.is_finite() {
            return Err(AppError::Layout(format!(
                "axis bounds must be finite (start {start_hour}, end {end_hour})"
            )));
        }
        if start_hour < 0.0 || end_hour < start_hour || end_hour > MAX_END_HOUR {
            return Err(AppError::Layout(format!(
                "axis {start_hour:.2}..{end_hour:.2} outside 0..{MAX_END_HOUR}"
            )));
        }

        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> f64 {
        self.start_hour
    }

    pub fn end_hour(&self) -> f64 {
        self.end_hour
    }

    pub fn span_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// Whole hours to label, `start..=floor(end)`.
    pub fn hour_ticks(&self) -> Vec<u32> {
        (self.start_hour as u32..=self.end_hour.floor() as u32).collect()
    }

    /// Clamp an hour-of-day into the visible window.
    pub fn clamp(&self, hour: f64) -> f64 {
        hour.clamp(self.start_hour, self.end_hour)
    }
}

/// Derive the axis from every session of the week.
///
/// With no sessions the axis is empty (`end == start`). Otherwise
/// `end = min(24, max(start, latest end) + 0.5)`.
pub fn derive_axis<'a, I>(sessions: I) -> AppResult<AxisRange>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let latest_end = sessions
        .into_iter()
        .map(SessionRecord::end_hour_of_day)
        .fold(None, |acc: Option<f64>, end| {
            Some(acc.map_or(end, |a| a.max(end)))
        });

    match latest_end {
        None => AxisRange::new(START_HOUR, START_HOUR),
        Some(latest) => AxisRange::new(
            START_HOUR,
            (latest.max(START_HOUR) + END_PADDING_HOURS).min(MAX_END_HOUR),
        ),
    }
}
