use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// "Week of March 03 - March 09, 2025"
pub fn week_range_label(week_start: NaiveDate, week_end: NaiveDate) -> String {
    if week_start.year() == week_end.year() {
        format!(
            "Week of {} - {}",
            week_start.format("%B %d"),
            week_end.format("%B %d, %Y")
        )
    } else {
        format!(
            "Week of {} - {}",
            week_start.format("%B %d, %Y"),
            week_end.format("%B %d, %Y")
        )
    }
}

/// "07:00"
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// Short column date, e.g. "Mar 03".
pub fn short_date(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}
