//! Row validation: raw text rows in, `SessionRecord`s out.
//!
//! Every row is judged on its own; a bad row is turned into a `Rejection`
//! and the pass continues.

use crate::models::session::TIMESTAMP_FORMAT;
use crate::models::{RawRow, RejectReason, Rejection, SessionRecord};
use chrono::NaiveDateTime;

/// Result of validating a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Valid(SessionRecord),
    Rejected(Rejection),
}

/// All records that survived validation, plus what was dropped and why.
#[derive(Debug, Default)]
pub struct Normalized {
    pub records: Vec<SessionRecord>,
    pub rejected: Vec<Rejection>,
}

impl Normalized {
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}

pub fn normalize_row(row: &RawRow) -> RowOutcome {
    match validate(row) {
        Ok(record) => RowOutcome::Valid(record),
        Err(reason) => RowOutcome::Rejected(Rejection {
            line: row.line,
            reason,
        }),
    }
}

/// Validate every row, keeping input order among the survivors.
pub fn normalize_rows<'a, I>(rows: I) -> Normalized
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut out = Normalized::default();

    for row in rows {
        match normalize_row(row) {
            RowOutcome::Valid(record) => out.records.push(record),
            RowOutcome::Rejected(rejection) => {
                log::debug!("Dropping row: {rejection}");
                out.rejected.push(rejection);
            }
        }
    }

    out
}

/// Text and non-finite durations are `InvalidDuration`; numbers <= 0 are
/// `NonPositiveDuration`. Both drop the row.
fn validate(row: &RawRow) -> Result<SessionRecord, RejectReason> {
    let task_name = row
        .task_name
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(RejectReason::MissingLabel)?;

    let raw_duration = row.duration_minutes.as_deref().unwrap_or("").trim();
    let duration = raw_duration
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| RejectReason::InvalidDuration(raw_duration.to_string()))?;
    if duration <= 0.0 {
        return Err(RejectReason::NonPositiveDuration(raw_duration.to_string()));
    }

    let raw_ts = row.timestamp.as_deref().unwrap_or("").trim();
    let start = NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT)
        .map_err(|_| RejectReason::InvalidTimestamp(raw_ts.to_string()))?;

    SessionRecord::new(task_name, start, duration)
        .ok_or_else(|| RejectReason::InvalidTimestamp(raw_ts.to_string()))
}
