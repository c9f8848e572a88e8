use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Header names of the canonical export (`task_name,duration_minutes,timestamp`).
pub const CANONICAL_HEADERS: [&str; 3] = ["task_name", "duration_minutes", "timestamp"];

/// Header names of the older analysis export (`Intent,Duration(min),Start`).
pub const LEGACY_HEADERS: [&str; 3] = ["Intent", "Duration(min)", "Start"];

/// Focus-log layout: label, duration, websites, start, then free-text notes.
const POSITIONAL_COLUMNS: ColumnMap = ColumnMap {
    task: 0,
    duration: 1,
    timestamp: 3,
};

/// Which external layout the input CSV follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputSchema {
    /// Detect from the header row
    #[default]
    Auto,
    Canonical,
    Legacy,
    Positional,
}

/// Column indices of the three canonical fields inside a CSV record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub task: usize,
    pub duration: usize,
    pub timestamp: usize,
}

impl ColumnMap {
    /// Highest index this map reads from.
    pub fn max_index(&self) -> usize {
        self.task.max(self.duration).max(self.timestamp)
    }
}

impl InputSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSchema::Auto => "auto",
            InputSchema::Canonical => "canonical",
            InputSchema::Legacy => "legacy",
            InputSchema::Positional => "positional",
        }
    }

    /// Map a header row to column indices.
    pub fn resolve(&self, headers: &[&str]) -> AppResult<ColumnMap> {
        match self {
            InputSchema::Canonical => by_name(headers, &CANONICAL_HEADERS).ok_or_else(|| {
                AppError::InvalidSchema(format!(
                    "expected columns {}",
                    CANONICAL_HEADERS.join(", ")
                ))
            }),
            InputSchema::Legacy => by_name(headers, &LEGACY_HEADERS).ok_or_else(|| {
                AppError::InvalidSchema(format!("expected columns {}", LEGACY_HEADERS.join(", ")))
            }),
            InputSchema::Positional => positional(headers),
            InputSchema::Auto => match by_name(headers, &CANONICAL_HEADERS)
                .or_else(|| by_name(headers, &LEGACY_HEADERS))
            {
                Some(map) => Ok(map),
                None => positional(headers),
            },
        }
    }
}

fn positional(headers: &[&str]) -> AppResult<ColumnMap> {
    if headers.len() > POSITIONAL_COLUMNS.max_index() {
        Ok(POSITIONAL_COLUMNS)
    } else {
        Err(AppError::InvalidSchema(format!(
            "found {} column(s) [{}], none of the known layouts match",
            headers.len(),
            headers.join(", ")
        )))
    }
}

fn by_name(headers: &[&str], names: &[&str; 3]) -> Option<ColumnMap> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    Some(ColumnMap {
        task: find(names[0])?,
        duration: find(names[1])?,
        timestamp: find(names[2])?,
    })
}
