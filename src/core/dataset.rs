use crate::core::grouper::{WeekGrouping, group_by_week};
use crate::core::normalizer::normalize_rows;
use crate::errors::{AppError, AppResult};
use crate::models::{InputSchema, Rejection};
use crate::source::read_rows;
use std::path::Path;

/// Validated sessions grouped by week, with the rows that were dropped.
#[derive(Debug)]
pub struct Dataset {
    pub grouping: WeekGrouping,
    pub total_rows: usize,
    pub rejected: Vec<Rejection>,
}

impl Dataset {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Read, validate and group the source file.
///
/// Fails with `SourceMissing` when the file is absent and with
/// `EmptyDataset` when no row survives validation.
pub fn load_dataset(path: &Path, schema: InputSchema) -> AppResult<Dataset> {
    let source = read_rows(path, schema)?;
    let normalized = normalize_rows(&source.rows);

    let total_rows = source.total();
    let mut rejected = source.malformed;
    rejected.extend(normalized.rejected);
    rejected.sort_by_key(|r| r.line);

    if normalized.records.is_empty() {
        return Err(AppError::EmptyDataset {
            total: total_rows,
            rejected: rejected.len(),
        });
    }

    log::debug!(
        "{} valid session(s), {} row(s) rejected",
        normalized.records.len(),
        rejected.len()
    );

    Ok(Dataset {
        grouping: group_by_week(normalized.records),
        total_rows,
        rejected,
    })
}
