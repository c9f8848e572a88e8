use crate::errors::{AppError, AppResult};
use crate::models::{ColumnMap, InputSchema, RawRow, RejectReason, Rejection};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Rows read from the source plus records the CSV layer could not decode.
#[derive(Debug, Default)]
pub struct SourceRows {
    pub rows: Vec<RawRow>,
    pub malformed: Vec<Rejection>,
}

impl SourceRows {
    /// Rows seen in the file, decodable or not.
    pub fn total(&self) -> usize {
        self.rows.len() + self.malformed.len()
    }
}

/// Open `path` and read it with the given schema.
///
/// A missing file is `SourceMissing`; it is never confused with a file
/// that exists but holds no usable rows.
pub fn read_rows(path: &Path, schema: InputSchema) -> AppResult<SourceRows> {
    if !path.is_file() {
        return Err(AppError::SourceMissing(path.display().to_string()));
    }

    let file = File::open(path)?;
    read_from(file, schema)
}

/// Read CSV data from any reader. The first record is the header row.
pub fn read_from<R: Read>(reader: R, schema: InputSchema) -> AppResult<SourceRows> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(SourceRows::default());
    }

    let names: Vec<&str> = headers.iter().collect();
    let columns = schema.resolve(&names)?;
    log::debug!(
        "Input schema {} resolved to columns {:?}",
        schema.as_str(),
        columns
    );

    let mut out = SourceRows::default();

    for result in rdr.records() {
        match result {
            Ok(record) => out.rows.push(to_raw_row(&record, &columns)),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                out.malformed.push(Rejection {
                    line,
                    reason: RejectReason::Malformed(e.to_string()),
                });
            }
        }
    }

    Ok(out)
}

fn to_raw_row(record: &StringRecord, columns: &ColumnMap) -> RawRow {
    let field = |idx: usize| record.get(idx).map(str::to_string);

    RawRow {
        line: record.position().map(|p| p.line()).unwrap_or(0),
        task_name: field(columns.task),
        duration_minutes: field(columns.duration),
        timestamp: field(columns.timestamp),
    }
}
