//! Event source: reads the focus-session CSV and hands canonical raw rows
//! to the normalizer.

mod csv_reader;

pub use csv_reader::{SourceRows, read_from, read_rows};
