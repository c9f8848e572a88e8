//! Unified application error type.
//! Every stage (source, core, export, cli) returns AppError so the terminal
//! message can tell "no data" apart from "data filtered to nothing" and from
//! genuine I/O or layout faults.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Event source
    // ---------------------------
    #[error("No source data: input file '{0}' not found")]
    SourceMissing(String),

    #[error(
        "Source data present but empty after filtering: {rejected} of {total} row(s) rejected, no report produced"
    )]
    EmptyDataset { total: usize, rejected: usize },

    #[error("Unrecognized input schema: {0}")]
    InvalidSchema(String),

    // ---------------------------
    // Layout / rendering
    // ---------------------------
    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Failed to write timeline for week {week}: {reason}")]
    WeekRender { week: NaiveDate, reason: String },

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Narrative source unavailable: {0}")]
    CollaboratorUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
