use std::fmt;

/// Why a source row did not become a `SessionRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    MissingLabel,
    InvalidDuration(String),
    NonPositiveDuration(String),
    InvalidTimestamp(String),
    /// The CSV layer could not decode the record at all
    Malformed(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingLabel => write!(f, "empty or missing task name"),
            RejectReason::InvalidDuration(v) => write!(f, "duration '{v}' is not a number"),
            RejectReason::NonPositiveDuration(v) => write!(f, "duration '{v}' is not positive"),
            RejectReason::InvalidTimestamp(v) => {
                write!(f, "timestamp '{v}' is not in YYYY-MM-DD HH:MM:SS format")
            }
            RejectReason::Malformed(e) => write!(f, "malformed row: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: u64,
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}
