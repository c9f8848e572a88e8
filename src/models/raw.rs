/// One source row after the schema adapter has picked out the three
/// canonical fields. Values are kept as raw text; nothing is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source file (0 when the row was built in memory)
    pub line: u64,
    pub task_name: Option<String>,
    pub duration_minutes: Option<String>,
    pub timestamp: Option<String>,
}

impl RawRow {
    pub fn new(task_name: &str, duration_minutes: &str, timestamp: &str) -> Self {
        Self {
            line: 0,
            task_name: Some(task_name.to_string()),
            duration_minutes: Some(duration_minutes.to_string()),
            timestamp: Some(timestamp.to_string()),
        }
    }

    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}
