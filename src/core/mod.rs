pub mod analytics;
pub mod calculator;
pub mod dataset;
pub mod grouper;
pub mod insights;
pub mod normalizer;
pub mod report;

pub use analytics::{SessionAnalytics, build_analytics};
pub use dataset::{Dataset, load_dataset};
pub use grouper::{WeekBucket, WeekGrouping, group_by_week};
pub use normalizer::{Normalized, RowOutcome, normalize_rows};
pub use report::{ReportLogic, ReportOptions, ReportOutcome, ReportSummary};
