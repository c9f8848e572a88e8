//! Weekly report assembly: one artifact per week plus the index document.

use crate::core::analytics::build_analytics;
use crate::core::calculator::layout::{DAYS_PER_WEEK, layout_week};
use crate::core::grouper::{WeekBucket, WeekGrouping};
use crate::errors::{AppError, AppResult};
use crate::export::charts::{ChartFile, write_charts};
use crate::export::fs_utils::{prepare_output_dir, write_file};
use crate::export::narrative::{self, AI_PLACEHOLDER, INSIGHTS_PLACEHOLDER, NarrativeSource};
use crate::export::{
    ArtifactFormat, INDEX_FILE_NAME, IndexDocument, TimelineRenderer, artifact_file_name,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-week figures shown next to the week's artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekEntry {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub file_name: String,
    pub total_minutes: f64,
    pub session_count: usize,
}

impl WeekEntry {
    pub fn from_bucket(bucket: &WeekBucket, file_name: String) -> Self {
        Self {
            week_start: bucket.week_start,
            week_end: bucket.week_end(),
            file_name,
            total_minutes: bucket.total_minutes(),
            session_count: bucket.session_count(),
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.total_minutes / 60.0
    }

    pub fn avg_hours_per_day(&self) -> f64 {
        self.total_hours() / f64::from(DAYS_PER_WEEK)
    }
}

/// Document-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedSummary {
    pub weeks_tracked: usize,
    pub total_sessions: usize,
    pub total_minutes: f64,
    pub total_hours: f64,
    pub avg_session_minutes: f64,
    pub avg_hours_per_week: f64,
}

/// Aggregates, or an explicit "no data" state when nothing was tracked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportSummary {
    NoData,
    Tracked(TrackedSummary),
}

impl ReportSummary {
    pub fn from_grouping(grouping: &WeekGrouping) -> Self {
        let weeks_tracked = grouping.len();
        let total_sessions = grouping.session_count();
        if weeks_tracked == 0 || total_sessions == 0 {
            return ReportSummary::NoData;
        }

        let total_minutes = grouping.total_minutes();
        let total_hours = total_minutes / 60.0;

        ReportSummary::Tracked(TrackedSummary {
            weeks_tracked,
            total_sessions,
            total_minutes,
            total_hours,
            avg_session_minutes: total_minutes / total_sessions as f64,
            avg_hours_per_week: total_hours / weeks_tracked as f64,
        })
    }

    pub fn tracked(&self) -> Option<&TrackedSummary> {
        match self {
            ReportSummary::NoData => None,
            ReportSummary::Tracked(t) => Some(t),
        }
    }
}

/// A week whose artifact could not be produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekFailure {
    pub week_start: NaiveDate,
    pub reason: String,
}

pub struct ReportOptions<'a> {
    pub output_dir: PathBuf,
    pub format: ArtifactFormat,
    pub insights: Option<&'a dyn NarrativeSource>,
    pub ai_notes: Option<&'a dyn NarrativeSource>,
    /// Also write the analysis charts and link them from the index
    pub charts: bool,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub index_path: PathBuf,
    pub weeks: Vec<WeekEntry>,
    pub failures: Vec<WeekFailure>,
    pub charts: Vec<ChartFile>,
    pub summary: ReportSummary,
}

impl ReportOutcome {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Render every week in chronological order, then write the index.
    ///
    /// A layout error aborts the run. A week whose artifact cannot be
    /// rendered or written is logged, skipped, and left out of the index.
    pub fn generate(grouping: &WeekGrouping, opts: &ReportOptions<'_>) -> AppResult<ReportOutcome> {
        if grouping.is_empty() {
            return Err(AppError::EmptyDataset {
                total: 0,
                rejected: 0,
            });
        }

        prepare_output_dir(&opts.output_dir)?;
        let renderer = opts.format.renderer();

        let mut weeks = Vec::new();
        let mut failures = Vec::new();

        for bucket in grouping.weeks() {
            let file_name = artifact_file_name(bucket.week_start, renderer.extension());
            let path = opts.output_dir.join(&file_name);

            match write_week(renderer.as_ref(), bucket, &path) {
                Ok(()) => {
                    log::info!("Wrote {}", path.display());
                    weeks.push(WeekEntry::from_bucket(bucket, file_name));
                }
                Err(WeekError::Fatal(e)) => return Err(e),
                Err(WeekError::Skipped(reason)) => {
                    let err = AppError::WeekRender {
                        week: bucket.week_start,
                        reason: reason.clone(),
                    };
                    log::warn!("{err}");
                    failures.push(WeekFailure {
                        week_start: bucket.week_start,
                        reason,
                    });
                }
            }
        }

        let charts = if opts.charts {
            build_analytics(grouping.sessions())
                .map(|a| write_charts(&opts.output_dir, &a))
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let summary = ReportSummary::from_grouping(grouping);
        let insights = narrative::resolve(opts.insights, INSIGHTS_PLACEHOLDER);
        let ai_analysis = narrative::resolve(opts.ai_notes, AI_PLACEHOLDER);

        let html = IndexDocument {
            generated_at: opts.generated_at,
            summary: &summary,
            weeks: &weeks,
            format: opts.format,
            insights: insights.as_deref(),
            ai_analysis: ai_analysis.as_deref(),
            charts: &charts,
        }
        .render();

        let index_path = opts.output_dir.join(INDEX_FILE_NAME);
        write_file(&index_path, html.as_bytes())?;

        Ok(ReportOutcome {
            index_path,
            weeks,
            failures,
            charts,
            summary,
        })
    }
}

enum WeekError {
    /// Layout invariants broken: abort the whole run
    Fatal(AppError),
    /// Rendering or I/O trouble confined to this week
    Skipped(String),
}

fn write_week(
    renderer: &dyn TimelineRenderer,
    bucket: &WeekBucket,
    path: &Path,
) -> Result<(), WeekError> {
    let layout = layout_week(bucket).map_err(WeekError::Fatal)?;
    let bytes = renderer
        .render(&layout)
        .map_err(|e| WeekError::Skipped(e.to_string()))?;
    write_file(path, &bytes).map_err(|e| WeekError::Skipped(e.to_string()))
}
