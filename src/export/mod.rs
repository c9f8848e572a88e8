pub mod charts;
mod frame;
pub mod fs_utils;
pub mod html;
pub mod narrative;
mod pdf;
mod svg;

pub use frame::{BlockRect, Frame};
pub use html::IndexDocument;
pub use narrative::{FileNarrative, NarrativeSource, StaticNarrative};
pub use pdf::{PdfTimeline, win_ansi_bytes};
pub use svg::SvgTimeline;

use crate::core::calculator::layout::WeekLayout;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the index document inside the output directory.
pub const INDEX_FILE_NAME: &str = "focus_timeline_report.html";

/// Shared completion message for written files.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}

/// Turns one week's layout into the bytes of a visual artifact.
pub trait TimelineRenderer {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, layout: &WeekLayout) -> AppResult<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    #[default]
    Svg,
    Pdf,
}

impl ArtifactFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "svg",
            ArtifactFormat::Pdf => "pdf",
        }
    }

    pub fn renderer(&self) -> Box<dyn TimelineRenderer> {
        match self {
            ArtifactFormat::Svg => Box::new(SvgTimeline::default()),
            ArtifactFormat::Pdf => Box::new(PdfTimeline::default()),
        }
    }
}

/// `week_YYYY_MM_DD.<ext>`: zero-padded, so lexical order is chronological.
pub fn artifact_file_name(week_start: NaiveDate, extension: &str) -> String {
    format!("week_{}.{extension}", week_start.format("%Y_%m_%d"))
}
