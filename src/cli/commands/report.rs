use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::insights::build_insights;
use crate::core::{ReportLogic, ReportOptions, load_dataset};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{FileNarrative, INDEX_FILE_NAME, NarrativeSource, StaticNarrative};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        out,
        format,
        insights,
        builtin_insights,
        ai_notes,
        charts,
        force,
    } = cmd
    {
        let output_dir = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.output_path());
        let format = format.unwrap_or(cfg.artifact_format);

        // a missing or empty source fails before the overwrite prompt
        let dataset = load_dataset(&cfg.input_path(), cfg.schema)?;
        ensure_writable(&output_dir.join(INDEX_FILE_NAME), *force)?;

        if dataset.rejected_count() > 0 {
            warning(format!(
                "{} of {} row(s) rejected",
                dataset.rejected_count(),
                dataset.total_rows
            ));
            for r in &dataset.rejected {
                log::info!("rejected {r}");
            }
        }

        // --insights FILE, then --builtin-insights, then the configured file
        let insights_source: Option<Box<dyn NarrativeSource>> = if let Some(path) = insights {
            Some(Box::new(FileNarrative::new(expand_tilde(path))))
        } else if *builtin_insights {
            build_insights(dataset.grouping.sessions()).map(|report| {
                Box::new(StaticNarrative {
                    label: "built-in insights".to_string(),
                    text: report.to_markdown(),
                }) as Box<dyn NarrativeSource>
            })
        } else {
            cfg.insights_path()
                .map(|p| Box::new(FileNarrative::new(p)) as Box<dyn NarrativeSource>)
        };

        let ai_source = ai_notes
            .as_deref()
            .map(expand_tilde)
            .or_else(|| cfg.ai_notes_path())
            .map(FileNarrative::new);

        let opts = ReportOptions {
            output_dir,
            format,
            insights: insights_source.as_deref(),
            ai_notes: ai_source.as_ref().map(|s| s as &dyn NarrativeSource),
            charts: *charts || cfg.charts,
            generated_at: date::now(),
        };

        info(format!(
            "Rendering {} week(s) as {}…",
            dataset.grouping.len(),
            format.as_str()
        ));
        let outcome = ReportLogic::generate(&dataset.grouping, &opts)?;

        if outcome.is_partial() {
            for f in &outcome.failures {
                warning(format!("Week of {} skipped: {}", f.week_start, f.reason));
            }
            warning(format!(
                "Partial report produced: {} week(s) failed",
                outcome.failures.len()
            ));
        } else {
            success(format!("{} week timeline(s) written", outcome.weeks.len()));
        }
        if !outcome.charts.is_empty() {
            success(format!("{} analysis chart(s) written", outcome.charts.len()));
        }
        crate::export::notify_export_success("Report", &outcome.index_path);
    }
    Ok(())
}
