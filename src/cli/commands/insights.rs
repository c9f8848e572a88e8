use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::insights::build_insights;
use crate::core::load_dataset;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_file};
use crate::export::notify_export_success;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Terminal width used when printing the report.
const WRAP_WIDTH: usize = 100;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Insights { file, force } = cmd {
        let dataset = load_dataset(&cfg.input_path(), cfg.schema)?;

        let Some(report) = build_insights(dataset.grouping.sessions()) else {
            warning("No sessions to analyse");
            return Ok(());
        };
        let markdown = report.to_markdown();

        match file {
            Some(f) => {
                let path = expand_tilde(f);
                ensure_writable(&path, *force)?;
                write_file(&path, markdown.as_bytes())?;
                notify_export_success("Insights", &path);
            }
            None => {
                for line in markdown.lines() {
                    if line.is_empty() {
                        println!();
                        continue;
                    }
                    for wrapped in textwrap::wrap(line, WRAP_WIDTH) {
                        println!("{wrapped}");
                    }
                }
            }
        }
    }
    Ok(())
}
