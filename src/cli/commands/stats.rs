use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::WeekEntry;
use crate::core::{ReportSummary, load_dataset};
use crate::errors::AppResult;
use crate::export::artifact_file_name;
use crate::ui::messages::{header, hours_cell};
use crate::utils::date::week_range_label;
use crate::utils::fmt_hours;
use crate::utils::table::{Column, Table};
use serde::Serialize;

#[derive(Serialize)]
struct StatsDocument<'a> {
    weeks: &'a [WeekEntry],
    summary: &'a ReportSummary,
}

/// Handle the `stats` command: per-week totals and overall aggregates
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let dataset = load_dataset(&cfg.input_path(), cfg.schema)?;
        let extension = cfg.artifact_format.as_str();

        let weeks: Vec<WeekEntry> = dataset
            .grouping
            .weeks()
            .map(|b| WeekEntry::from_bucket(b, artifact_file_name(b.week_start, extension)))
            .collect();
        let summary = ReportSummary::from_grouping(&dataset.grouping);

        if *json {
            let doc = StatsDocument {
                weeks: &weeks,
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(());
        }

        header("Weekly focus");
        let mut table = Table::new(vec![
            Column::left("Week"),
            Column::right("Sessions"),
            Column::right("Hours"),
            Column::right("Avg h/day"),
        ]);
        for w in &weeks {
            table.add_row(vec![
                week_range_label(w.week_start, w.week_end),
                w.session_count.to_string(),
                fmt_hours(w.total_minutes),
                format!("{:.1}", w.avg_hours_per_day()),
            ]);
        }
        print!("{}", table.render());

        match summary {
            ReportSummary::NoData => println!("\nNo data"),
            ReportSummary::Tracked(t) => {
                println!();
                println!("Weeks tracked : {}", t.weeks_tracked);
                println!("Sessions      : {}", t.total_sessions);
                println!(
                    "Total hours   : {}",
                    hours_cell(&format!("{:.1}", t.total_hours), t.total_minutes)
                );
                println!("Avg session   : {:.0} min", t.avg_session_minutes);
                println!("Avg hours/week: {:.1}", t.avg_hours_per_week);
            }
        }

        if dataset.rejected_count() > 0 {
            println!(
                "\n{} of {} row(s) rejected",
                dataset.rejected_count(),
                dataset.total_rows
            );
        }
    }
    Ok(())
}
