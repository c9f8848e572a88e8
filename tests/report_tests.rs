mod common;

use common::{approx, file_names, grouping, session, ts, workspace, write_csv};
use focustimeline::core::report::WeekEntry;
use focustimeline::core::{
    ReportLogic, ReportOptions, ReportSummary, WeekGrouping, load_dataset,
};
use focustimeline::errors::AppError;
use focustimeline::export::narrative::{AI_PLACEHOLDER, INSIGHTS_PLACEHOLDER};
use focustimeline::export::{
    ArtifactFormat, FileNarrative, INDEX_FILE_NAME, IndexDocument, StaticNarrative, SvgTimeline,
    artifact_file_name, win_ansi_bytes,
};
use focustimeline::core::calculator::layout::layout_week;
use focustimeline::models::InputSchema;
use std::fs;
use std::path::Path;

fn options<'a>(dir: &Path, format: ArtifactFormat) -> ReportOptions<'a> {
    ReportOptions {
        output_dir: dir.to_path_buf(),
        format,
        insights: None,
        ai_notes: None,
        charts: false,
        generated_at: ts("2025-03-20 18:00:00"),
    }
}

fn two_weeks() -> WeekGrouping {
    grouping(vec![
        session("Later week", "2025-03-11 10:00:00", 60.0),
        session("Write Spec", "2025-03-03 09:00:00", 30.0),
        session("Review", "2025-03-04 14:00:00", 90.0),
    ])
}

#[test]
fn two_weeks_in_chronological_order() {
    let tmp = workspace();
    let out = tmp.path().join("report");
    let outcome = ReportLogic::generate(&two_weeks(), &options(&out, ArtifactFormat::Svg)).unwrap();

    assert!(!outcome.is_partial());
    let starts: Vec<String> = outcome.weeks.iter().map(|w| w.file_name.clone()).collect();
    assert_eq!(starts, vec!["week_2025_03_03.svg", "week_2025_03_10.svg"]);

    let Some(t) = outcome.summary.tracked() else {
        panic!("summary should be tracked");
    };
    assert_eq!(t.weeks_tracked, 2);
    assert_eq!(t.total_sessions, 3);
    assert!(approx(t.total_hours, 3.0));
    assert!(approx(t.avg_hours_per_week, t.total_hours / 2.0));
    assert!(approx(t.avg_session_minutes, 60.0));

    assert_eq!(
        file_names(&out),
        vec![INDEX_FILE_NAME, "week_2025_03_03.svg", "week_2025_03_10.svg"]
    );

    let html = fs::read_to_string(&outcome.index_path).unwrap();
    let first = html.find("id=\"week-2025-03-03\"").unwrap();
    let second = html.find("id=\"week-2025-03-10\"").unwrap();
    assert!(first < second);
    assert!(html.contains("src=\"week_2025_03_03.svg\""));
    assert!(html.contains("Weeks Tracked"));
    assert!(!html.contains("key-insights"));
}

#[test]
fn artifact_names_sort_chronologically() {
    let d1 = ts("2024-12-30 00:00:00").date();
    let d2 = ts("2025-01-06 00:00:00").date();
    let a = artifact_file_name(d1, "svg");
    let b = artifact_file_name(d2, "svg");
    assert_eq!(a, "week_2024_12_30.svg");
    assert!(a < b);
}

#[test]
fn failing_week_is_skipped_and_run_continues() {
    let tmp = workspace();
    let out = tmp.path().join("report");
    // a directory squatting on the first week's file name makes its write fail
    fs::create_dir_all(out.join("week_2025_03_03.svg")).unwrap();

    let outcome = ReportLogic::generate(&two_weeks(), &options(&out, ArtifactFormat::Svg)).unwrap();

    assert!(outcome.is_partial());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].week_start, ts("2025-03-03 00:00:00").date());
    assert_eq!(outcome.weeks.len(), 1);
    assert!(out.join("week_2025_03_10.svg").is_file());

    let html = fs::read_to_string(out.join(INDEX_FILE_NAME)).unwrap();
    assert!(!html.contains("week-2025-03-03"));
    assert!(html.contains("week-2025-03-10"));
}

#[test]
fn empty_grouping_produces_nothing() {
    let tmp = workspace();
    let out = tmp.path().join("report");
    let err = ReportLogic::generate(&WeekGrouping::default(), &options(&out, ArtifactFormat::Svg))
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyDataset { total: 0, rejected: 0 }));
    assert!(!out.exists());
}

#[test]
fn no_data_summary_renders_placeholder() {
    let summary = ReportSummary::from_grouping(&WeekGrouping::default());
    assert_eq!(summary, ReportSummary::NoData);

    let weeks: Vec<WeekEntry> = Vec::new();
    let html = IndexDocument {
        generated_at: ts("2025-03-20 18:00:00"),
        summary: &summary,
        weeks: &weeks,
        format: ArtifactFormat::Svg,
        insights: None,
        ai_analysis: None,
        charts: &[],
    }
    .render();
    assert!(html.contains("No data"));
    assert!(!html.contains("Weeks Tracked"));
}

#[test]
fn missing_narrative_falls_back_to_placeholder() {
    let tmp = workspace();
    let out = tmp.path().join("report");
    let missing = FileNarrative::new(tmp.path().join("nope.md"));
    let builtin = StaticNarrative {
        label: "test".into(),
        text: "Focus <more> & rest".into(),
    };

    let opts = ReportOptions {
        insights: Some(&builtin),
        ai_notes: Some(&missing),
        ..options(&out, ArtifactFormat::Svg)
    };
    let outcome = ReportLogic::generate(&two_weeks(), &opts).unwrap();

    let html = fs::read_to_string(outcome.index_path).unwrap();
    assert!(html.contains("id=\"ai-analysis\""));
    assert!(html.contains(AI_PLACEHOLDER));
    assert!(html.contains("Focus &lt;more&gt; &amp; rest"));
    assert!(!html.contains(INSIGHTS_PLACEHOLDER));
}

#[test]
fn pdf_artifacts_are_pdf_documents() {
    let tmp = workspace();
    let out = tmp.path().join("report");
    let outcome = ReportLogic::generate(&two_weeks(), &options(&out, ArtifactFormat::Pdf)).unwrap();

    for w in &outcome.weeks {
        assert!(w.file_name.ends_with(".pdf"));
        let bytes = fs::read(out.join(&w.file_name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
    let html = fs::read_to_string(outcome.index_path).unwrap();
    assert!(html.contains("application/pdf"));
}

#[test]
fn svg_draws_one_block_per_rendered_session() {
    let g = grouping(vec![
        session("Dawn", "2025-03-03 06:00:00", 30.0),
        session("<Plan> & go", "2025-03-03 09:00:00", 30.0),
        session("Build", "2025-03-05 10:00:00", 45.0),
    ]);
    let layout = layout_week(g.weeks().next().unwrap()).unwrap();
    let svg = SvgTimeline::default().to_svg(&layout);

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"session\"").count(), layout.rendered_count());
    assert_eq!(svg.matches("class=\"total\"").count(), 7);
    assert!(svg.contains("&lt;Plan&gt; &amp; go"));
    assert!(svg.contains("fill=\"#b8f2e6\""));
    // Monday total includes the early session: 1.0h
    assert!(svg.contains(">1.0h<"));
}

#[test]
fn dataset_distinguishes_missing_from_empty() {
    let tmp = workspace();
    let err = load_dataset(&tmp.path().join("absent.csv"), InputSchema::Auto).unwrap_err();
    assert!(matches!(err, AppError::SourceMissing(_)));

    let path = write_csv(
        tmp.path(),
        "bad.csv",
        &["Read,zero,2025-03-03 09:00:00", ",30,2025-03-03 10:00:00"],
    );
    let err = load_dataset(&path, InputSchema::Auto).unwrap_err();
    assert!(matches!(err, AppError::EmptyDataset { total: 2, rejected: 2 }));

    let path = write_csv(
        tmp.path(),
        "mixed.csv",
        &["Read,25,2025-03-03 09:00:00", "Bad,-1,2025-03-03 10:00:00"],
    );
    let ds = load_dataset(&path, InputSchema::Auto).unwrap();
    assert_eq!(ds.total_rows, 2);
    assert_eq!(ds.rejected_count(), 1);
    assert_eq!(ds.rejected[0].line, 3);
    assert_eq!(ds.grouping.session_count(), 1);
}

#[test]
fn pdf_text_is_encoded_as_win_ansi() {
    assert_eq!(win_ansi_bytes("Café résumé"), b"Caf\xe9 r\xe9sum\xe9".to_vec());
    assert_eq!(win_ansi_bytes("Plan – “draft” €5"), b"Plan \x96 \x93draft\x94 \x805".to_vec());
    assert_eq!(win_ansi_bytes("日本 ok"), b"?? ok".to_vec());
}
