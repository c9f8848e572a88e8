mod common;

use common::{file_names, ftl, workspace, write_csv, write_raw};
use predicates::prelude::*;
use std::fs;

const TWO_WEEKS: [&str; 4] = [
    "Write Spec,30,2025-03-03 09:00:00",
    "Review,90,2025-03-04 14:00:00",
    "Later week,60,2025-03-11 10:00:00",
    "Broken,abc,2025-03-11 11:00:00",
];

#[test]
fn report_writes_artifacts_and_index() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 4 row(s) rejected"))
        .stdout(predicate::str::contains("2 week timeline(s) written"));

    assert_eq!(
        file_names(&out),
        vec![
            "focus_timeline_report.html",
            "week_2025_03_03.svg",
            "week_2025_03_10.svg"
        ]
    );
}

#[test]
fn all_rows_rejected_fails_without_artifacts() {
    let tmp = workspace();
    let csv = write_csv(
        tmp.path(),
        "logs.csv",
        &["Zero,0,2025-03-03 09:00:00", "Bad date,30,yesterday"],
    );
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Source data present but empty after filtering: 2 of 2 row(s) rejected",
        ));

    assert!(file_names(&out).is_empty());
}

#[test]
fn missing_input_is_reported_as_missing() {
    let tmp = workspace();
    let missing = tmp.path().join("nope.csv");

    ftl(tmp.path())
        .args(["--input", missing.to_str().unwrap(), "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No source data"));
}

#[test]
fn stats_json_has_weeks_and_summary() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);

    let output = ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "stats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let weeks = doc["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0]["week_start"], "2025-03-03");
    assert_eq!(weeks[0]["file_name"], "week_2025_03_03.svg");
    assert_eq!(doc["summary"]["state"], "tracked");
    assert_eq!(doc["summary"]["weeks_tracked"], 2);
    assert_eq!(doc["summary"]["total_sessions"], 3);
}

#[test]
fn stats_table_lists_weeks() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week of March 03 - March 09, 2025"))
        .stdout(predicate::str::contains("Weeks tracked : 2"));
}

#[test]
fn legacy_export_is_accepted() {
    let tmp = workspace();
    let csv = write_raw(
        tmp.path(),
        "analysis.csv",
        "Start,Intent,Duration(min)",
        &["2025-03-05 10:00:00,Plan sprint,25"],
    );
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "--schema", "legacy"])
        .args(["report", "--format", "pdf", "--out"])
        .arg(&out)
        .assert()
        .success();

    let pdf = fs::read(out.join("week_2025_03_03.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn builtin_insights_are_embedded() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--builtin-insights"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(out.join("focus_timeline_report.html")).unwrap();
    assert!(html.contains("id=\"key-insights\""));
    assert!(html.contains("Focus Session Insights Report"));
}

#[test]
fn unreadable_ai_notes_use_placeholder() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");
    let notes = tmp.path().join("missing_notes.md");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--ai-notes"])
        .arg(&notes)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("using placeholder text"));

    let html = fs::read_to_string(out.join("focus_timeline_report.html")).unwrap();
    assert!(html.contains("AI analysis not available."));
}

#[test]
fn existing_report_needs_force() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("focus_timeline_report.html"), "old").unwrap();

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--out"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Report cancelled"));
    assert_eq!(
        fs::read_to_string(out.join("focus_timeline_report.html")).unwrap(),
        "old"
    );

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--force", "--out"])
        .arg(&out)
        .assert()
        .success();
    assert_ne!(
        fs::read_to_string(out.join("focus_timeline_report.html")).unwrap(),
        "old"
    );
}

#[test]
fn insights_to_file() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let md = tmp.path().join("insights.md");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "insights", "--file"])
        .arg(&md)
        .assert()
        .success();

    let text = fs::read_to_string(&md).unwrap();
    assert!(text.starts_with("# Focus Session Insights Report"));
    assert!(text.contains("Total Sessions: 3"));
}

#[test]
fn init_and_print_config() {
    let tmp = workspace();

    ftl(tmp.path()).arg("init").assert().success();
    assert!(tmp.path().join("focustimeline.conf").is_file());

    ftl(tmp.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output_dir: focus_timeline_report"))
        .stdout(predicate::str::contains("artifact_format: svg"));
}

#[test]
fn config_file_values_are_used() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("from_config");
    fs::write(
        tmp.path().join("focustimeline.conf"),
        format!(
            "input: {}\noutput_dir: {}\nartifact_format: pdf\n",
            csv.display(),
            out.display()
        ),
    )
    .unwrap();

    ftl(tmp.path()).arg("report").assert().success();
    assert!(out.join("week_2025_03_10.pdf").is_file());
}

#[test]
fn unreadable_insights_file_uses_placeholder() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");
    let insights = tmp.path().join("missing_insights.md");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--insights"])
        .arg(&insights)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("using placeholder text"));

    let html = fs::read_to_string(out.join("focus_timeline_report.html")).unwrap();
    assert!(html.contains("id=\"key-insights\""));
    assert!(html.contains("Insights not available."));
}

#[test]
fn unknown_layout_is_rejected_in_auto_mode() {
    let tmp = workspace();
    let csv = write_raw(tmp.path(), "odd.csv", "a,b", &["x,1", "y,2"]);
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized input schema"))
        .stderr(predicate::str::contains("none of the known layouts match"));

    assert!(file_names(&out).is_empty());
}

#[test]
fn missing_input_fails_before_overwrite_prompt() {
    let tmp = workspace();
    let missing = tmp.path().join("nope.csv");
    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("focus_timeline_report.html"), "old").unwrap();

    ftl(tmp.path())
        .args(["--input", missing.to_str().unwrap(), "report", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Overwrite").not())
        .stderr(predicate::str::contains("No source data"))
        .stderr(predicate::str::contains("Report cancelled").not());

    assert_eq!(
        fs::read_to_string(out.join("focus_timeline_report.html")).unwrap(),
        "old"
    );
}

#[test]
fn report_with_charts_links_visualizations() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &TWO_WEEKS);
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--charts", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("8 analysis chart(s) written"));

    let names = file_names(&out);
    assert!(names.contains(&"session_durations.svg".to_string()));
    assert!(names.contains(&"day_hour_heatmap.svg".to_string()));
    assert!(names.contains(&"cumulative_focus_time.svg".to_string()));

    let html = fs::read_to_string(out.join("focus_timeline_report.html")).unwrap();
    assert!(html.contains("<h2>Visualizations</h2>"));
    assert!(html.contains("src=\"sessions_by_hour.svg\""));
}

#[test]
fn non_ascii_labels_reach_the_pdf_as_win_ansi() {
    let tmp = workspace();
    let csv = write_csv(tmp.path(), "logs.csv", &["Café résumé,45,2025-03-05 10:00:00"]);
    let out = tmp.path().join("out");

    ftl(tmp.path())
        .args(["--input", csv.to_str().unwrap(), "report", "--format", "pdf", "--out"])
        .arg(&out)
        .assert()
        .success();

    let pdf = fs::read(out.join("week_2025_03_03.pdf")).unwrap();
    let contains = |needle: &[u8]| pdf.windows(needle.len()).any(|w| w == needle);
    assert!(contains(b"/WinAnsiEncoding"));
    // "Caf" + 0xE9, never the UTF-8 pair C3 A9
    assert!(contains(b"436166e9") || contains(b"436166E9") || contains(b"Caf\xe9"));
    assert!(!contains(b"c3a9") && !contains(b"C3A9") && !contains("é".as_bytes()));
}
