mod common;

use common::{approx, session};
use focustimeline::core::insights::{Trend, build_insights, top_keywords};

#[test]
fn no_sessions_no_insights() {
    assert!(build_insights(std::iter::empty()).is_none());
}

#[test]
fn productive_day_hour_and_totals() {
    let records = vec![
        session("Write report draft", "2025-03-03 09:15:00", 30.0),
        session("Write report final", "2025-03-04 14:00:00", 90.0),
        session("Email", "2025-03-04 14:30:00", 10.0),
    ];
    let r = build_insights(&records).unwrap();

    assert_eq!(r.total_sessions, 3);
    assert!(approx(r.total_minutes, 130.0));
    assert!(approx(r.longest_minutes, 90.0));
    assert_eq!(r.most_productive_day, "Tuesday");
    assert_eq!(r.most_productive_hour, 14);
    assert_eq!(r.keywords[0].word, "report");
    assert_eq!(r.keywords[0].count, 2);
    assert_eq!(r.keywords[1].word, "write");
}

#[test]
fn keywords_skip_stop_words_and_short_words() {
    let labels = ["Fix the bug in UI", "fix: parser, and bug!", "Go to gym"];
    let k = top_keywords(labels.iter().copied(), 3);
    let words: Vec<&str> = k.iter().map(|k| k.word.as_str()).collect();
    assert_eq!(words, vec!["bug", "fix", "gym"]);
    assert_eq!(k[0].count, 2);
}

#[test]
fn trend_compares_recent_window_with_overall() {
    let mut records = Vec::new();
    for day in 1..=9 {
        records.push(session("Long", &format!("2025-03-{day:02} 09:00:00"), 60.0));
    }
    for day in 10..=19 {
        records.push(session("Short", &format!("2025-03-{day:02} 09:00:00"), 10.0));
    }
    let r = build_insights(&records).unwrap();
    assert_eq!(r.trend, Trend::Decreasing);
    assert!(approx(r.recent_avg_minutes, 10.0));

    records.push(session("Marathon", "2025-03-20 09:00:00", 600.0));
    let r = build_insights(&records).unwrap();
    assert_eq!(r.trend, Trend::Increasing);
}

#[test]
fn markdown_has_every_section() {
    let records = vec![session("Deep work", "2025-03-05 10:00:00", 45.0)];
    let md = build_insights(&records).unwrap().to_markdown();
    for heading in [
        "# Focus Session Insights Report",
        "## Summary Statistics",
        "## Productivity Patterns",
        "## Common Focus Areas",
        "## Recent Trend",
        "## Recommendations",
    ] {
        assert!(md.contains(heading), "missing {heading}");
    }
    assert!(md.contains("Most Productive Day: Wednesday"));
    assert!(md.contains("- deep: 1 occurrences"));
}

#[test]
fn markdown_summary_block_is_exact() {
    let records = vec![
        session("Deep work", "2025-03-05 10:00:00", 45.0),
        session("Deep reading", "2025-03-05 10:30:00", 75.0),
    ];
    let md = build_insights(&records).unwrap().to_markdown();

    assert!(md.starts_with(
        "# Focus Session Insights Report\n\n\
         ## Summary Statistics\n\
         - Total Sessions: 2\n\
         - Total Focus Time: 120.0 minutes (2.0 hours)\n\
         - Average Session Duration: 60.0 minutes\n\
         - Longest Session: 75.0 minutes\n\n\
         ## Productivity Patterns\n\
         - Most Productive Day: Wednesday\n\
         - Most Productive Hour: 10:00\n\n"
    ));
    assert!(md.contains("- deep: 2 occurrences\n"));
    assert!(md.trim_end().ends_with("check whether that length suits your work"));
}
