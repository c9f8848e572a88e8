mod common;

use chrono::{Datelike, NaiveDate, Weekday};
use common::{approx, grouping, session};

#[test]
fn week_start_is_always_the_monday_on_or_before() {
    // Sunday 2025-03-09 and Monday 2025-03-10 fall in different weeks
    let g = grouping(vec![
        session("Sun", "2025-03-09 10:00:00", 30.0),
        session("Mon", "2025-03-10 10:00:00", 30.0),
        session("Wed", "2025-03-05 23:59:59", 30.0),
    ]);

    let starts: Vec<NaiveDate> = g.weeks().map(|w| w.week_start).collect();
    assert_eq!(
        starts,
        vec![
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        ]
    );

    for s in g.sessions() {
        assert_eq!(s.week_start().weekday(), Weekday::Mon);
        assert!(s.week_start() <= s.date());
        assert!((s.date() - s.week_start()).num_days() < 7);
    }
}

#[test]
fn days_are_sorted_and_ties_keep_input_order() {
    let g = grouping(vec![
        session("Late", "2025-03-04 15:00:00", 10.0),
        session("First", "2025-03-04 09:00:00", 10.0),
        session("Second", "2025-03-04 09:00:00", 20.0),
    ]);

    let week = g.week(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()).unwrap();
    let labels: Vec<&str> = week.day(1).iter().map(|s| s.task_name()).collect();
    assert_eq!(labels, vec!["First", "Second", "Late"]);
    assert!(week.day(0).is_empty());
}

#[test]
fn totals_add_up_across_weeks() {
    let g = grouping(vec![
        session("A", "2025-03-03 09:00:00", 30.0),
        session("B", "2025-03-12 09:00:00", 90.0),
    ]);
    assert_eq!(g.len(), 2);
    assert_eq!(g.session_count(), 2);
    assert!(approx(g.total_minutes(), 120.0));

    let first = g.weeks().next().unwrap();
    assert_eq!(first.week_end(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    assert!(approx(first.total_minutes(), 30.0));
}

#[test]
fn year_boundary_week_starts_in_previous_year() {
    // 2025-01-01 is a Wednesday
    let g = grouping(vec![session("NY", "2025-01-01 10:00:00", 15.0)]);
    let week = g.weeks().next().unwrap();
    assert_eq!(week.week_start, NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
    assert_eq!(week.day(2).len(), 1);
}
