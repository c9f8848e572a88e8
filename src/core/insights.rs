//! Statistical insights over all sessions: totals, productive day and hour,
//! frequent label keywords and the recent trend.

use crate::core::calculator::layout::DAY_NAMES;
use crate::models::SessionRecord;
use chrono::Timelike;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// How many of the latest sessions form the "recent" window.
pub const RECENT_WINDOW: usize = 10;

pub const TOP_KEYWORDS: usize = 5;

const STOP_WORDS: [&str; 18] = [
    "the", "and", "to", "a", "of", "for", "in", "on", "with", "is", "it", "that", "be", "as",
    "this", "by", "an", "at",
];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static punctuation pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub total_sessions: usize,
    pub total_minutes: f64,
    pub avg_minutes: f64,
    pub longest_minutes: f64,
    pub most_productive_day: &'static str,
    pub most_productive_hour: u32,
    pub keywords: Vec<Keyword>,
    pub recent_avg_minutes: f64,
    pub trend: Trend,
}

/// Compute insights; `None` when there are no sessions.
pub fn build_insights<'a, I>(records: I) -> Option<InsightsReport>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut sessions: Vec<&SessionRecord> = records.into_iter().collect();
    if sessions.is_empty() {
        return None;
    }
    sessions.sort_by_key(|s| s.start());

    let total_sessions = sessions.len();
    let total_minutes: f64 = sessions.iter().map(|s| s.duration_minutes()).sum();
    let avg_minutes = total_minutes / total_sessions as f64;
    let longest_minutes = sessions
        .iter()
        .map(|s| s.duration_minutes())
        .fold(0.0, f64::max);

    let mut per_day = [0.0_f64; 7];
    let mut per_hour: BTreeMap<u32, f64> = BTreeMap::new();
    for s in &sessions {
        per_day[usize::from(s.day_of_week())] += s.duration_minutes();
        *per_hour.entry(s.start().hour()).or_default() += s.duration_minutes();
    }

    let recent = &sessions[sessions.len().saturating_sub(RECENT_WINDOW)..];
    let recent_avg_minutes =
        recent.iter().map(|s| s.duration_minutes()).sum::<f64>() / recent.len() as f64;
    let trend = if recent_avg_minutes > avg_minutes {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    Some(InsightsReport {
        total_sessions,
        total_minutes,
        avg_minutes,
        longest_minutes,
        most_productive_day: DAY_NAMES[first_max(per_day.iter().copied().enumerate())],
        most_productive_hour: first_max(per_hour.into_iter()),
        keywords: top_keywords(sessions.iter().map(|s| s.task_name()), TOP_KEYWORDS),
        recent_avg_minutes,
        trend,
    })
}

/// Key of the largest value; the first key wins a tie.
fn first_max<K: Copy + Default>(values: impl Iterator<Item = (K, f64)>) -> K {
    let mut best: Option<(K, f64)> = None;
    for (k, v) in values {
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((k, v));
        }
    }
    best.map(|(k, _)| k).unwrap_or_default()
}

/// Most frequent words of the labels, ignoring punctuation, stop words and
/// words of two characters or fewer. Ties are broken alphabetically.
pub fn top_keywords<'a>(labels: impl Iterator<Item = &'a str>, limit: usize) -> Vec<Keyword> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for label in labels {
        let cleaned = PUNCTUATION.replace_all(&label.to_lowercase(), " ").into_owned();
        for word in cleaned.split_whitespace() {
            if word.chars().count() <= 2 || STOP_WORDS.contains(&word) {
                continue;
            }
            *counts.entry(word.to_string()).or_default() += 1;
        }
    }

    let mut ranked: Vec<Keyword> = counts
        .into_iter()
        .map(|(word, count)| Keyword { word, count })
        .collect();
    // BTreeMap order is alphabetical and the sort is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

impl InsightsReport {
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let hours = self.total_minutes / 60.0;

        md.push_str("# Focus Session Insights Report\n\n");

        md.push_str("## Summary Statistics\n");
        md.push_str(&format!("- Total Sessions: {}\n", self.total_sessions));
        md.push_str(&format!(
            "- Total Focus Time: {:.1} minutes ({hours:.1} hours)\n",
            self.total_minutes
        ));
        md.push_str(&format!(
            "- Average Session Duration: {:.1} minutes\n",
            self.avg_minutes
        ));
        md.push_str(&format!(
            "- Longest Session: {:.1} minutes\n\n",
            self.longest_minutes
        ));

        md.push_str("## Productivity Patterns\n");
        md.push_str(&format!(
            "- Most Productive Day: {}\n",
            self.most_productive_day
        ));
        md.push_str(&format!(
            "- Most Productive Hour: {}:00\n\n",
            self.most_productive_hour
        ));

        md.push_str("## Common Focus Areas\n");
        if self.keywords.is_empty() {
            md.push_str("No recurring keywords in your task names yet.\n");
        } else {
            md.push_str(&format!(
                "Top {} keywords in your task names:\n",
                self.keywords.len()
            ));
            for k in &self.keywords {
                md.push_str(&format!("- {}: {} occurrences\n", k.word, k.count));
            }
        }

        md.push_str("\n## Recent Trend\n");
        md.push_str(&format!(
            "Your recent sessions are {} in duration compared to your overall average.\n",
            self.trend.as_str()
        ));
        md.push_str(&format!(
            "Recent average: {:.1} minutes\n",
            self.recent_avg_minutes
        ));
        md.push_str(&format!(
            "Overall average: {:.1} minutes\n\n",
            self.avg_minutes
        ));

        md.push_str("## Recommendations\n");
        md.push_str(&format!(
            "1. Schedule important work around your most productive hour ({}:00)\n",
            self.most_productive_hour
        ));
        md.push_str(&format!(
            "2. {} is your most productive day; plan demanding tasks for it\n",
            self.most_productive_day
        ));
        md.push_str(&format!(
            "3. Your sessions average {:.1} minutes; check whether that length suits your work\n",
            self.avg_minutes
        ));

        md
    }
}
