use crate::core::report::{ReportSummary, WeekEntry};
use crate::export::ArtifactFormat;
use crate::export::charts::ChartFile;
use crate::utils::date::week_range_label;
use crate::utils::formatting::{escape_markup, fmt_hours};
use chrono::NaiveDateTime;

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
           background: linear-gradient(135deg, #a8e6cf 0%, #d7b5d8 50%, #f1c0e8 100%);
           min-height: 100vh; padding: 20px; }
    .container { max-width: 1200px; margin: 0 auto; }
    .header { background: linear-gradient(135deg, #a8e6cf 0%, #d7b5d8 100%); color: white;
              padding: 30px; border-radius: 20px; margin-bottom: 30px; text-align: center; }
    .header h1 { font-size: 2.5em; font-weight: 300; margin-bottom: 10px; }
    .section, .overview { background: white; padding: 30px; border-radius: 20px; margin-bottom: 30px; }
    .section h2, .overview h2 { color: #2c3e50; margin-bottom: 20px; font-weight: 500; }
    .narrative { white-space: pre-wrap; font-family: inherit; color: #2c3e50; line-height: 1.5; }
    .stats { display: flex; justify-content: center; gap: 25px; flex-wrap: wrap; }
    .stat-box { background: linear-gradient(135deg, #b8f2e6 0%, #eebbee 100%); color: #2c3e50;
                padding: 20px; border-radius: 15px; min-width: 140px; text-align: center; }
    .stat-value { font-size: 2.2em; font-weight: 600; margin-bottom: 8px; color: #1a1a1a; }
    .stat-label { font-size: 0.95em; color: #4a5568; font-weight: 500; }
    .week-section { background: white; margin-bottom: 30px; border-radius: 20px; overflow: hidden; }
    .week-header { background: linear-gradient(135deg, #a8e6cf 0%, #d7b5d8 100%); color: white;
                   padding: 25px 30px; font-size: 1.4em; font-weight: 500; }
    .timeline { padding: 30px; background: #fafcfb; }
    .timeline img, .timeline object { width: 100%; border-radius: 10px; display: block; }
    .timeline object { height: 640px; }
    .charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 20px; }
    .chart img { width: 100%; border-radius: 10px; display: block; }
    .chart h3 { color: #4a5568; font-weight: 500; margin-bottom: 10px; }
    .week-summary { padding: 30px; background: linear-gradient(135deg, #f0f9f6 0%, #f7f0f9 100%); }
"#;

/// The HTML page that indexes every week's artifact.
pub struct IndexDocument<'a> {
    pub generated_at: NaiveDateTime,
    pub summary: &'a ReportSummary,
    pub weeks: &'a [WeekEntry],
    pub format: ArtifactFormat,
    pub insights: Option<&'a str>,
    pub ai_analysis: Option<&'a str>,
    /// Analysis charts written next to the index; empty hides the section
    pub charts: &'a [ChartFile],
}

impl IndexDocument<'_> {
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str("  <title>Weekly Focus Session Timeline Report</title>\n");
        html.push_str(&format!("  <style>{STYLE}  </style>\n"));
        html.push_str("</head>\n<body>\n<div class=\"container\">\n");

        html.push_str(&format!(
            "  <div class=\"header\">\n    <h1>Weekly Focus Timeline</h1>\n    <p>Generated on {}</p>\n  </div>\n",
            self.generated_at.format("%B %d, %Y at %H:%M")
        ));

        self.push_overview(&mut html);

        if let Some(text) = self.ai_analysis {
            push_narrative(&mut html, "ai-analysis", "AI Analysis", text);
        }
        if let Some(text) = self.insights {
            push_narrative(&mut html, "key-insights", "Key Insights", text);
        }

        self.push_charts(&mut html);

        for week in self.weeks {
            self.push_week(&mut html, week);
        }

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    fn push_overview(&self, html: &mut String) {
        html.push_str("  <div class=\"overview\" id=\"overview\">\n    <h2>Overview Statistics</h2>\n");

        match self.summary {
            ReportSummary::NoData => {
                html.push_str("    <p class=\"no-data\">No data: no focus sessions were tracked.</p>\n");
            }
            ReportSummary::Tracked(t) => {
                html.push_str("    <div class=\"stats\">\n");
                push_stat(html, &t.weeks_tracked.to_string(), "Weeks Tracked");
                push_stat(html, &t.total_sessions.to_string(), "Total Sessions");
                push_stat(html, &format!("{:.0}", t.total_hours), "Total Hours");
                push_stat(html, &format!("{:.0} min", t.avg_session_minutes), "Avg Session");
                push_stat(html, &format!("{:.1}", t.avg_hours_per_week), "Avg Hours/Week");
                html.push_str("    </div>\n");
            }
        }

        html.push_str("  </div>\n");
    }

    fn push_charts(&self, html: &mut String) {
        if self.charts.is_empty() {
            return;
        }

        html.push_str("  <div class=\"section\" id=\"visualizations\">\n    <h2>Visualizations</h2>\n");
        html.push_str("    <div class=\"charts\">\n");
        for chart in self.charts {
            let title = escape_markup(chart.title);
            html.push_str(&format!(
                "      <div class=\"chart\"><h3>{title}</h3><img src=\"{}\" alt=\"{title}\"></div>\n",
                escape_markup(chart.file_name)
            ));
        }
        html.push_str("    </div>\n  </div>\n");
    }

    fn push_week(&self, html: &mut String, week: &WeekEntry) {
        let file = escape_markup(&week.file_name);

        html.push_str(&format!(
            "  <div class=\"week-section\" id=\"week-{}\">\n",
            week.week_start.format("%Y-%m-%d")
        ));
        html.push_str(&format!(
            "    <div class=\"week-header\">{}</div>\n",
            escape_markup(&week_range_label(week.week_start, week.week_end))
        ));

        html.push_str("    <div class=\"timeline\">\n");
        match self.format {
            ArtifactFormat::Svg => html.push_str(&format!(
                "      <img src=\"{file}\" alt=\"Weekly Timeline\" class=\"timeline-image\">\n"
            )),
            ArtifactFormat::Pdf => html.push_str(&format!(
                "      <object data=\"{file}\" type=\"application/pdf\"><a href=\"{file}\">{file}</a></object>\n"
            )),
        }
        html.push_str("    </div>\n");

        html.push_str("    <div class=\"week-summary\">\n      <div class=\"stats\">\n");
        push_stat(html, &fmt_hours(week.total_minutes), "Total Hours");
        push_stat(html, &week.session_count.to_string(), "Sessions");
        push_stat(html, &format!("{:.1}", week.avg_hours_per_day()), "Avg Hours/Day");
        html.push_str("      </div>\n    </div>\n  </div>\n");
    }
}

fn push_stat(html: &mut String, value: &str, label: &str) {
    html.push_str(&format!(
        "      <div class=\"stat-box\"><div class=\"stat-value\">{}</div><div class=\"stat-label\">{}</div></div>\n",
        escape_markup(value),
        escape_markup(label)
    ));
}

fn push_narrative(html: &mut String, id: &str, title: &str, text: &str) {
    html.push_str(&format!(
        "  <div class=\"section\" id=\"{id}\">\n    <h2>{title}</h2>\n    <pre class=\"narrative\">{}</pre>\n  </div>\n",
        escape_markup(text)
    ));
}
