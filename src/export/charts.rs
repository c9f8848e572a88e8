//! SVG analysis charts: bar charts, line charts and the weekday × hour heatmap.

use crate::core::analytics::{HOURS_PER_DAY, HistogramBin, SessionAnalytics, TimePoint};
use crate::core::calculator::color::{ANCHOR_END, ANCHOR_START, Rgb};
use crate::core::calculator::layout::DAY_NAMES;
use crate::core::insights::Keyword;
use crate::export::fs_utils::write_file;
use crate::utils::formatting::escape_markup;
use std::path::Path;

const TEXT_COLOR: &str = "#2c3e50";
const GRID_COLOR: &str = "#e3ebe8";
const LINE_COLOR: &str = "#5b8def";
const FONT: &str = "-apple-system, 'Segoe UI', Roboto, sans-serif";

/// Heatmap scale, light yellow to deep blue.
const HEAT_LOW: Rgb = Rgb::new(0xff, 0xff, 0xd9);
const HEAT_HIGH: Rgb = Rgb::new(0x22, 0x5e, 0xa8);

const Y_TICKS: usize = 5;

/// One chart file of the analysis set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFile {
    pub file_name: &'static str,
    pub title: &'static str,
}

pub const SESSION_DURATIONS: ChartFile = ChartFile {
    file_name: "session_durations.svg",
    title: "Focus Session Durations Over Time",
};
pub const DURATION_DISTRIBUTION: ChartFile = ChartFile {
    file_name: "duration_distribution.svg",
    title: "Distribution of Session Durations",
};
pub const SESSIONS_BY_DAY: ChartFile = ChartFile {
    file_name: "sessions_by_day.svg",
    title: "Focus Sessions by Day of Week",
};
pub const SESSIONS_BY_HOUR: ChartFile = ChartFile {
    file_name: "sessions_by_hour.svg",
    title: "Focus Sessions by Hour of Day",
};
pub const KEYWORDS: ChartFile = ChartFile {
    file_name: "intention_keywords.svg",
    title: "Most Common Keywords in Task Names",
};
pub const DAY_HOUR_HEATMAP: ChartFile = ChartFile {
    file_name: "day_hour_heatmap.svg",
    title: "Focus Sessions by Day and Hour",
};
pub const AVG_DURATION_BY_DAY: ChartFile = ChartFile {
    file_name: "avg_duration_by_day.svg",
    title: "Average Session Duration by Day of Week",
};
pub const CUMULATIVE_FOCUS: ChartFile = ChartFile {
    file_name: "cumulative_focus_time.svg",
    title: "Cumulative Focus Time",
};

/// Every chart, in the order the index shows them.
pub const CHART_FILES: [ChartFile; 8] = [
    SESSION_DURATIONS,
    DURATION_DISTRIBUTION,
    SESSIONS_BY_DAY,
    SESSIONS_BY_HOUR,
    KEYWORDS,
    DAY_HOUR_HEATMAP,
    AVG_DURATION_BY_DAY,
    CUMULATIVE_FOCUS,
];

/// Render the whole set as `(file, svg)` pairs.
pub fn render_charts(a: &SessionAnalytics) -> Vec<(ChartFile, String)> {
    let weekday_bars = |values: &[f64]| -> Vec<(String, f64)> {
        DAY_NAMES
            .iter()
            .zip(values)
            .map(|(d, v)| (d.to_string(), *v))
            .collect()
    };

    let day_counts: Vec<f64> = a.sessions_by_weekday.iter().map(|c| *c as f64).collect();
    let hour_counts: Vec<(String, f64)> = a
        .sessions_by_hour
        .iter()
        .enumerate()
        .map(|(h, c)| (h.to_string(), *c as f64))
        .collect();
    let avg_by_day: Vec<f64> = a
        .avg_minutes_by_weekday
        .iter()
        .map(|v| v.unwrap_or(0.0))
        .collect();

    vec![
        (
            SESSION_DURATIONS,
            line_chart(SESSION_DURATIONS.title, "Duration (minutes)", &a.durations, true),
        ),
        (
            DURATION_DISTRIBUTION,
            bar_chart(
                DURATION_DISTRIBUTION.title,
                "Duration (minutes)",
                "Frequency",
                &histogram_bars(&a.histogram),
            ),
        ),
        (
            SESSIONS_BY_DAY,
            bar_chart(
                SESSIONS_BY_DAY.title,
                "Day of Week",
                "Number of Sessions",
                &weekday_bars(&day_counts[..]),
            ),
        ),
        (
            SESSIONS_BY_HOUR,
            bar_chart(
                SESSIONS_BY_HOUR.title,
                "Hour of Day (24-hour format)",
                "Number of Sessions",
                &hour_counts,
            ),
        ),
        (KEYWORDS, keyword_chart(KEYWORDS.title, &a.keywords)),
        (
            DAY_HOUR_HEATMAP,
            heatmap(DAY_HOUR_HEATMAP.title, &a.day_hour),
        ),
        (
            AVG_DURATION_BY_DAY,
            bar_chart(
                AVG_DURATION_BY_DAY.title,
                "Day of Week",
                "Average Duration (minutes)",
                &weekday_bars(&avg_by_day[..]),
            ),
        ),
        (
            CUMULATIVE_FOCUS,
            line_chart(CUMULATIVE_FOCUS.title, "Total Minutes", &a.cumulative, false),
        ),
    ]
}

/// Write every chart into `dir`. A chart that cannot be written is logged
/// and left out of the returned list.
pub fn write_charts(dir: &Path, a: &SessionAnalytics) -> Vec<ChartFile> {
    let mut written = Vec::new();

    for (file, svg) in render_charts(a) {
        let path = dir.join(file.file_name);
        match write_file(&path, svg.as_bytes()) {
            Ok(()) => {
                log::info!("Wrote {}", path.display());
                written.push(file);
            }
            Err(e) => log::warn!("Chart {} skipped: {e}", path.display()),
        }
    }

    written
}

fn histogram_bars(bins: &[HistogramBin]) -> Vec<(String, f64)> {
    bins.iter()
        .map(|b| (format!("{:.0}", (b.lower + b.upper) / 2.0), b.count as f64))
        .collect()
}

/// Round up to 1, 2 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|m| m * magnitude >= value)
        .unwrap_or(10.0);
    step * magnitude
}

/// Plot area inside a fixed-size canvas.
struct Plot {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Plot {
    const fn new(width: f64, height: f64, left: f64) -> Self {
        Self {
            width,
            height,
            left,
            right: 30.0,
            top: 60.0,
            bottom: 70.0,
        }
    }

    fn inner_w(&self) -> f64 {
        self.width - self.left - self.right
    }

    fn inner_h(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    fn base_y(&self) -> f64 {
        self.height - self.bottom
    }

    fn y_of(&self, value: f64, max: f64) -> f64 {
        self.base_y() - value / max * self.inner_h()
    }
}

fn open_svg(svg: &mut String, plot: &Plot, title: &str) {
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = plot.width,
        h = plot.height,
        font = escape_markup(FONT)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        plot.width, plot.height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <text x="{x}" y="34" font-size="20" font-weight="bold" text-anchor="middle" fill="{TEXT_COLOR}">{title}</text>"#,
        x = plot.width / 2.0,
        title = escape_markup(title)
    ));
    svg.push('\n');
}

fn axis_labels(svg: &mut String, plot: &Plot, x_label: &str, y_label: &str) {
    svg.push_str(&format!(
        r#"  <text x="{x:.1}" y="{y:.1}" font-size="13" text-anchor="middle" fill="{TEXT_COLOR}">{label}</text>"#,
        x = plot.left + plot.inner_w() / 2.0,
        y = plot.height - 18.0,
        label = escape_markup(x_label)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <text x="18" y="{y:.1}" font-size="13" text-anchor="middle" fill="{TEXT_COLOR}" transform="rotate(-90 18 {y:.1})">{label}</text>"#,
        y = plot.top + plot.inner_h() / 2.0,
        label = escape_markup(y_label)
    ));
    svg.push('\n');
}

/// Horizontal grid lines with value labels on the left.
fn value_grid(svg: &mut String, plot: &Plot, max: f64) {
    for i in 0..=Y_TICKS {
        let value = max * i as f64 / Y_TICKS as f64;
        let y = plot.y_of(value, max);
        svg.push_str(&format!(
            r#"  <line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
            x1 = plot.left,
            x2 = plot.width - plot.right
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="end" dominant-baseline="middle" fill="{TEXT_COLOR}">{value}</text>"#,
            x = plot.left - 6.0,
            value = format_tick(value)
        ));
        svg.push('\n');
    }
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Vertical bars, coloured along the session gradient.
pub fn bar_chart(title: &str, x_label: &str, y_label: &str, bars: &[(String, f64)]) -> String {
    let plot = Plot::new(900.0, 480.0, 70.0);
    let max = nice_ceiling(bars.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    let mut svg = String::new();

    open_svg(&mut svg, &plot, title);
    value_grid(&mut svg, &plot, max);

    let slot = plot.inner_w() / bars.len().max(1) as f64;
    let bar_w = slot * 0.7;
    let last = bars.len().saturating_sub(1).max(1) as f64;

    for (i, (label, value)) in bars.iter().enumerate() {
        let x = plot.left + slot * i as f64 + (slot - bar_w) / 2.0;
        let y = plot.y_of(*value, max);
        let color = Rgb::lerp(ANCHOR_START, ANCHOR_END, i as f64 / last);

        svg.push_str(&format!(
            r#"  <rect class="bar" data-value="{value}" x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{color}" stroke="{TEXT_COLOR}" stroke-opacity="0.2"/>"#,
            h = plot.base_y() - y,
            color = color.hex()
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{cx:.1}" y="{ly:.1}" font-size="11" text-anchor="middle" fill="{TEXT_COLOR}">{label}</text>"#,
            cx = x + bar_w / 2.0,
            ly = plot.base_y() + 16.0,
            label = escape_markup(label)
        ));
        svg.push('\n');
    }

    axis_labels(&mut svg, &plot, x_label, y_label);
    svg.push_str("</svg>\n");
    svg
}

/// Horizontal bars, most frequent keyword on top.
pub fn keyword_chart(title: &str, keywords: &[Keyword]) -> String {
    let row_h = 26.0;
    let height = 130.0 + row_h * keywords.len().max(1) as f64;
    let plot = Plot::new(900.0, height, 160.0);
    let max = nice_ceiling(keywords.iter().map(|k| k.count as f64).fold(0.0, f64::max));
    let mut svg = String::new();

    open_svg(&mut svg, &plot, title);

    if keywords.is_empty() {
        svg.push_str(&format!(
            r#"  <text x="{x}" y="{y}" font-size="14" text-anchor="middle" fill="{TEXT_COLOR}">No recurring keywords</text>"#,
            x = plot.width / 2.0,
            y = plot.top + row_h
        ));
        svg.push('\n');
    }

    for (i, k) in keywords.iter().enumerate() {
        let y = plot.top + row_h * i as f64;
        let w = k.count as f64 / max * plot.inner_w();
        svg.push_str(&format!(
            r#"  <text x="{x:.1}" y="{ty:.1}" font-size="12" text-anchor="end" dominant-baseline="middle" fill="{TEXT_COLOR}">{word}</text>"#,
            x = plot.left - 8.0,
            ty = y + row_h / 2.0,
            word = escape_markup(&k.word)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect class="bar" data-value="{count}" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}"/>"#,
            count = k.count,
            x = plot.left,
            y = y + 3.0,
            h = row_h - 6.0,
            fill = ANCHOR_START.hex()
        ));
        svg.push('\n');
    }

    axis_labels(&mut svg, &plot, "Frequency", "Keyword");
    svg.push_str("</svg>\n");
    svg
}

/// Values over time; x is proportional to the start timestamp.
pub fn line_chart(title: &str, y_label: &str, points: &[TimePoint], markers: bool) -> String {
    let plot = Plot::new(900.0, 480.0, 70.0);
    let max = nice_ceiling(points.iter().map(|p| p.minutes).fold(0.0, f64::max));
    let mut svg = String::new();

    open_svg(&mut svg, &plot, title);
    value_grid(&mut svg, &plot, max);

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        axis_labels(&mut svg, &plot, "Date", y_label);
        svg.push_str("</svg>\n");
        return svg;
    };

    let span = (last.at - first.at).num_seconds() as f64;
    let x_of = |p: &TimePoint| {
        if span <= 0.0 {
            plot.left + plot.inner_w() / 2.0
        } else {
            plot.left + (p.at - first.at).num_seconds() as f64 / span * plot.inner_w()
        }
    };

    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", x_of(p), plot.y_of(p.minutes, max)))
        .collect();
    svg.push_str(&format!(
        r#"  <polyline class="series" points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2" stroke-opacity="0.8"/>"#,
        coords.join(" ")
    ));
    svg.push('\n');

    if markers {
        for p in points {
            svg.push_str(&format!(
                r#"  <circle cx="{:.1}" cy="{:.1}" r="3" fill="{LINE_COLOR}"/>"#,
                x_of(p),
                plot.y_of(p.minutes, max)
            ));
            svg.push('\n');
        }
    }

    for p in [first, last] {
        svg.push_str(&format!(
            r#"  <text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="middle" fill="{TEXT_COLOR}">{date}</text>"#,
            x = x_of(p),
            y = plot.base_y() + 16.0,
            date = p.at.format("%Y-%m-%d")
        ));
        svg.push('\n');
    }

    axis_labels(&mut svg, &plot, "Date", y_label);
    svg.push_str("</svg>\n");
    svg
}

/// Weekday rows × hour columns, each cell annotated with its count.
pub fn heatmap(title: &str, grid: &[[usize; HOURS_PER_DAY]; 7]) -> String {
    let plot = Plot::new(1100.0, 420.0, 110.0);
    let max = grid.iter().flatten().copied().max().unwrap_or(0).max(1) as f64;
    let cell_w = plot.inner_w() / HOURS_PER_DAY as f64;
    let cell_h = plot.inner_h() / 7.0;
    let mut svg = String::new();

    open_svg(&mut svg, &plot, title);

    for (dow, row) in grid.iter().enumerate() {
        let y = plot.top + cell_h * dow as f64;
        svg.push_str(&format!(
            r#"  <text x="{x:.1}" y="{ty:.1}" font-size="12" text-anchor="end" dominant-baseline="middle" fill="{TEXT_COLOR}">{day}</text>"#,
            x = plot.left - 8.0,
            ty = y + cell_h / 2.0,
            day = DAY_NAMES[dow]
        ));
        svg.push('\n');

        for (hour, count) in row.iter().enumerate() {
            let x = plot.left + cell_w * hour as f64;
            let t = *count as f64 / max;
            let fill = Rgb::lerp(HEAT_LOW, HEAT_HIGH, t);
            let ink = if t > 0.5 { "white" } else { TEXT_COLOR };

            svg.push_str(&format!(
                r#"  <rect class="cell" data-count="{count}" x="{x:.1}" y="{y:.1}" width="{cell_w:.1}" height="{cell_h:.1}" fill="{fill}" stroke="white" stroke-width="0.5"/>"#,
                fill = fill.hex()
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"  <text x="{cx:.1}" y="{cy:.1}" font-size="10" text-anchor="middle" dominant-baseline="middle" fill="{ink}">{count}</text>"#,
                cx = x + cell_w / 2.0,
                cy = y + cell_h / 2.0
            ));
            svg.push('\n');
        }
    }

    for hour in 0..HOURS_PER_DAY {
        svg.push_str(&format!(
            r#"  <text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="middle" fill="{TEXT_COLOR}">{hour}</text>"#,
            x = plot.left + cell_w * (hour as f64 + 0.5),
            y = plot.base_y() + 16.0
        ));
        svg.push('\n');
    }

    axis_labels(&mut svg, &plot, "Hour of Day", "Day of Week");
    svg.push_str("</svg>\n");
    svg
}
