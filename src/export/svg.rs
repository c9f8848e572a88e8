use crate::core::calculator::layout::{DayColumn, WeekLayout};
use crate::errors::AppResult;
use crate::export::TimelineRenderer;
use crate::export::frame::Frame;
use crate::utils::date::{hour_label, short_date, week_range_label};
use crate::utils::formatting::{escape_markup, fmt_hours};

const TEXT_COLOR: &str = "#2c3e50";
const COLUMN_FILL: &str = "#fafcfb";
const COLUMN_STROKE: &str = "#e3ebe8";

/// Standalone SVG timeline, one per week.
#[derive(Debug, Clone)]
pub struct SvgTimeline {
    pub frame: Frame,
    pub font_family: String,
}

impl Default for SvgTimeline {
    fn default() -> Self {
        Self {
            frame: Frame::new(1400.0, 900.0),
            font_family: "-apple-system, 'Segoe UI', Roboto, sans-serif".to_string(),
        }
    }
}

impl TimelineRenderer for SvgTimeline {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, layout: &WeekLayout) -> AppResult<Vec<u8>> {
        Ok(self.to_svg(layout).into_bytes())
    }
}

impl SvgTimeline {
    pub fn to_svg(&self, layout: &WeekLayout) -> String {
        let f = &self.frame;
        let mut svg = String::new();

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
            w = f.width,
            h = f.height,
            font = escape_markup(&self.font_family)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            f.width, f.height
        ));
        svg.push('\n');

        // Title
        svg.push_str(&format!(
            r#"  <text x="{x}" y="{y}" font-size="22" font-weight="bold" text-anchor="middle" fill="{TEXT_COLOR}">{title}</text>"#,
            x = f.width / 2.0,
            y = f.margin + f.title_height * 0.7,
            title = escape_markup(&week_range_label(layout.week_start, layout.week_end()))
        ));
        svg.push('\n');

        // Hour labels, left of the first column only
        for hour in layout.axis.hour_ticks() {
            let y = f.hour_y(&layout.axis, f64::from(hour));
            svg.push_str(&format!(
                r#"  <text x="{x}" y="{y:.1}" font-size="12" text-anchor="end" dominant-baseline="middle" fill="{TEXT_COLOR}">{label}</text>"#,
                x = f.margin + f.gutter - 8.0,
                label = hour_label(hour)
            ));
            svg.push('\n');
        }

        for day in &layout.days {
            self.push_day(&mut svg, layout, day);
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn push_day(&self, svg: &mut String, layout: &WeekLayout, day: &DayColumn) {
        let f = &self.frame;
        let x = f.column_x(day.day_of_week);
        let w = f.column_width();
        let center = x + w / 2.0;

        svg.push_str(&format!(
            r#"  <g class="day" data-day="{dow}">"#,
            dow = day.day_of_week
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"    <text x="{center:.1}" y="{y:.1}" font-size="14" font-weight="bold" text-anchor="middle" fill="{TEXT_COLOR}">{name} <tspan font-weight="normal" font-size="11">{date}</tspan></text>"#,
            y = f.plot_top() - 10.0,
            name = day.name(),
            date = short_date(day.date)
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"    <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{COLUMN_FILL}" stroke="{COLUMN_STROKE}"/>"#,
            y = f.plot_top(),
            h = f.plot_height()
        ));
        svg.push('\n');

        for session in &day.sessions {
            let Some(block) = f.block(&layout.axis, day.day_of_week, session) else {
                continue;
            };
            let (cx, cy) = block.center();

            svg.push_str(&format!(
                r#"    <rect class="session" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="4" fill="{color}" fill-opacity="0.9"/>"#,
                x = block.x,
                y = block.y,
                w = block.width,
                h = block.height,
                color = session.color.hex()
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"    <text x="{cx:.1}" y="{cy:.1}" font-size="12" font-weight="bold" text-anchor="middle" dominant-baseline="middle" fill="black">{label}</text>"#,
                label = escape_markup(&session.display_label)
            ));
            svg.push('\n');
        }

        svg.push_str(&format!(
            r#"    <text class="total" x="{center:.1}" y="{y:.1}" font-size="14" font-weight="bold" text-anchor="middle" fill="{TEXT_COLOR}">{total}h</text>"#,
            y = f.plot_bottom() + f.footer_height * 0.7,
            total = fmt_hours(day.total_minutes)
        ));
        svg.push('\n');
        svg.push_str("  </g>\n");
    }
}
