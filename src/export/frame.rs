use crate::core::calculator::axis::AxisRange;
use crate::core::calculator::layout::{DAYS_PER_WEEK, RenderedSession};

/// Page geometry shared by the SVG and PDF timelines.
///
/// Coordinates are top-down (y grows downwards); the PDF renderer flips them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Week title band
    pub title_height: f64,
    /// Day-name band above the columns
    pub header_height: f64,
    /// Hour labels left of the first column
    pub gutter: f64,
    /// Daily totals below the columns
    pub footer_height: f64,
    pub column_gap: f64,
    /// Horizontal inset of a block inside its column, as a fraction
    pub block_inset: f64,
}

/// A session block in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BlockRect {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: 24.0,
            title_height: 40.0,
            header_height: 28.0,
            gutter: 48.0,
            footer_height: 32.0,
            column_gap: 10.0,
            block_inset: 0.05,
        }
    }

    pub fn plot_top(&self) -> f64 {
        self.margin + self.title_height + self.header_height
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin - self.footer_height
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn column_width(&self) -> f64 {
        let days = f64::from(DAYS_PER_WEEK);
        let usable = self.width - 2.0 * self.margin - self.gutter - (days - 1.0) * self.column_gap;
        (usable / days).max(0.0)
    }

    pub fn column_x(&self, day_of_week: u8) -> f64 {
        self.margin + self.gutter + f64::from(day_of_week) * (self.column_width() + self.column_gap)
    }

    /// Vertical position of an hour-of-day, clamped to the axis window.
    pub fn hour_y(&self, axis: &AxisRange, hour: f64) -> f64 {
        let span = axis.span_hours();
        if span <= 0.0 {
            return self.plot_top();
        }
        self.plot_top() + (axis.clamp(hour) - axis.start_hour()) / span * self.plot_height()
    }

    /// Block of a session, clipped to the axis. `None` when nothing is visible.
    pub fn block(
        &self,
        axis: &AxisRange,
        day_of_week: u8,
        session: &RenderedSession,
    ) -> Option<BlockRect> {
        let top = self.hour_y(axis, session.vertical_offset);
        let bottom = self.hour_y(axis, session.bottom());
        if bottom <= top {
            return None;
        }

        let col_w = self.column_width();
        let inset = col_w * self.block_inset;
        Some(BlockRect {
            x: self.column_x(day_of_week) + inset,
            y: top,
            width: col_w - 2.0 * inset,
            height: bottom - top,
        })
    }
}
