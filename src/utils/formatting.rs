//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Minutes as hours with one decimal: `90.0` → `"1.5"`.
pub fn fmt_hours(minutes: f64) -> String {
    format!("{:.1}", minutes / 60.0)
}

/// Right-pad to a display width (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{s}", " ".repeat(width.saturating_sub(w)))
}

/// Escape text for HTML and SVG content and attribute values.
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
