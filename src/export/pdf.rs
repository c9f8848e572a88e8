use crate::core::calculator::layout::{DayColumn, WeekLayout};
use crate::errors::AppResult;
use crate::export::TimelineRenderer;
use crate::export::frame::Frame;
use crate::utils::date::{hour_label, short_date, week_range_label};
use crate::utils::formatting::fmt_hours;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.52;

const TEXT_RGB: (f32, f32, f32) = (0.17, 0.24, 0.31);

/// Encode text for the WinAnsiEncoding base font.
///
/// Latin-1 maps one to one; the typographic characters of the 0x80..0x9F
/// block get their WinAnsi code. Anything else becomes `?`.
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => b'?',
        })
        .collect()
}

/// Single-page PDF writer working in top-down frame coordinates.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
}

impl PdfManager {
    pub fn new(page_w: f32, page_h: f32) -> Self {
        let mut pdf = Pdf::new();

        // object ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            page_w,
            page_h,
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a page and return its content stream.
    pub fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.current_content_id = Some(content_id);

        Content::new()
    }

    pub fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// PDF origin is bottom-left; frame y grows downwards.
    fn flip(&self, y: f32) -> f32 {
        self.page_h - y
    }

    pub fn fill_rect(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rgb: (f32, f32, f32),
    ) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, self.flip(y + h), w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    pub fn stroke_rect(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rgb: (f32, f32, f32),
    ) {
        content.save_state();
        content.set_stroke_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, self.flip(y + h), w, h);
        content.stroke();
        content.restore_state();
    }

    /// Text with its baseline at frame `y`.
    pub fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.save_state();
        content.set_fill_rgb(TEXT_RGB.0, TEXT_RGB.1, TEXT_RGB.2);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, self.flip(y)]);
        content.show(Str(&win_ansi_bytes(text)));
        content.end_text();
        content.restore_state();
    }

    pub fn draw_text_centered(
        &self,
        content: &mut Content,
        cx: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        let width = text.chars().count() as f32 * size * GLYPH_WIDTH;
        self.draw_text(content, cx - width / 2.0, y, size, text);
    }

    pub fn draw_text_right(
        &self,
        content: &mut Content,
        right: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        let width = text.chars().count() as f32 * size * GLYPH_WIDTH;
        self.draw_text(content, right - width, y, size, text);
    }

    /// Build Catalog + Pages once and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.clone());
        }
        self.pdf.finish()
    }
}

/// Landscape one-page PDF timeline.
#[derive(Debug, Clone)]
pub struct PdfTimeline {
    pub frame: Frame,
}

impl Default for PdfTimeline {
    fn default() -> Self {
        // A4 landscape, points
        Self {
            frame: Frame::new(842.0, 595.0),
        }
    }
}

impl TimelineRenderer for PdfTimeline {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &WeekLayout) -> AppResult<Vec<u8>> {
        let f = &self.frame;
        let mut pdf = PdfManager::new(f.width as f32, f.height as f32);
        let mut content = pdf.new_page();

        pdf.draw_text_centered(
            &mut content,
            (f.width / 2.0) as f32,
            (f.margin + f.title_height * 0.6) as f32,
            16.0,
            &week_range_label(layout.week_start, layout.week_end()),
        );

        for hour in layout.axis.hour_ticks() {
            let y = f.hour_y(&layout.axis, f64::from(hour));
            pdf.draw_text_right(
                &mut content,
                (f.margin + f.gutter - 6.0) as f32,
                (y + 3.0) as f32,
                8.0,
                &hour_label(hour),
            );
        }

        for day in &layout.days {
            self.draw_day(&pdf, &mut content, layout, day);
        }

        pdf.finalize_page(content);
        Ok(pdf.finish())
    }
}

impl PdfTimeline {
    fn draw_day(
        &self,
        pdf: &PdfManager,
        content: &mut Content,
        layout: &WeekLayout,
        day: &DayColumn,
    ) {
        let f = &self.frame;
        let x = f.column_x(day.day_of_week) as f32;
        let w = f.column_width() as f32;
        let cx = x + w / 2.0;

        pdf.draw_text_centered(content, cx, (f.plot_top() - 14.0) as f32, 10.0, day.name());
        let date = short_date(day.date);
        pdf.draw_text_centered(content, cx, (f.plot_top() - 4.0) as f32, 7.0, &date);

        let top = f.plot_top() as f32;
        let h = f.plot_height() as f32;
        pdf.fill_rect(content, x, top, w, h, (0.98, 0.99, 0.98));
        pdf.stroke_rect(content, x, top, w, h, (0.89, 0.92, 0.91));

        for session in &day.sessions {
            let Some(block) = f.block(&layout.axis, day.day_of_week, session) else {
                continue;
            };
            pdf.fill_rect(
                content,
                block.x as f32,
                block.y as f32,
                block.width as f32,
                block.height as f32,
                session.color.unit(),
            );
            let (bx, by) = block.center();
            let label = &session.display_label;
            pdf.draw_text_centered(content, bx as f32, (by + 3.0) as f32, 7.5, label);
        }

        pdf.draw_text_centered(
            content,
            cx,
            (f.plot_bottom() + f.footer_height * 0.6) as f32,
            10.0,
            &format!("{}h", fmt_hours(day.total_minutes)),
        );
    }
}
