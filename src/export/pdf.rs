use crate::report::preview::{PreviewLine, ReportPreview};
use crate::utils::formatting::wrap_lines;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Characters per line at body font size before wrapping.
const WRAP_COLUMNS: usize = 90;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Latin-1 bytes for the WinAnsi base fonts; anything else becomes '?'.
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 14.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, font: &[u8], x: f32, y: f32, size: f32, text: &str) {
        let bytes = encode(text);
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            b"F2",
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            b"F1",
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Multi-page report body: bold section headers, wrapped text lines.
    pub fn write_report(&mut self, title: &str, report: &str) {
        let preview = ReportPreview::parse(report);

        // (is_header, text); blank entry between sections
        let mut rows: Vec<(bool, String)> = Vec::new();
        for (i, section) in preview.sections.iter().enumerate() {
            if i > 0 {
                rows.push((false, String::new()));
            }
            for line in &section.lines {
                match line {
                    PreviewLine::Header(h) => rows.push((true, h.clone())),
                    PreviewLine::Text(t) => rows.extend(
                        wrap_lines(t, WRAP_COLUMNS)
                            .into_iter()
                            .map(|w| (false, w)),
                    ),
                }
            }
        }

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page_idx);
        let mut y = self.page_h - self.margin - 20.0;

        for (is_header, text) in rows {
            if y < self.margin {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_header_footer(&mut content, title, page_idx);
                y = self.page_h - self.margin - 20.0;
            }

            if is_header {
                self.draw_text(&mut content, b"F2", self.margin, y, self.header_font_size, &text);
            } else if !text.is_empty() {
                self.draw_text(&mut content, b"F1", self.margin, y, self.font_size, &text);
            }
            y -= self.line_h;
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
