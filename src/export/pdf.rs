//! PDF renderer: projects a [`Book`] into a fixed-layout print document.
//!
//! Pages are built with printpdf's data-oriented API: each page is a list of
//! text ops positioned by a top-down cursor, with an automatic page break
//! once the cursor passes the bottom margin.
//!
//! Text is restricted to a single-byte Latin repertoire: every string is
//! transcoded before writing and code points outside Latin-1 are replaced
//! with `'?'`. Non-Latin scripts will visibly corrupt. This lossy transcode
//! is preserved behavior from the original tooling; widening it is a
//! documented upgrade, not a silent change (see DESIGN.md).

use std::io::{Seek, Write};

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::debug;

use crate::book::Book;
use crate::error::Result;
use crate::export::Exporter;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const SIDE_MARGIN_MM: f32 = 10.0;
const TOP_MARGIN_MM: f32 = 10.0;
/// Page-break threshold: a new page starts once the cursor enters the bottom
/// 15 mm of the page.
const BOTTOM_MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 10.0;

/// Renders a [`Book`] as a PDF.
///
/// Front matter (title, optional subtitle, author) is always emitted,
/// regardless of `include_front_matter`; `include_toc` is ignored. Both
/// asymmetries versus the DOCX renderer are preserved behavior (see
/// DESIGN.md). Each chapter starts on a new page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl PdfExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PdfExporter {
    fn export<W: Write + Seek>(&self, book: &Book, writer: &mut W) -> Result<()> {
        let mut layout = PageLayout::new();

        layout.write_block(&book.metadata.title, BuiltinFont::TimesBold, 16.0);
        if let Some(ref subtitle) = book.metadata.subtitle {
            layout.write_block(subtitle, BuiltinFont::TimesRoman, 12.0);
        }
        layout.write_block(
            &format!("by {}", book.metadata.author),
            BuiltinFont::TimesRoman,
            10.0,
        );
        layout.advance(LINE_HEIGHT_MM);

        for chapter in &book.chapters {
            layout.break_page();
            layout.write_block(&chapter.title, BuiltinFont::TimesBold, 14.0);
            for paragraph in &chapter.body {
                layout.write_block(paragraph, BuiltinFont::TimesRoman, 12.0);
            }
        }

        let substituted = layout.substituted;
        if substituted > 0 {
            debug!(substituted, "replaced code points outside Latin-1 with '?'");
        }

        let mut doc = PdfDocument::new(&book.metadata.title);
        doc.with_pages(layout.into_pages());

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        writer.write_all(&bytes)?;

        debug!(
            chapters = book.chapters.len(),
            bytes = bytes.len(),
            "rendered PDF document"
        );
        Ok(())
    }
}

/// Top-down cursor layout across automatically broken pages.
struct PageLayout {
    pages: Vec<PdfPage>,
    ops: Vec<Op>,
    /// Cursor offset from the top of the current page, in mm.
    y_mm: f32,
    /// Code points replaced by `'?'` during transcoding.
    substituted: usize,
}

impl PageLayout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y_mm: TOP_MARGIN_MM,
            substituted: 0,
        }
    }

    /// Force a new page (chapter starts).
    fn break_page(&mut self) {
        let ops = std::mem::take(&mut self.ops);
        self.pages.push(PdfPage::new(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            ops,
        ));
        self.y_mm = TOP_MARGIN_MM;
    }

    /// Move the cursor down without writing (vertical gap).
    fn advance(&mut self, height_mm: f32) {
        self.y_mm += height_mm;
    }

    /// Write a word-wrapped block of text, breaking pages on overflow.
    fn write_block(&mut self, text: &str, font: BuiltinFont, size_pt: f32) {
        self.substituted += text.chars().filter(|c| (*c as u32) >= 0x100).count();
        let text = latin1_lossy(text);
        for line in wrap_text(&text, max_chars_per_line(size_pt)) {
            if self.y_mm > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
                self.break_page();
            }

            let y_pt = Mm(PAGE_HEIGHT_MM - self.y_mm).into_pt().0;
            self.ops.push(Op::StartTextSection);
            self.ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Mm(SIDE_MARGIN_MM).into_pt(),
                    y: Pt(y_pt),
                },
            });
            self.ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(size_pt),
                font,
            });
            self.ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line)],
                font,
            });
            self.ops.push(Op::EndTextSection);

            self.y_mm += LINE_HEIGHT_MM;
        }
    }

    fn into_pages(mut self) -> Vec<PdfPage> {
        self.pages.push(PdfPage::new(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            self.ops,
        ));
        self.pages
    }
}

/// Approximate characters per line for a built-in serif face at `size_pt`.
///
/// Average glyph width is taken as half the font size in pt, converted to mm
/// (1 pt = 0.3528 mm).
fn max_chars_per_line(size_pt: f32) -> usize {
    let usable_width_mm = PAGE_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;
    let avg_char_width_mm = 0.50 * size_pt * 0.3528;
    (usable_width_mm / avg_char_width_mm) as usize
}

/// Transcode to the Latin-1 repertoire, substituting `'?'` for anything
/// outside it.
fn latin1_lossy(text: &str) -> String {
    text.chars()
        .map(|c| if (c as u32) < 0x100 { c } else { '?' })
        .collect()
}

/// Word-wrap a single block so that no line exceeds `max_width` characters.
/// Words longer than `max_width` are force-broken.
///
/// Widths are counted in chars, not bytes: accented Latin-1 characters are
/// multi-byte in UTF-8, so byte indexing would both wrap early and split
/// inside a character.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::with_capacity(max_width);
    let mut current_chars = 0;

    for word in words {
        let word_chars = word.chars().count();
        if word_chars > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            for c in word.chars() {
                current.push(c);
                current_chars += 1;
                if current_chars == max_width {
                    lines.push(std::mem::take(&mut current));
                    current_chars = 0;
                }
            }
        } else if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
