//! Export module for rendering a [`Book`] into output formats.
//!
//! Provides the [`Exporter`] trait and one implementation per target format:
//! DOCX ([`DocxExporter`]), PDF ([`PdfExporter`]), and EPUB
//! ([`EpubExporter`]).
//!
//! Every exporter takes the book by shared reference and writes only to the
//! destination it is given, so renders for different formats within one
//! request are independent and may run in any order.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use bindery::{Book, Metadata, Options};
//! use bindery::export::{EpubExporter, Exporter};
//!
//! let book = Book::assemble(Metadata::new("T", "A"), Options::default(), "Hello.")?;
//! let mut buffer = Cursor::new(Vec::new());
//! EpubExporter::new().export(&book, &mut buffer)?;
//! # Ok::<(), bindery::Error>(())
//! ```

use std::io::{Seek, Write};

use crate::book::Book;
use crate::error::Result;

mod docx;
mod epub;
mod pdf;

pub use docx::DocxExporter;
pub use epub::EpubExporter;
pub use pdf::PdfExporter;

/// Trait for rendering books to a specific output format.
///
/// The destination can be a `std::fs::File`, a `Cursor<Vec<u8>>`, or any
/// other `Write + Seek` type.
pub trait Exporter {
    /// Render the book into the provided writer.
    fn export<W: Write + Seek>(&self, book: &Book, writer: &mut W) -> Result<()>;
}

/// Target output format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Docx,
    Pdf,
    Epub,
}

impl Format {
    /// Fixed delivery name for this format's artifact.
    pub fn artifact_name(self) -> &'static str {
        match self {
            Format::Docx => "formatted_book.docx",
            Format::Pdf => "formatted_book.pdf",
            Format::Epub => "formatted_book.epub",
        }
    }

    /// Parse a format from its extension, e.g. `"epub"`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(Format::Docx),
            "pdf" => Some(Format::Pdf),
            "epub" => Some(Format::Epub),
            _ => None,
        }
    }
}

/// Escape the five XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
