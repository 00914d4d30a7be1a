//! # bindery
//!
//! A small library for turning a raw manuscript into a publication-ready
//! multi-chapter book in DOCX, PDF, and EPUB formats.
//!
//! ## Features
//!
//! - Segment plain prose into chapters at `"Chapter "` markers
//! - Decode `.txt` (UTF-8) and `.docx` manuscripts
//! - Render a word-processor document with front matter and a numbered TOC
//! - Render a fixed-layout print PDF with per-chapter page breaks
//! - Render an EPUB 2 package with navigation and a bundled stylesheet
//!
//! ## Quick Start
//!
//! ```
//! use bindery::{Book, Metadata, Options, Format, render};
//!
//! let metadata = Metadata::new("My Book", "Author Name");
//! let options = Options { include_toc: true, include_front_matter: true, normalize: false };
//! let book = Book::assemble(metadata, options, "Chapter One\nIt begins.")?;
//!
//! let epub = render(&book, Format::Epub)?;
//! assert_eq!(epub.name, "formatted_book.epub");
//! # Ok::<(), bindery::Error>(())
//! ```
//!
//! ## Conversion requests
//!
//! The [`convert`] entry point covers the whole pipeline — decode the
//! uploaded bytes, assemble the [`Book`], render each requested format —
//! with per-format isolation: one format failing does not block the others.

pub mod book;
pub mod convert;
pub mod error;
pub mod export;
pub mod import;
pub mod segment;

pub use book::{Book, Chapter, Metadata, Options, TrimSize};
pub use convert::{ConversionRequest, RenderOutcome, RenderedArtifact, convert, render};
pub use error::{Error, Result};
pub use export::{DocxExporter, EpubExporter, Exporter, Format, PdfExporter};
pub use import::ManuscriptKind;
