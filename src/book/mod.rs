use crate::error::{Error, Result};
use crate::segment::segment;

/// Default language tag embedded in rendered output.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Intermediate representation of a formatted book.
/// Format-agnostic structure that the DOCX, PDF, and EPUB renderers consume.
#[derive(Debug, Clone)]
pub struct Book {
    pub metadata: Metadata,
    pub options: Options,
    pub chapters: Vec<Chapter>,
}

/// Book metadata supplied by the author.
///
/// `trim_size` is advisory: it is carried through for downstream tooling but
/// does not affect page geometry in any renderer.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub subtitle: Option<String>,
    pub trim_size: TrimSize,
    pub language: String,
}

/// Print trim size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimSize {
    #[default]
    Size6x9,
    Size5_5x8_5,
    Size8_5x11,
}

/// One chapter of the book: a title line plus body paragraphs.
///
/// The chapter's ordinal is its 1-based position in [`Book::chapters`]; the
/// sequence preserves source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub body: Vec<String>,
}

/// Independent formatting switches. Any combination is valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Emit a numbered table of contents (DOCX renderer).
    pub include_toc: bool,
    /// Emit title/subtitle/author front matter (DOCX renderer).
    pub include_front_matter: bool,
    /// Collapse doubled paragraph separators before segmentation.
    pub normalize: bool,
}

impl Book {
    /// Assemble a [`Book`] from manuscript text.
    ///
    /// Validates required metadata, then segments the text into chapters.
    /// Pure: the same inputs always produce the same book.
    ///
    /// # Example
    ///
    /// ```
    /// use bindery::{Book, Metadata, Options};
    ///
    /// let metadata = Metadata::new("My Book", "Me");
    /// let book = Book::assemble(metadata, Options::default(), "Chapter One\nHello.")?;
    /// assert_eq!(book.chapters.len(), 1);
    /// # Ok::<(), bindery::Error>(())
    /// ```
    pub fn assemble(metadata: Metadata, options: Options, text: &str) -> Result<Book> {
        if metadata.title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty".into()));
        }
        if metadata.author.trim().is_empty() {
            return Err(Error::Validation("author must not be empty".into()));
        }

        let chapters = segment(text, options.normalize);
        Ok(Book {
            metadata,
            options,
            chapters,
        })
    }
}

impl Metadata {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            subtitle: None,
            trim_size: TrimSize::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_trim_size(mut self, trim_size: TrimSize) -> Self {
        self.trim_size = trim_size;
        self
    }
}

impl TrimSize {
    /// Conventional label, e.g. `"6x9"`.
    pub fn label(self) -> &'static str {
        match self {
            TrimSize::Size6x9 => "6x9",
            TrimSize::Size5_5x8_5 => "5.5x8.5",
            TrimSize::Size8_5x11 => "8.5x11",
        }
    }

    /// Parse a label like `"6x9"`. Returns `None` for unknown sizes.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "6x9" => Some(TrimSize::Size6x9),
            "5.5x8.5" => Some(TrimSize::Size5_5x8_5),
            "8.5x11" => Some(TrimSize::Size8_5x11),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_rejects_empty_title() {
        let metadata = Metadata::new("", "Author");
        let err = Book::assemble(metadata, Options::default(), "text").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn assemble_rejects_blank_author() {
        let metadata = Metadata::new("Title", "   ");
        let err = Book::assemble(metadata, Options::default(), "text").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn assemble_is_deterministic() {
        let text = "Chapter One\nHello.\nChapter Two\nBye.";
        let a = Book::assemble(Metadata::new("T", "A"), Options::default(), text).unwrap();
        let b = Book::assemble(Metadata::new("T", "A"), Options::default(), text).unwrap();
        assert_eq!(a.chapters, b.chapters);
    }

    #[test]
    fn trim_size_labels_round_trip() {
        for size in [TrimSize::Size6x9, TrimSize::Size5_5x8_5, TrimSize::Size8_5x11] {
            assert_eq!(TrimSize::from_label(size.label()), Some(size));
        }
        assert_eq!(TrimSize::from_label("A4"), None);
    }
}
