//! Manuscript import: decoding uploaded bytes into plain text.
//!
//! Two manuscript kinds are accepted: plain text (UTF-8) and word-processor
//! documents (DOCX). Either way the result is a newline-joined string ready
//! for the [segmenter](crate::segment).

mod docx;
mod text;

pub use docx::decode_docx;
pub use text::decode_text;

use crate::error::Result;

/// Declared kind of an uploaded manuscript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManuscriptKind {
    /// Plain UTF-8 text (`.txt`).
    Text,
    /// Word-processor document (`.docx`).
    Document,
}

impl ManuscriptKind {
    /// Guess the kind from a file name. Anything that is not `.docx` is
    /// treated as plain text.
    pub fn from_file_name(name: &str) -> Self {
        if name.to_ascii_lowercase().ends_with(".docx") {
            ManuscriptKind::Document
        } else {
            ManuscriptKind::Text
        }
    }
}

/// Decode manuscript bytes of the declared kind into plain text.
pub fn decode(bytes: &[u8], kind: ManuscriptKind) -> Result<String> {
    match kind {
        ManuscriptKind::Text => decode_text(bytes),
        ManuscriptKind::Document => decode_docx(bytes),
    }
}
