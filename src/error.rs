//! Error types for bindery operations.

use thiserror::Error;

/// Errors that can occur while decoding a manuscript or rendering a book.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid DOCX manuscript: {0}")]
    InvalidDocx(String),
}

pub type Result<T> = std::result::Result<T, Error>;
