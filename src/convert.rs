//! Conversion pipeline: uploaded manuscript bytes in, rendered artifacts out.
//!
//! This is the boundary exposed to the presentation layer. Everything is
//! request-scoped: the pipeline builds one [`Book`] per request and renders
//! each requested format independently from that shared, read-only book.

use std::io::Cursor;

use tracing::{debug, info};

use crate::book::{Book, Metadata, Options};
use crate::error::Result;
use crate::export::{DocxExporter, EpubExporter, Exporter, Format, PdfExporter};
use crate::import::{self, ManuscriptKind};

/// One conversion request: metadata, options, manuscript bytes, and the set
/// of formats to render.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub metadata: Metadata,
    pub options: Options,
    pub manuscript: Vec<u8>,
    pub kind: ManuscriptKind,
    pub formats: Vec<Format>,
}

/// A rendered output: named byte buffer plus its format tag.
///
/// Produced once per requested format per request and handed to the delivery
/// collaborator; nothing is persisted beyond the request.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub name: String,
    pub format: Format,
    pub data: Vec<u8>,
}

/// Outcome of one format's render within a request.
///
/// Renders are isolated: one format failing does not block the others, so
/// the pipeline reports an outcome per requested format.
pub type RenderOutcome = (Format, Result<RenderedArtifact>);

/// Decode the manuscript, assemble the [`Book`], and render every requested
/// format.
///
/// Fails fast on decode or validation errors (no renderer runs). Render
/// failures are isolated per format: each entry of the returned vector
/// carries that format's artifact or its error, in request order.
pub fn convert(request: &ConversionRequest) -> Result<Vec<RenderOutcome>> {
    let text = import::decode(&request.manuscript, request.kind)?;
    let book = Book::assemble(request.metadata.clone(), request.options, &text)?;
    info!(
        title = %book.metadata.title,
        chapters = book.chapters.len(),
        formats = request.formats.len(),
        "assembled book"
    );

    let outcomes = request
        .formats
        .iter()
        .map(|&format| (format, render(&book, format)))
        .collect();
    Ok(outcomes)
}

/// Render a single format from an assembled [`Book`].
pub fn render(book: &Book, format: Format) -> Result<RenderedArtifact> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        Format::Docx => DocxExporter::new().export(book, &mut buffer)?,
        Format::Pdf => PdfExporter::new().export(book, &mut buffer)?,
        Format::Epub => EpubExporter::new().export(book, &mut buffer)?,
    }

    let data = buffer.into_inner();
    debug!(format = ?format, bytes = data.len(), "rendered artifact");
    Ok(RenderedArtifact {
        name: format.artifact_name().to_string(),
        format,
        data,
    })
}
