//! EPUB renderer: projects a [`Book`] into an e-reader package.
//!
//! Produces a valid EPUB 2 archive with OPF package document, NCX table of
//! contents, one XHTML fragment per chapter, and a bundled stylesheet. The
//! whole archive is assembled in memory over the provided writer; no
//! temporary files are involved.

use std::io::{Seek, Write};

use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::{Book, Chapter};
use crate::error::Result;
use crate::export::{Exporter, escape_xml};

/// Fixed placeholder package identifier.
///
/// Real publication workflows would assign an ISBN or UUID downstream; the
/// formatter itself always stamps this placeholder.
const IDENTIFIER: &str = "id123456";

/// Serif body font for the bundled stylesheet.
const STYLESHEET: &str = "BODY { font-family: Times, serif; }";

/// Renders a [`Book`] as an EPUB package.
///
/// Navigation entries are positional ("Chapter {n}") and reference every
/// chapter fragment in order. Within a fragment the chapter title line is a
/// heading and the remaining body is one undivided block; paragraph
/// boundaries are not preserved (see DESIGN.md).
#[derive(Debug, Clone, Copy, Default)]
pub struct EpubExporter;

impl EpubExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for EpubExporter {
    fn export<W: Write + Seek>(&self, book: &Book, writer: &mut W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        // mimetype must be first and uncompressed
        let options_stored =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let options_deflate =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("mimetype", options_stored)?;
        zip.write_all(b"application/epub+zip")?;

        zip.start_file("META-INF/container.xml", options_deflate)?;
        zip.write_all(CONTAINER_XML.as_bytes())?;

        let opf = generate_opf(book);
        zip.start_file("OEBPS/content.opf", options_deflate)?;
        zip.write_all(opf.as_bytes())?;

        let ncx = generate_ncx(book);
        zip.start_file("OEBPS/toc.ncx", options_deflate)?;
        zip.write_all(ncx.as_bytes())?;

        for (i, chapter) in book.chapters.iter().enumerate() {
            let fragment = generate_chapter_xhtml(chapter, i + 1);
            zip.start_file(format!("OEBPS/{}", chapter_href(i + 1)), options_deflate)?;
            zip.write_all(fragment.as_bytes())?;
        }

        zip.start_file("OEBPS/style/nav.css", options_deflate)?;
        zip.write_all(STYLESHEET.as_bytes())?;

        zip.finish()?;
        debug!(chapters = book.chapters.len(), "rendered EPUB package");
        Ok(())
    }
}

fn chapter_href(n: usize) -> String {
    format!("chap_{n}.xhtml")
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

fn generate_opf(book: &Book) -> String {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
"#,
    );

    opf.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&book.metadata.title)
    ));
    opf.push_str(&format!(
        "    <dc:identifier id=\"BookId\">{IDENTIFIER}</dc:identifier>\n"
    ));

    opf.push_str(&format!(
        "    <dc:language>{}</dc:language>\n",
        book.metadata.language
    ));

    opf.push_str(&format!(
        "    <dc:creator>{}</dc:creator>\n",
        escape_xml(&book.metadata.author)
    ));

    opf.push_str("  </metadata>\n  <manifest>\n");
    opf.push_str(
        "    <item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>\n",
    );
    for n in 1..=book.chapters.len() {
        opf.push_str(&format!(
            "    <item id=\"chap_{n}\" href=\"{}\" media-type=\"application/xhtml+xml\"/>\n",
            chapter_href(n)
        ));
    }
    opf.push_str(
        "    <item id=\"style_nav\" href=\"style/nav.css\" media-type=\"text/css\"/>\n",
    );

    opf.push_str("  </manifest>\n  <spine toc=\"ncx\">\n");
    for n in 1..=book.chapters.len() {
        opf.push_str(&format!("    <itemref idref=\"chap_{n}\"/>\n"));
    }
    opf.push_str("  </spine>\n</package>\n");
    opf
}

fn generate_ncx(book: &Book) -> String {
    let mut ncx = String::new();

    ncx.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content=""#,
    );
    ncx.push_str(IDENTIFIER);
    ncx.push_str(
        r#""/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
    <text>"#,
    );
    ncx.push_str(&escape_xml(&book.metadata.title));
    ncx.push_str(
        r#"</text>
  </docTitle>
  <navMap>
"#,
    );

    for n in 1..=book.chapters.len() {
        ncx.push_str(&format!(
            "    <navPoint id=\"navpoint-{n}\" playOrder=\"{n}\">\n      <navLabel>\n        <text>Chapter {n}</text>\n      </navLabel>\n      <content src=\"{}\"/>\n    </navPoint>\n",
            chapter_href(n)
        ));
    }

    ncx.push_str("  </navMap>\n</ncx>\n");
    ncx
}

/// One XHTML page per chapter: the title line as a heading, then the whole
/// remaining body as a single paragraph block.
fn generate_chapter_xhtml(chapter: &Chapter, n: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
  <title>Chapter {n}</title>
  <link rel="stylesheet" type="text/css" href="style/nav.css"/>
</head>
<body>
<h1>{}</h1>
<p>{}</p>
</body>
</html>
"#,
        escape_xml(&chapter.title),
        escape_xml(&chapter.body.join("\n"))
    )
}
