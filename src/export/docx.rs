//! DOCX renderer: projects a [`Book`] into a word-processor document.
//!
//! Produces a minimal valid OPC package (zip) containing the main document
//! part plus the styles and numbering parts it references. The document XML
//! is assembled as a string, the same way the EPUB writer builds its package
//! documents.

use std::io::{Seek, Write};

use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::Book;
use crate::error::Result;
use crate::export::{Exporter, escape_xml};

/// Renders a [`Book`] as a DOCX document.
///
/// Honors `include_front_matter` (title heading, optional subtitle,
/// "by {author}", page break) and `include_toc` (a numbered "Chapter {n}"
/// list, one entry per chapter position). Chapters follow as a level-1
/// heading per title line and one paragraph per body line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExporter;

impl DocxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for DocxExporter {
    fn export<W: Write + Seek>(&self, book: &Book, writer: &mut W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS_XML.as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", options)?;
        zip.write_all(DOCUMENT_RELS_XML.as_bytes())?;

        zip.start_file("word/styles.xml", options)?;
        zip.write_all(STYLES_XML.as_bytes())?;

        zip.start_file("word/numbering.xml", options)?;
        zip.write_all(NUMBERING_XML.as_bytes())?;

        let document = generate_document(book);
        zip.start_file("word/document.xml", options)?;
        zip.write_all(document.as_bytes())?;

        zip.finish()?;
        debug!(chapters = book.chapters.len(), "rendered DOCX document");
        Ok(())
    }
}

fn generate_document(book: &Book) -> String {
    let mut xml = String::new();

    xml.push_str(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
"#,
    );

    if book.options.include_front_matter {
        push_styled_paragraph(&mut xml, "Title", &book.metadata.title);
        if let Some(ref subtitle) = book.metadata.subtitle {
            push_paragraph(&mut xml, subtitle);
        }
        push_paragraph(&mut xml, &format!("by {}", book.metadata.author));
        push_page_break(&mut xml);
    }

    if book.options.include_toc {
        push_styled_paragraph(&mut xml, "Heading1", "Table of Contents");
        for n in 1..=book.chapters.len() {
            // Entries are positional, not taken from the chapter title text.
            push_numbered_item(&mut xml, &format!("Chapter {n}"));
        }
        push_page_break(&mut xml);
    }

    for chapter in &book.chapters {
        push_styled_paragraph(&mut xml, "Heading1", &chapter.title);
        for paragraph in &chapter.body {
            push_paragraph(&mut xml, paragraph);
        }
    }

    xml.push_str("  </w:body>\n</w:document>\n");
    xml
}

fn push_styled_paragraph(xml: &mut String, style: &str, text: &str) {
    xml.push_str(&format!(
        "    <w:p><w:pPr><w:pStyle w:val=\"{}\"/></w:pPr><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>\n",
        style,
        escape_xml(text)
    ));
}

fn push_paragraph(xml: &mut String, text: &str) {
    xml.push_str(&format!(
        "    <w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>\n",
        escape_xml(text)
    ));
}

fn push_numbered_item(xml: &mut String, text: &str) {
    xml.push_str(&format!(
        "    <w:p><w:pPr><w:pStyle w:val=\"ListNumber\"/><w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr></w:pPr><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>\n",
        escape_xml(text)
    ));
}

fn push_page_break(xml: &mut String) {
    xml.push_str("    <w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>\n");
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:rPr><w:sz w:val="24"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:after="240"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="56"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="32"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListNumber">
    <w:name w:val="List Number"/>
    <w:basedOn w:val="Normal"/>
  </w:style>
</w:styles>"#;

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="decimal"/>
      <w:lvlText w:val="%1."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="1">
    <w:abstractNumId w:val="0"/>
  </w:num>
</w:numbering>"#;
