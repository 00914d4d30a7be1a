use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Extract paragraph text from a DOCX manuscript.
///
/// Reads `word/document.xml` out of the OPC container, collects the `w:t`
/// runs of each `w:p`, drops blank paragraphs, and joins the rest with
/// newlines. Styling, tables, headers, and everything else in the document
/// body are ignored; only flowing paragraph text survives.
pub fn decode_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| Error::InvalidDocx("missing word/document.xml".to_string()))?
        .read_to_string(&mut xml)?;

    extract_paragraphs(&xml)
}

fn extract_paragraphs(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_run {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                // Handle entity references like &amp; &lt; inside text runs
                if in_text_run {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        current.push_str(&resolved);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "amp" => Some("&".to_string()),
        "lt" => Some("<".to_string()),
        "gt" => Some(">".to_string()),
        "quot" => Some("\"".to_string()),
        "apos" => Some("'".to_string()),
        _ => {
            // Numeric character references: &#169; or &#xA9;
            let code = entity.strip_prefix("#x").map_or_else(
                || entity.strip_prefix('#').and_then(|d| d.parse::<u32>().ok()),
                |h| u32::from_str_radix(h, 16).ok(),
            )?;
            char::from_u32(code).map(String::from)
        }
    }
}
