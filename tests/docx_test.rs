use std::io::{Cursor, Read};

use zip::ZipArchive;

use bindery::{Book, Format, Metadata, Options, render};

fn scenario_book() -> Book {
    Book::assemble(
        Metadata::new("T", "A"),
        Options {
            include_toc: true,
            include_front_matter: true,
            normalize: false,
        },
        "Chapter One\nHello world.\nChapter Two\nGoodbye.",
    )
    .unwrap()
}

fn document_xml(data: &[u8]) -> String {
    let mut archive = ZipArchive::new(Cursor::new(data.to_vec())).expect("not a zip");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("missing document part")
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn package_contains_required_parts() {
    let artifact = render(&scenario_book(), Format::Docx).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(artifact.data)).unwrap();

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/numbering.xml",
        "word/document.xml",
    ] {
        assert!(archive.by_name(part).is_ok(), "missing {part}");
    }
}

#[test]
fn scenario_output_order_matches_expectation() {
    // Manuscript with two chapters, toc on, front matter on: title heading,
    // author line, page break, TOC with positional entries, page break, then
    // the chapters with their paragraphs.
    let artifact = render(&scenario_book(), Format::Docx).unwrap();
    let xml = document_xml(&artifact.data);

    let landmarks = [
        "Title\"/></w:pPr><w:r><w:t xml:space=\"preserve\">T</w:t>",
        ">by A</w:t>",
        "<w:br w:type=\"page\"/>",
        ">Table of Contents</w:t>",
        ">Chapter 1</w:t>",
        ">Chapter 2</w:t>",
        "<w:br w:type=\"page\"/>",
        ">Chapter One</w:t>",
        ">Hello world.</w:t>",
        ">Chapter Two</w:t>",
        ">Goodbye.</w:t>",
    ];
    let mut cursor = 0;
    for landmark in landmarks {
        let at = xml[cursor..]
            .find(landmark)
            .unwrap_or_else(|| panic!("missing {landmark:?} after byte {cursor}"));
        cursor += at + landmark.len();
    }
}

#[test]
fn every_title_and_paragraph_round_trips() {
    let book = Book::assemble(
        Metadata::new("T", "A"),
        Options::default(),
        "Chapter One\nFirst paragraph.\nSecond paragraph.\nChapter Two\nThird paragraph.",
    )
    .unwrap();
    let artifact = render(&book, Format::Docx).unwrap();
    let xml = document_xml(&artifact.data);

    for chapter in &book.chapters {
        assert!(xml.contains(&chapter.title));
        for paragraph in &chapter.body {
            assert!(xml.contains(paragraph));
        }
    }
}

#[test]
fn options_off_omits_front_matter_and_toc() {
    let book = Book::assemble(
        Metadata::new("T", "A"),
        Options::default(),
        "Chapter One\nHello.",
    )
    .unwrap();
    let artifact = render(&book, Format::Docx).unwrap();
    let xml = document_xml(&artifact.data);

    assert!(!xml.contains("Table of Contents"));
    assert!(!xml.contains(">by A<"));
    assert!(!xml.contains("<w:br w:type=\"page\"/>"));
}
