use bindery::{Book, Format, Metadata, Options, render};

fn assemble(text: &str) -> Book {
    Book::assemble(Metadata::new("T", "A"), Options::default(), text).unwrap()
}

#[test]
fn output_is_a_pdf() {
    let artifact = render(&assemble("Chapter One\nHello."), Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
    assert_eq!(artifact.name, "formatted_book.pdf");
}

#[test]
fn front_matter_is_unconditional() {
    // Unlike the DOCX renderer, the PDF always gets a title page even with
    // front matter switched off.
    let book = Book::assemble(
        Metadata::new("T", "A").with_subtitle("Sub"),
        Options::default(),
        "Chapter One\nHello.",
    )
    .unwrap();
    assert!(!book.options.include_front_matter);
    let artifact = render(&book, Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
}

#[test]
fn non_latin_text_still_renders() {
    // Lossy by design: out-of-repertoire code points become '?' rather than
    // failing the render.
    let artifact = render(&assemble("Chapter One\n日本語のテキスト。"), Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
}

#[test]
fn long_accented_run_renders_without_error() {
    // A whitespace-free run of multi-byte Latin-1 chars longer than any
    // wrapped line must force-break cleanly, not split mid-character.
    let text = format!("Chapter One\n{}", "é".repeat(120));
    let artifact = render(&assemble(&text), Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
}

#[test]
fn long_manuscripts_render_without_error() {
    let mut text = String::from("Chapter One\n");
    for i in 0..200 {
        text.push_str(&format!("Paragraph number {i} with enough words to wrap across several lines of the fixed page layout.\n"));
    }
    let artifact = render(&assemble(&text), Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
    assert!(artifact.data.len() > 1000);
}

#[test]
fn blank_book_renders() {
    let artifact = render(&assemble(""), Format::Pdf).unwrap();
    assert!(artifact.data.starts_with(b"%PDF"));
}
