//! Chapter segmentation: splitting raw manuscript text into an ordered
//! sequence of [`Chapter`]s.
//!
//! Chapters are detected by scanning for the literal marker `"Chapter "`.
//! The scan is a plain substring match, not a line-anchored pattern, so the
//! token appearing mid-sentence starts a new chapter there. That quirk is
//! long-standing observed behavior and is kept as-is; see DESIGN.md.

use memchr::memmem;

use crate::book::Chapter;

/// Literal token that starts a new chapter (case-sensitive, trailing space
/// included).
pub const CHAPTER_MARKER: &str = "Chapter ";

/// Segment manuscript text into chapters.
///
/// If `normalize` is set, doubled paragraph separators are collapsed first
/// (a single non-overlapping pass, so `"\n\n\n\n"` becomes `"\n\n"`). The
/// wording of the text is never altered.
///
/// When no marker occurs, the entire text is one chapter whose title is its
/// first line. Otherwise the text is split at every marker occurrence, any
/// prefix before the first occurrence is discarded, and each fragment gets
/// the marker re-prepended after trimming surrounding whitespace.
pub fn segment(text: &str, normalize: bool) -> Vec<Chapter> {
    let normalized;
    let text = if normalize {
        normalized = text.replace("\n\n", "\n");
        normalized.as_str()
    } else {
        text
    };

    raw_segments(text)
        .iter()
        .map(|raw| split_segment(raw))
        .collect()
}

/// Split text into raw chapter segments at every marker occurrence.
fn raw_segments(text: &str) -> Vec<String> {
    let positions: Vec<usize> = memmem::find_iter(text.as_bytes(), CHAPTER_MARKER.as_bytes())
        .collect();

    if positions.is_empty() {
        return vec![text.to_string()];
    }

    let mut segments = Vec::with_capacity(positions.len());
    for (i, &start) in positions.iter().enumerate() {
        let fragment_start = start + CHAPTER_MARKER.len();
        let fragment_end = positions.get(i + 1).copied().unwrap_or(text.len());
        let fragment = text[fragment_start..fragment_end].trim();
        segments.push(format!("{CHAPTER_MARKER}{fragment}"));
    }
    segments
}

/// First line becomes the title; remaining non-blank lines become the body.
fn split_segment(raw: &str) -> Chapter {
    let mut lines = raw.split('\n');
    let title = lines.next().unwrap_or_default().to_string();
    let body = lines
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    Chapter { title, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_yields_single_chapter() {
        let chapters = segment("Just one block of text.", false);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Just one block of text.");
        assert!(chapters[0].body.is_empty());
    }

    #[test]
    fn multiline_text_without_marker_keeps_first_line_as_title() {
        let chapters = segment("First line\nSecond line\nThird line", false);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "First line");
        assert_eq!(chapters[0].body, vec!["Second line", "Third line"]);
    }

    #[test]
    fn marker_occurrences_define_chapter_count_and_order() {
        let text = "Chapter One\nHello world.\nChapter Two\nGoodbye.";
        let chapters = segment(text, false);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Chapter One");
        assert_eq!(chapters[0].body, vec!["Hello world."]);
        assert_eq!(chapters[1].title, "Chapter Two");
        assert_eq!(chapters[1].body, vec!["Goodbye."]);
    }

    #[test]
    fn prefix_before_first_marker_is_discarded() {
        let text = "Some preamble\nChapter One\nBody.";
        let chapters = segment(text, false);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Chapter One");
        assert_eq!(chapters[0].body, vec!["Body."]);
    }

    #[test]
    fn mid_sentence_marker_starts_a_chapter() {
        // Substring matching by design: "Chapter " inside prose splits there.
        let text = "Chapter One\nSee the next Chapter for details.";
        let chapters = segment(text, false);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Chapter One");
        assert_eq!(chapters[1].title, "Chapter for details.");
    }

    #[test]
    fn blank_lines_are_excluded_from_body() {
        let text = "Chapter One\nFirst.\n\n  \nSecond.";
        let chapters = segment(text, false);
        assert_eq!(chapters[0].body, vec!["First.", "Second."]);
    }

    #[test]
    fn chapter_with_no_body_is_valid() {
        let chapters = segment("Chapter One", false);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Chapter One");
        assert!(chapters[0].body.is_empty());
    }

    #[test]
    fn blank_manuscript_yields_one_empty_chapter() {
        let chapters = segment("", false);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "");
        assert!(chapters[0].body.is_empty());
    }

    #[test]
    fn normalize_collapses_doubled_separators_once() {
        let chapters = segment("Chapter One\n\nFirst.\n\n\n\nSecond.", true);
        // One pass: four newlines collapse to two, not one.
        assert_eq!(chapters[0].body, vec!["First.", "Second."]);

        let normalized = "a\n\n\n\nb".replace("\n\n", "\n");
        assert_eq!(normalized, "a\n\nb");
    }

    #[test]
    fn normalize_never_changes_wording() {
        let text = "Chapter One\n\nHello  world.";
        let chapters = segment(text, true);
        assert_eq!(chapters[0].body, vec!["Hello  world."]);
    }
}
