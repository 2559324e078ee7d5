//! Paragraph segmentation.
//!
//! Syllabus exports are plain text with light structure: blank lines between
//! paragraphs, and headings or list items that start on a fresh line without a
//! blank line before them:
//!
//! ```text
//! Network Mapping                      <- heading
//! Candidates will be able to ...
//! 1. Use of ICMP                        <- numbered item
//! • Ping sweeps                         <- bullet
//! ```
//!
//! A boundary is therefore either a blank line (`\n`, any whitespace, `\n`)
//! or a single newline directly followed by one of:
//!
//! - a capitalised word, a space and another capital (`Network Mapping`)
//! - a number and a period (`12.`)
//! - a bullet (`•`)
//!
//! Blank-line boundaries are consumed. Heading boundaries consume only the
//! newline so the heading stays at the start of its paragraph.
//!
//! ## Oversized Paragraphs
//!
//! A single paragraph longer than the chunk ceiling is broken at sentence
//! boundaries (UAX #29), and a sentence still too long is cut at character
//! boundaries. The pieces tile the paragraph exactly, so no text is lost.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::char_len;

static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n|\n(?:[A-Z][a-z]+ [A-Z]|\d+\.|•)")
        .expect("paragraph boundary regex is valid")
});

/// Split text into trimmed, non-empty paragraphs.
///
/// ```rust
/// use syllabus_chunks::paragraph::paragraphs;
///
/// let text = "Intro line.\n\nSecond paragraph.\nNetwork Mapping\n1. Ping";
/// assert_eq!(
///     paragraphs(text),
///     vec!["Intro line.", "Second paragraph.", "Network Mapping", "1. Ping"]
/// );
/// ```
#[must_use]
pub fn paragraphs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for m in BOUNDARY.find_iter(text) {
        push_trimmed(&mut out, &text[start..m.start()]);
        start = if m.as_str().ends_with('\n') {
            m.end()
        } else {
            // Heading boundary: drop the newline, keep the heading.
            m.start() + 1
        };
    }
    push_trimmed(&mut out, &text[start..]);

    out
}

/// Split text into paragraphs no longer than `max` chars.
///
/// Paragraphs within `max` are returned untouched; longer ones are broken up
/// as described in the module docs.
#[must_use]
pub fn bounded_paragraphs(text: &str, max: usize) -> Vec<&str> {
    let mut out = Vec::new();
    for para in paragraphs(text) {
        if char_len(para) <= max {
            out.push(para);
        } else {
            out.extend(split_sentences(para, max));
        }
    }
    out
}

/// The last `n` chars of `text` (all of it if shorter).
#[must_use]
pub fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

/// Greedily group sentences into runs of at most `max` chars.
fn split_sentences(para: &str, max: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut run_start = 0;
    let mut run_len = 0;
    let mut offset = 0;

    for sentence in para.split_sentence_bounds() {
        let len = char_len(sentence);

        if run_len > 0 && run_len + len > max {
            push_trimmed(&mut out, &para[run_start..offset]);
            run_start = offset;
            run_len = 0;
        }

        if len > max {
            // Nothing smaller than a sentence to break on.
            out.extend(force_split(sentence, max));
            run_start = offset + sentence.len();
        } else {
            run_len += len;
        }
        offset += sentence.len();
    }
    push_trimmed(&mut out, &para[run_start..]);

    out
}

/// Cut at char boundaries every `max` chars.
fn force_split(text: &str, max: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max {
            push_trimmed(&mut out, &text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    push_trimmed(&mut out, &text[start..]);

    out
}
