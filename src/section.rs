//! Per-section chunking.
//!
//! ## The Algorithm
//!
//! ```text
//! placeholder?          -> nothing
//! whitespace only?      -> nothing
//! len < min             -> one undersized piece (the merge pass decides)
//! min <= len <= max     -> one chunk, verbatim
//! len > max             -> paragraph split with overlap:
//!
//!   buffer = ""
//!   for para in paragraphs:
//!       if len(buffer) + 2 + len(para) > max and len(buffer) >= min:
//!           emit trim(buffer)
//!           buffer = tail(buffer, overlap) + "\n\n" + para
//!       else:
//!           buffer += "\n\n" + para
//!   remainder >= min -> emit
//!   remainder <  min -> append to the last emitted chunk
//! ```
//!
//! ## Overlap
//!
//! ```text
//! chunk 0: [p0 p1 p2 p3 p4 p5]
//!                       |--| last `overlap` chars
//! chunk 1:              [--][p6 p7 p8 p9 p10]
//! ```
//!
//! A question whose answer straddles `p5`/`p6` still finds both halves in
//! chunk 1.
//!
//! ## The Tail Fallback
//!
//! The last paragraphs of a section can leave a remainder below `min`. It is
//! glued onto the previous chunk of the same section instead of being
//! emitted alone, which may push that one chunk past `max`.

use std::cmp::Ordering;

use crate::capacity::JOINER_LEN;
use crate::paragraph::{bounded_paragraphs, tail_chars};
use crate::{char_len, ChunkCapacity, Chunker, PlaceholderFilter, JOINER};

/// Outcome of chunking one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSplit {
    /// Content is a placeholder marker.
    Placeholder,
    /// Content is empty or whitespace.
    Empty,
    /// Content is below `min`; passed on whole for merging.
    Undersized(String),
    /// Content fits; kept verbatim.
    Whole(String),
    /// Content was split into overlapping pieces.
    Split(Vec<String>),
}

impl SectionSplit {
    /// The produced texts, in order.
    #[must_use]
    pub fn into_pieces(self) -> Vec<String> {
        match self {
            Self::Placeholder | Self::Empty => vec![],
            Self::Undersized(text) | Self::Whole(text) => vec![text],
            Self::Split(pieces) => pieces,
        }
    }
}

/// Chunks section text within [`ChunkCapacity`] bounds.
///
/// ## Example
///
/// ```rust
/// use syllabus_chunks::{Chunker, SectionChunker};
///
/// let chunker = SectionChunker::default();
/// let text = "Candidates must understand ICMP message types. ".repeat(30);
/// let pieces = chunker.chunk(&text);
///
/// assert_eq!(pieces.len(), 1);
/// assert_eq!(pieces[0], text);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionChunker {
    capacity: ChunkCapacity,
    filter: PlaceholderFilter,
}

impl SectionChunker {
    /// Create a chunker with the given bounds and placeholder filter.
    #[must_use]
    pub fn new(capacity: ChunkCapacity, filter: PlaceholderFilter) -> Self {
        Self { capacity, filter }
    }

    /// Create a chunker with the given bounds and the default filter.
    #[must_use]
    pub fn with_capacity(capacity: ChunkCapacity) -> Self {
        Self::new(capacity, PlaceholderFilter::default())
    }

    /// The bounds in use.
    #[must_use]
    pub fn capacity(&self) -> &ChunkCapacity {
        &self.capacity
    }

    /// Classify and chunk one section's content.
    #[must_use]
    pub fn split(&self, text: &str) -> SectionSplit {
        if self.filter.is_placeholder(text) {
            return SectionSplit::Placeholder;
        }
        if text.trim().is_empty() {
            return SectionSplit::Empty;
        }

        match self.capacity.fits(char_len(text)) {
            Ordering::Less => SectionSplit::Undersized(text.to_string()),
            Ordering::Equal => SectionSplit::Whole(text.to_string()),
            Ordering::Greater => SectionSplit::Split(self.split_oversized(text)),
        }
    }

    fn split_oversized(&self, text: &str) -> Vec<String> {
        let cap = &self.capacity;
        let mut chunks: Vec<String> = Vec::with_capacity(self.estimate_chunks(char_len(text)));
        let mut buffer = String::new();
        let mut buffer_len = 0;

        // Leave room for the carried overlap so a flushed buffer stays within max.
        let para_max = cap
            .max()
            .saturating_sub(cap.overlap() + JOINER_LEN)
            .max(1);

        for para in bounded_paragraphs(text, para_max) {
            let para_len = char_len(para);

            if cap.would_overflow(buffer_len, para_len) && buffer_len >= cap.min() {
                chunks.push(buffer.trim().to_string());

                let overlap = if buffer_len > cap.overlap() {
                    tail_chars(&buffer, cap.overlap()).trim_start()
                } else {
                    ""
                };
                buffer = if overlap.is_empty() {
                    para.to_string()
                } else {
                    format!("{overlap}{JOINER}{para}")
                };
            } else {
                if !buffer.is_empty() {
                    buffer.push_str(JOINER);
                }
                buffer.push_str(para);
            }
            buffer_len = char_len(&buffer);
        }

        let rest = buffer.trim();
        if rest.is_empty() {
            return chunks;
        }
        if char_len(rest) >= cap.min() {
            chunks.push(rest.to_string());
        } else if let Some(last) = chunks.last_mut() {
            last.push_str(JOINER);
            last.push_str(rest);
        } else {
            chunks.push(rest.to_string());
        }

        chunks
    }
}

impl Chunker for SectionChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        self.split(text).into_pieces()
    }
}
