//! # syllabus-chunks
//!
//! Re-segment syllabus appendices into retrieval-sized chunks.
//!
//! ## The Problem
//!
//! A syllabus export is already split into appendices and sections, but the
//! sections are wildly uneven. Some are one line ("[To be added]"), some are
//! a short definition, some run for several pages. Embedding them as-is gives
//! a retrieval index where a one-line stub competes with a five-page section.
//!
//! ## The Pass
//!
//! ```text
//! appendix A ─┬─ A1 "[placeholder]"      ──▶ skipped
//!             ├─ A2  1500 chars          ──▶ [A2]
//!             ├─ A3  5000 chars          ──▶ [A3 #1][A3 #2][A3 #3]   (overlapping)
//!             └─ A4    80 chars          ──▶ merged with A4 neighbours or dropped
//! appendix B ─── ...
//!
//!                 ──▶ chunk_0, chunk_1, ...  + statistics
//! ```
//!
//! 1. **Filter**: short placeholder markers are discarded ([`PlaceholderFilter`]).
//! 2. **Chunk**: sections within bounds are kept verbatim; oversized ones are
//!    split at paragraph boundaries with overlap ([`SectionChunker`]).
//! 3. **Merge**: adjacent undersized pieces of the same section are joined
//!    ([`merge_undersized`]).
//! 4. **Number**: `chunk_0`, `chunk_1`, ... in appendix, section, split order.
//!
//! Bounds live in [`ChunkCapacity`]: `min` 200, `max` 2000, `overlap` 200
//! characters by default.
//!
//! ## Quick Start
//!
//! ```rust
//! use syllabus_chunks::{Appendix, Pipeline, Section};
//!
//! let appendix = Appendix {
//!     letter: "A".into(),
//!     title: "Soft Skills".into(),
//!     sections: vec![
//!         Section {
//!             id: "A1".into(),
//!             title: "Engagement Lifecycle".into(),
//!             content: "Scoping, rules of engagement and reporting. ".repeat(10),
//!         },
//!         Section {
//!             id: "A2".into(),
//!             title: "Law".into(),
//!             content: "[to be added]".into(),
//!         },
//!     ],
//! };
//!
//! let report = Pipeline::default().run(&[appendix]);
//! assert_eq!(report.chunks.len(), 1);
//! assert_eq!(report.chunks[0].id, "chunk_0");
//! assert_eq!(report.placeholders, vec!["A2"]);
//! ```

mod capacity;
mod error;
mod merge;
mod model;
pub mod paragraph;
mod pipeline;
mod placeholder;
mod section;
mod stats;

pub use capacity::{ChunkCapacity, ChunkCapacityError};
pub use error::{Error, Result};
pub use merge::{merge_undersized, Merged};
pub use model::{Appendix, Chunk, PendingChunk, Section};
pub use pipeline::{
    load_appendices, load_appendix, write_chunks, AppendixSummary, Pipeline, RunReport,
    SectionSummary,
};
pub use placeholder::{PlaceholderFilter, DEFAULT_MAX_PLACEHOLDER_LEN, DEFAULT_PATTERNS};
pub use section::{SectionChunker, SectionSplit};
pub use stats::Stats;

/// Separator placed between joined paragraphs and merged pieces.
pub const JOINER: &str = "\n\n";

/// Length of `text` in chars. All size bounds are measured this way.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// A text chunking strategy.
///
/// ```rust
/// use syllabus_chunks::{Chunker, SectionChunker};
///
/// fn count_pieces(chunker: &dyn Chunker, text: &str) -> usize {
///     chunker.chunk(text).len()
/// }
///
/// assert_eq!(count_pieces(&SectionChunker::default(), "[placeholder]"), 0);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into pieces, in source order.
    fn chunk(&self, text: &str) -> Vec<String>;

    /// Estimate the number of pieces for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 1000).max(1)
    }
}
