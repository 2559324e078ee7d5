//! Input records and the chunk record.
//!
//! ## Input
//!
//! One appendix per JSON file:
//!
//! ```json
//! {
//!   "letter": "B",
//!   "title": "Core Technical Skills",
//!   "sections": [
//!     { "id": "B1", "title": "IP Protocols", "content": "..." }
//!   ]
//! }
//! ```
//!
//! Every field is required. Unknown fields are ignored.
//!
//! ## Output
//!
//! ```json
//! {
//!   "id": "chunk_0",
//!   "text": "...",
//!   "section_id": "B1",
//!   "section_title": "IP Protocols",
//!   "appendix": "B",
//!   "appendix_title": "Core Technical Skills"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A top-level syllabus document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appendix {
    /// Short code, usually a single letter.
    pub letter: String,
    /// Appendix title.
    pub title: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

/// A titled subdivision of an appendix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier, unique within the corpus (e.g. `"B1"`).
    pub id: String,
    /// Section title.
    pub title: String,
    /// Raw text.
    pub content: String,
}

/// A chunk that has not been numbered yet.
///
/// Produced by the section chunker, possibly merged with its neighbours, and
/// finally frozen into a [`Chunk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChunk {
    /// The chunk text.
    pub text: String,
    /// Owning section id.
    pub section_id: String,
    /// Owning section title.
    pub section_title: String,
    /// Owning appendix letter.
    pub appendix: String,
    /// Owning appendix title.
    pub appendix_title: String,
}

impl PendingChunk {
    /// Create a pending chunk carrying the provenance of `section`.
    #[must_use]
    pub fn new(text: impl Into<String>, section: &Section, appendix: &Appendix) -> Self {
        Self {
            text: text.into(),
            section_id: section.id.clone(),
            section_title: section.title.clone(),
            appendix: appendix.letter.clone(),
            appendix_title: appendix.title.clone(),
        }
    }

    /// Length of the text in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        crate::char_len(&self.text)
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Freeze into a numbered chunk.
    #[must_use]
    pub fn into_chunk(self, index: usize) -> Chunk {
        Chunk {
            id: format!("chunk_{index}"),
            text: self.text,
            section_id: self.section_id,
            section_title: self.section_title,
            appendix: self.appendix,
            appendix_title: self.appendix_title,
        }
    }
}

/// A numbered unit of text ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `chunk_<index>`, reflecting final order.
    pub id: String,
    /// The chunk text.
    pub text: String,
    /// Owning section id.
    pub section_id: String,
    /// Owning section title.
    pub section_title: String,
    /// Owning appendix letter.
    pub appendix: String,
    /// Owning appendix title.
    pub appendix_title: String,
}

impl Chunk {
    /// Length of the text in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        crate::char_len(&self.text)
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ id: {}, section: {}, len: {} }}",
            self.id,
            self.section_id,
            self.len()
        )
    }
}
