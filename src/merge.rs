//! Coalescing undersized chunks.
//!
//! The section chunker hands short sections through unchanged. This pass
//! walks the full ordered stream and folds them into their neighbours:
//!
//! ```text
//! stream:  [B1: 50] [B1: 60] [B2: 1500] [B3: 80]
//!             \______/
//!              merge (same section, 50 + 2 + 60 <= max)
//! output:  [B1: 112] [B2: 1500]          B3 dropped (< min, nothing to join)
//! ```
//!
//! A chunk that absorbed at least one neighbour is kept even if it is still
//! below `min`. Only a solitary undersized chunk is dropped.
//!
//! Only chunks of the same section are merged, so a chunk never cites a
//! section it did not come from.

use tracing::warn;

use crate::{ChunkCapacity, PendingChunk, JOINER};

/// Result of the merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merged {
    /// Chunks that reached `min` or absorbed a neighbour, in stream order.
    pub chunks: Vec<PendingChunk>,
    /// Chunks that stayed below `min` with no same-section neighbour to join.
    pub dropped: Vec<PendingChunk>,
}

/// Merge consecutive same-section chunks while the result stays within `max`.
///
/// ## Example
///
/// ```rust
/// use syllabus_chunks::{merge_undersized, Appendix, ChunkCapacity, PendingChunk, Section};
///
/// let appendix = Appendix { letter: "A".into(), title: "Intro".into(), sections: vec![] };
/// let section = Section { id: "A1".into(), title: "Scope".into(), content: String::new() };
///
/// let stream = vec![
///     PendingChunk::new("x".repeat(150), &section, &appendix),
///     PendingChunk::new("y".repeat(100), &section, &appendix),
/// ];
/// let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);
///
/// assert_eq!(merged.chunks.len(), 1);
/// assert_eq!(merged.chunks[0].len(), 252);
/// ```
#[must_use]
pub fn merge_undersized(stream: Vec<PendingChunk>, capacity: &ChunkCapacity) -> Merged {
    let mut merged = Merged::default();
    // The pending chunk and whether it has absorbed a neighbour.
    let mut current: Option<(PendingChunk, bool)> = None;

    for chunk in stream {
        let Some((mut pending, absorbed)) = current.take() else {
            current = Some((chunk, false));
            continue;
        };

        if pending.section_id == chunk.section_id
            && !capacity.would_overflow(pending.len(), chunk.len())
        {
            pending.text.push_str(JOINER);
            pending.text.push_str(&chunk.text);
            current = Some((pending, true));
        } else {
            settle(pending, absorbed, capacity, &mut merged);
            current = Some((chunk, false));
        }
    }

    if let Some((pending, absorbed)) = current {
        settle(pending, absorbed, capacity, &mut merged);
    }

    merged
}

fn settle(chunk: PendingChunk, absorbed: bool, capacity: &ChunkCapacity, merged: &mut Merged) {
    if absorbed || chunk.len() >= capacity.min() {
        merged.chunks.push(chunk);
    } else {
        warn!(
            section = %chunk.section_id,
            appendix = %chunk.appendix,
            chars = chunk.len(),
            min = capacity.min(),
            "dropping undersized chunk with no neighbour to merge into"
        );
        merged.dropped.push(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Appendix, Section};

    fn pending(section_id: &str, len: usize) -> PendingChunk {
        let appendix = Appendix {
            letter: "B".into(),
            title: "Core".into(),
            sections: vec![],
        };
        let section = Section {
            id: section_id.into(),
            title: format!("Title {section_id}"),
            content: String::new(),
        };
        PendingChunk::new("a".repeat(len), &section, &appendix)
    }

    fn lens(chunks: &[PendingChunk]) -> Vec<usize> {
        chunks.iter().map(PendingChunk::len).collect()
    }

    #[test]
    fn test_empty_stream() {
        let merged = merge_undersized(vec![], &ChunkCapacity::DEFAULT);
        assert!(merged.chunks.is_empty());
        assert!(merged.dropped.is_empty());
    }

    #[test]
    fn test_small_pieces_of_one_section_merge() {
        let stream = vec![pending("B1", 150), pending("B1", 60)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);

        assert_eq!(lens(&merged.chunks), vec![212]);
        assert!(merged.dropped.is_empty());
    }

    #[test]
    fn test_merged_pieces_are_kept_below_min() {
        let stream = vec![pending("B1", 50), pending("B1", 60)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);

        assert_eq!(lens(&merged.chunks), vec![112]);
        assert!(merged.dropped.is_empty());
    }

    #[test]
    fn test_solitary_undersized_is_dropped() {
        let stream = vec![pending("B1", 50), pending("B1", 60), pending("B2", 80)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);

        assert_eq!(lens(&merged.chunks), vec![112]);
        assert_eq!(lens(&merged.dropped), vec![80]);
        assert_eq!(merged.dropped[0].section_id, "B2");
    }

    #[test]
    fn test_merge_with_lower_floor() {
        let cap = ChunkCapacity::new(100, 2000).unwrap();
        let stream = vec![pending("B1", 50), pending("B1", 60)];
        let merged = merge_undersized(stream, &cap);

        assert_eq!(lens(&merged.chunks), vec![112]);
        assert_eq!(merged.chunks[0].text, format!("{}\n\n{}", "a".repeat(50), "a".repeat(60)));
    }

    #[test]
    fn test_different_sections_never_merge() {
        let stream = vec![pending("B1", 300), pending("B2", 300), pending("B3", 50)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);

        assert_eq!(lens(&merged.chunks), vec![300, 300]);
        assert_eq!(merged.dropped.len(), 1);
        assert_eq!(merged.dropped[0].section_id, "B3");
    }

    #[test]
    fn test_respects_max() {
        let stream = vec![pending("B1", 1500), pending("B1", 499), pending("B1", 400)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);

        // 1500 + 2 + 499 > 2000, 499 + 2 + 400 fits.
        assert_eq!(lens(&merged.chunks), vec![1500, 901]);
    }

    #[test]
    fn test_large_chunks_pass_through() {
        let stream = vec![pending("B1", 1900), pending("B1", 1900)];
        let merged = merge_undersized(stream, &ChunkCapacity::DEFAULT);
        assert_eq!(lens(&merged.chunks), vec![1900, 1900]);
    }
}
