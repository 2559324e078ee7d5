//! Summary statistics over the final chunk collection.

use std::collections::BTreeMap;
use std::fmt;

use crate::Chunk;

/// Aggregate sizes of a chunk collection. Reporting only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    /// Number of chunks.
    pub count: usize,
    /// Sum of chunk lengths in chars.
    pub total_chars: usize,
    /// Mean chunk length, 0 when empty.
    pub mean: f64,
    /// Shortest chunk, 0 when empty.
    pub min: usize,
    /// Longest chunk, 0 when empty.
    pub max: usize,
    /// Chunk count per appendix letter, sorted by letter.
    pub per_appendix: BTreeMap<String, usize>,
}

impl Stats {
    /// Compute statistics for `chunks`.
    #[must_use]
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let lens: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        let total_chars: usize = lens.iter().sum();

        let mut per_appendix = BTreeMap::new();
        for chunk in chunks {
            *per_appendix.entry(chunk.appendix.clone()).or_insert(0) += 1;
        }

        Self {
            count: chunks.len(),
            total_chars,
            mean: if chunks.is_empty() {
                0.0
            } else {
                total_chars as f64 / chunks.len() as f64
            },
            min: lens.iter().copied().min().unwrap_or(0),
            max: lens.iter().copied().max().unwrap_or(0),
            per_appendix,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Total chunks: {}", self.count)?;
        writeln!(f, "Total characters: {}", self.total_chars)?;
        writeln!(f, "Average chunk size: {:.0} chars", self.mean)?;
        writeln!(f, "Min chunk size: {} chars", self.min)?;
        writeln!(f, "Max chunk size: {} chars", self.max)?;
        writeln!(f)?;
        writeln!(f, "Chunks by appendix:")?;
        for (appendix, count) in &self.per_appendix {
            writeln!(f, "  {appendix}: {count} chunks")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(appendix: &str, len: usize) -> Chunk {
        Chunk {
            id: String::new(),
            text: "é".repeat(len),
            section_id: "S".into(),
            section_title: "S".into(),
            appendix: appendix.into(),
            appendix_title: "T".into(),
        }
    }

    #[test]
    fn test_empty() {
        let stats = Stats::from_chunks(&[]);
        assert_eq!(stats, Stats::default());
        assert!(stats.to_string().contains("Total chunks: 0"));
    }

    #[test]
    fn test_sizes_count_chars() {
        let stats = Stats::from_chunks(&[chunk("B", 300), chunk("A", 500), chunk("B", 400)]);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_chars, 1200);
        assert!((stats.mean - 400.0).abs() < f64::EPSILON);
        assert_eq!(stats.min, 300);
        assert_eq!(stats.max, 500);
        assert_eq!(
            stats.per_appendix.into_iter().collect::<Vec<_>>(),
            vec![("A".to_string(), 1), ("B".to_string(), 2)]
        );
    }

    #[test]
    fn test_display_lists_appendices_in_order() {
        let text = Stats::from_chunks(&[chunk("C", 200), chunk("A", 200)]).to_string();
        let a = text.find("  A: 1 chunks").unwrap();
        let c = text.find("  C: 1 chunks").unwrap();
        assert!(a < c);
        assert!(text.contains("Average chunk size: 200 chars"));
    }
}
