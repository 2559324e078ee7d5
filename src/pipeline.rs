//! Load, chunk, merge, number, write.
//!
//! ```text
//! appendices/*.json ──sorted──▶ Appendix ──SectionChunker──▶ PendingChunk*
//!                                                               │
//!                               chunks.json ◀── number ◀── merge_undersized
//! ```
//!
//! Appendix files are read in file-name order, so rerunning on the same
//! directory yields a byte-identical `chunks.json`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    merge_undersized, Appendix, Chunk, ChunkCapacity, Error, PendingChunk, Result,
    SectionChunker, SectionSplit, Stats,
};

/// Read every `*.json` appendix in `dir`, sorted by file name.
///
/// # Errors
///
/// Fails if `dir` is missing or unreadable, or if any appendix is malformed.
pub fn load_appendices(dir: &Path) -> Result<Vec<Appendix>> {
    if !dir.is_dir() {
        return Err(Error::MissingInput(dir.to_path_buf()));
    }

    let io_err = |source: std::io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    paths.iter().map(PathBuf::as_path).map(load_appendix).collect()
}

/// Read a single appendix file.
///
/// # Errors
///
/// Fails if the file is unreadable or lacks a required field.
pub fn load_appendix(path: &Path) -> Result<Appendix> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let appendix: Appendix = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), letter = %appendix.letter, "loaded appendix");
    Ok(appendix)
}

/// Write chunks as a pretty-printed JSON array.
///
/// # Errors
///
/// Fails if encoding or writing fails.
pub fn write_chunks(path: &Path, chunks: &[Chunk]) -> Result<()> {
    let json = serde_json::to_string_pretty(chunks)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), chunks = chunks.len(), "wrote chunks");
    Ok(())
}

/// What happened to one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    /// Section id.
    pub section_id: String,
    /// Content length in chars.
    pub chars: usize,
    /// Pieces produced before merging.
    pub pieces: usize,
}

/// Per-appendix trace of the chunking step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendixSummary {
    /// Appendix letter.
    pub letter: String,
    /// Appendix title.
    pub title: String,
    /// Sections that produced at least one piece.
    pub sections: Vec<SectionSummary>,
}

impl fmt::Display for AppendixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing {}: {}", self.letter, self.title)?;
        for s in &self.sections {
            writeln!(f, "  {}: {} chars -> {} chunks", s.section_id, s.chars, s.pieces)?;
        }
        Ok(())
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Final numbered chunks.
    pub chunks: Vec<Chunk>,
    /// Statistics over `chunks`.
    pub stats: Stats,
    /// Per-appendix trace, in processing order.
    pub appendices: Vec<AppendixSummary>,
    /// Ids of sections skipped as placeholders.
    pub placeholders: Vec<String>,
    /// Ids of sections skipped as empty.
    pub empty: Vec<String>,
    /// Undersized chunks discarded by the merge pass.
    pub dropped: Vec<PendingChunk>,
}

/// The chunking pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    chunker: SectionChunker,
}

impl Pipeline {
    /// Create a pipeline around `chunker`.
    #[must_use]
    pub fn new(chunker: SectionChunker) -> Self {
        Self { chunker }
    }

    /// The bounds in use.
    #[must_use]
    pub fn capacity(&self) -> &ChunkCapacity {
        self.chunker.capacity()
    }

    /// Chunk, merge and number `appendices`, in the given order.
    #[must_use]
    pub fn run(&self, appendices: &[Appendix]) -> RunReport {
        let mut report = RunReport::default();
        let mut stream = Vec::new();

        for appendix in appendices {
            info!(letter = %appendix.letter, title = %appendix.title, "processing appendix");
            let mut summary = AppendixSummary {
                letter: appendix.letter.clone(),
                title: appendix.title.clone(),
                sections: Vec::new(),
            };

            for section in &appendix.sections {
                let pieces = match self.chunker.split(&section.content) {
                    SectionSplit::Placeholder => {
                        warn!(section = %section.id, "skipping placeholder section");
                        report.placeholders.push(section.id.clone());
                        continue;
                    }
                    SectionSplit::Empty => {
                        warn!(section = %section.id, "skipping empty section");
                        report.empty.push(section.id.clone());
                        continue;
                    }
                    split => split.into_pieces(),
                };

                let chars = crate::char_len(&section.content);
                debug!(section = %section.id, chars, pieces = pieces.len(), "chunked section");
                summary.sections.push(SectionSummary {
                    section_id: section.id.clone(),
                    chars,
                    pieces: pieces.len(),
                });
                stream.extend(
                    pieces
                        .into_iter()
                        .map(|text| PendingChunk::new(text, section, appendix)),
                );
            }

            report.appendices.push(summary);
        }

        let merged = merge_undersized(stream, self.capacity());
        report.dropped = merged.dropped;
        report.chunks = merged
            .chunks
            .into_iter()
            .enumerate()
            .map(|(index, pending)| pending.into_chunk(index))
            .collect();
        report.stats = Stats::from_chunks(&report.chunks);

        report
    }

    /// Load `input`, run, and write the result to `output`.
    ///
    /// # Errors
    ///
    /// Fails on any load or write error. Nothing is written if loading fails.
    pub fn regenerate(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let appendices = load_appendices(input)?;
        let report = self.run(&appendices);
        write_chunks(output, &report.chunks)?;
        Ok(report)
    }
}
