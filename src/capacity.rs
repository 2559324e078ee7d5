//! Chunk size bounds.
//!
//! ## The Problem
//!
//! Retrieval wants chunks that are neither fragments nor walls of text:
//!
//! - Too small: a lone heading or a one-line definition embeds poorly
//! - Too large: the section's topics blur together, precision drops
//!
//! A syllabus mixes both. Some sections are a single sentence, others run
//! for pages. So a chunk has a floor *and* a ceiling:
//!
//! ```text
//!   0        min            target              max
//!   |---------|===============^==================|---------->
//!   undersized        acceptable chunk size          oversized
//!   (merge)                                          (split)
//! ```
//!
//! `overlap` is how many trailing characters of a flushed chunk are repeated
//! at the start of the next one when an oversized section is split.
//!
//! All sizes are counted in `char`s, not bytes, so accented titles and
//! bullet glyphs count the same as ASCII.

use std::cmp::Ordering;

/// Width of the `"\n\n"` joiner placed between merged pieces.
pub const JOINER_LEN: usize = 2;

/// Size bounds for chunking.
///
/// # Examples
///
/// ```rust
/// use syllabus_chunks::ChunkCapacity;
///
/// let cap = ChunkCapacity::DEFAULT;
/// assert_eq!(cap.min(), 200);
/// assert_eq!(cap.target(), 1200);
/// assert_eq!(cap.max(), 2000);
/// assert_eq!(cap.overlap(), 200);
///
/// let small = ChunkCapacity::new(10, 40).unwrap().with_overlap(5).unwrap();
/// assert_eq!(small.max(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkCapacity {
    min: usize,
    target: usize,
    max: usize,
    overlap: usize,
}

impl ChunkCapacity {
    /// The sizes the syllabus corpus is chunked with.
    pub const DEFAULT: Self = Self {
        min: 200,
        target: 1200,
        max: 2000,
        overlap: 200,
    };

    /// Create bounds with no overlap and a target halfway between `min` and `max`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min == 0` or `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self, ChunkCapacityError> {
        if min == 0 {
            return Err(ChunkCapacityError::ZeroMin);
        }
        if max < min {
            return Err(ChunkCapacityError::MaxLessThanMin { min, max });
        }
        Ok(Self {
            min,
            target: min + (max - min) / 2,
            max,
            overlap: 0,
        })
    }

    /// Set the size chunks should ideally land on.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is outside `min..=max`.
    pub fn with_target(self, target: usize) -> Result<Self, ChunkCapacityError> {
        if target < self.min || target > self.max {
            Err(ChunkCapacityError::TargetOutOfRange {
                target,
                min: self.min,
                max: self.max,
            })
        } else {
            Ok(Self { target, ..self })
        }
    }

    /// Set how many trailing characters are carried into the next split chunk.
    ///
    /// # Errors
    ///
    /// Returns an error if `overlap >= max`.
    pub fn with_overlap(self, overlap: usize) -> Result<Self, ChunkCapacityError> {
        if overlap >= self.max {
            Err(ChunkCapacityError::OverlapExceedsMax {
                overlap,
                max: self.max,
            })
        } else {
            Ok(Self { overlap, ..self })
        }
    }

    /// Smallest chunk that may be emitted on its own.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Preferred chunk size. Informational; splitting is bounded by `max`.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Largest chunk the splitter aims to produce.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Characters repeated across a split boundary.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Classify a chunk size.
    ///
    /// Returns:
    /// - `Ordering::Less`: below `min`, must be merged or dropped
    /// - `Ordering::Equal`: within `min..=max`, can stand alone
    /// - `Ordering::Greater`: above `max`, must be split
    #[must_use]
    pub fn fits(&self, size: usize) -> Ordering {
        if size < self.min {
            Ordering::Less
        } else if size > self.max {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Whether joining `additional` characters onto `current` would pass `max`.
    ///
    /// Accounts for the `"\n\n"` joiner between the two pieces.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current
            .saturating_add(additional)
            .saturating_add(JOINER_LEN)
            > self.max
    }
}

impl Default for ChunkCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Error when configuring chunk bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkCapacityError {
    /// Min size must be positive.
    #[error("min chunk size must be > 0")]
    ZeroMin,

    /// Max size must be >= min size.
    #[error("max ({max}) must be >= min ({min})")]
    MaxLessThanMin {
        /// The min chunk size.
        min: usize,
        /// The max that was too small.
        max: usize,
    },

    /// Target must lie within the bounds.
    #[error("target ({target}) must lie within {min}..={max}")]
    TargetOutOfRange {
        /// The rejected target.
        target: usize,
        /// The min chunk size.
        min: usize,
        /// The max chunk size.
        max: usize,
    },

    /// Overlap must be smaller than max.
    #[error("overlap ({overlap}) must be < max ({max})")]
    OverlapExceedsMax {
        /// The rejected overlap.
        overlap: usize,
        /// The max chunk size.
        max: usize,
    },
}
