// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render order of a looping strip.

use core::fmt;
use core::num::NonZeroUsize;

/// Error returned when a strip cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StripError {
    /// A looping strip needs at least one real slide to clone.
    Empty,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("a looping strip needs at least one slide"),
        }
    }
}

impl core::error::Error for StripError {}

/// One cell of the rendered strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The clone of the last real slide, placed before the first one.
    LeadingClone {
        /// Logical index of the slide this clone duplicates.
        source: usize,
    },
    /// A real slide.
    Real {
        /// Logical index of the slide.
        index: usize,
    },
    /// The clone of the first real slide, placed after the last one.
    TrailingClone {
        /// Logical index of the slide this clone duplicates.
        source: usize,
    },
}

impl Slot {
    /// Logical index of the slide shown in this cell.
    ///
    /// Clones resolve to the slide they duplicate, so any interaction on a
    /// clone can be handled exactly like one on its source.
    #[must_use]
    pub fn source(self) -> usize {
        match self {
            Self::LeadingClone { source } | Self::TrailingClone { source } => source,
            Self::Real { index } => index,
        }
    }

    /// Returns `true` for the two boundary clones.
    #[must_use]
    pub fn is_clone(self) -> bool {
        !matches!(self, Self::Real { .. })
    }
}

/// Where the host inserts the two boundary clones.
///
/// Clones are deep copies made once; they are never re-created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClonePlan {
    /// Real slide to duplicate and insert *before* real slide `0`.
    pub leading_source: usize,
    /// Real slide to duplicate and append *after* the last real slide.
    pub trailing_source: usize,
}

/// Layout of a strip over a fixed, non-empty set of real slides.
///
/// Track positions index the rendered strip:
///
/// ```text
/// position: 0            1         ...  N           N + 1
/// slot:     clone(N - 1) slide 0   ...  slide N - 1 clone(0)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StripLayout {
    slide_count: NonZeroUsize,
}

impl StripLayout {
    /// Creates a layout over `slide_count` real slides.
    ///
    /// Returns [`StripError::Empty`] when `slide_count` is zero.
    pub fn new(slide_count: usize) -> Result<Self, StripError> {
        NonZeroUsize::new(slide_count)
            .map(|slide_count| Self { slide_count })
            .ok_or(StripError::Empty)
    }

    /// Number of real slides, `N`.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count.get()
    }

    /// Number of rendered cells, `N + 2`.
    #[must_use]
    pub fn track_len(&self) -> usize {
        self.slide_count() + 2
    }

    /// Position of the trailing clone, `N + 1`.
    #[must_use]
    pub fn last_position(&self) -> usize {
        self.slide_count() + 1
    }

    /// Track position that shows real slide `index` (`index + 1`).
    ///
    /// Returns `None` if `index` is not a real slide.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        (index < self.slide_count()).then_some(index + 1)
    }

    /// Cell at `position`, or `None` past the trailing clone.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<Slot> {
        let n = self.slide_count();
        match position {
            0 => Some(Slot::LeadingClone { source: n - 1 }),
            p if p <= n => Some(Slot::Real { index: p - 1 }),
            p if p == n + 1 => Some(Slot::TrailingClone { source: 0 }),
            _ => None,
        }
    }

    /// Logical slide shown at `position`, resolving clones to their source.
    #[must_use]
    pub fn source_of(&self, position: usize) -> Option<usize> {
        self.slot(position).map(Slot::source)
    }

    /// Returns `true` if `position` holds one of the boundary clones.
    #[must_use]
    pub fn is_clone(&self, position: usize) -> bool {
        self.slot(position).is_some_and(Slot::is_clone)
    }

    /// Iterates every cell in render order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.track_len()).filter_map(|position| self.slot(position))
    }

    /// Which real slides to clone and where they go.
    #[must_use]
    pub fn clone_plan(&self) -> ClonePlan {
        ClonePlan {
            leading_source: self.slide_count() - 1,
            trailing_source: 0,
        }
    }
}
