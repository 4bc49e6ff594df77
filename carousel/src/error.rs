// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use carousel_strip::StripError;

/// Error returned when a carousel cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CarouselError {
    /// The strip could not be built (no slides).
    Strip(StripError),
    /// The autoplay interval is not finite and positive.
    InvalidInterval(f64),
    /// The transition duration is zero, so no completion signal would ever arrive.
    InvalidTransition {
        /// Requested duration in milliseconds.
        duration_ms: u32,
    },
    /// The host supplied a different number of indicators than slides.
    IndicatorMismatch {
        /// Number of real slides.
        slides: usize,
        /// Number of indicators found.
        indicators: usize,
    },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip(err) => write!(f, "invalid strip: {err}"),
            Self::InvalidInterval(ms) => {
                write!(f, "autoplay interval must be finite and positive, got {ms}")
            }
            Self::InvalidTransition { duration_ms } => {
                write!(f, "transition duration must be positive, got {duration_ms}ms")
            }
            Self::IndicatorMismatch { slides, indicators } => write!(
                f,
                "expected one indicator per slide ({slides}), found {indicators}"
            ),
        }
    }
}

impl core::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Strip(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StripError> for CarouselError {
    fn from(err: StripError) -> Self {
        Self::Strip(err)
    }
}
