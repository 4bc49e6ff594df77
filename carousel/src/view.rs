// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual contract: what the host renders for the strip, indicators and
//! play/pause control.

use alloc::format;
use alloc::string::String;

use crate::options::TransitionStyle;
use crate::transition::TrackMove;

/// Width of one track step as a percentage of the strip viewport.
const STEP_PERCENT: usize = 100;

/// Glyph on the play/pause control while paused.
pub const PLAY_GLYPH: &str = "\u{25B6}";
/// Glyph on the play/pause control while playing.
pub const PAUSE_GLYPH: &str = "\u{275A}\u{275A}";

/// CSS for one strip position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackStyle {
    /// Value for the `transition` property.
    pub transition: String,
    /// Value for the `transform` property.
    pub transform: String,
}

impl TrackStyle {
    /// Style for `track` using `style` when the move is animated.
    #[must_use]
    pub fn new(track: TrackMove, style: TransitionStyle) -> Self {
        Self {
            transition: if track.animated {
                transition_css(style)
            } else {
                String::from("none")
            },
            transform: transform_css(track.position),
        }
    }
}

/// `transition` value for animated shifts.
#[must_use]
pub fn transition_css(style: TransitionStyle) -> String {
    format!("transform {}ms {}", style.duration_ms, style.easing.css())
}

/// `transform` value that shows track `position`.
#[must_use]
pub fn transform_css(position: usize) -> String {
    format!("translateX(-{}%)", position * STEP_PERCENT)
}

/// Render state of one indicator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorView {
    /// Indicator (and slide) index.
    pub index: usize,
    /// Whether this indicator's slide is current.
    pub active: bool,
    /// Progress bar fill in `[0, 100]`; always zero when inactive.
    pub progress_percent: f64,
}

impl IndicatorView {
    /// CSS width for the progress bar, e.g. `"42.50%"`.
    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{:.2}%", self.progress_percent)
    }
}

/// Render state of the play/pause control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayPauseView<'a> {
    /// Whether the user has paused autoplay.
    pub paused: bool,
    /// Visible glyph.
    pub glyph: &'static str,
    /// Accessible label describing what activating the control does.
    pub label: &'a str,
}

impl PlayPauseView<'_> {
    /// Value for `aria-pressed`.
    #[must_use]
    pub fn aria_pressed(&self) -> &'static str {
        if self.paused { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Easing;

    #[test]
    fn transform_is_one_viewport_per_step() {
        assert_eq!(transform_css(0), "translateX(-0%)");
        assert_eq!(transform_css(1), "translateX(-100%)");
        assert_eq!(transform_css(5), "translateX(-500%)");
    }

    #[test]
    fn snap_disables_transition() {
        let style = TrackStyle::new(TrackMove::instant(1), TransitionStyle::default());
        assert_eq!(style.transition, "none");
        assert_eq!(style.transform, "translateX(-100%)");
    }

    #[test]
    fn animated_move_uses_configured_easing() {
        let style = TrackStyle::new(
            TrackMove::animated(2),
            TransitionStyle {
                duration_ms: 600,
                easing: Easing::Linear,
            },
        );
        assert_eq!(style.transition, "transform 600ms linear");
        assert_eq!(
            transition_css(TransitionStyle::default()),
            "transform 1100ms ease-in-out"
        );
    }

    #[test]
    fn bar_width_has_two_decimals() {
        let view = IndicatorView {
            index: 0,
            active: true,
            progress_percent: 42.5,
        };
        assert_eq!(view.bar_width(), "42.50%");
    }
}
