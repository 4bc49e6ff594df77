// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup conventions shared by every target.

use carousel::CarouselOptions;

/// CSS selectors used to find carousel parts under the root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The strip element whose `transform` is animated. Required.
    pub track: &'static str,
    /// Real slides inside the track, each carrying `data-index`. At least one is required.
    pub slide: &'static str,
    /// Any card in the track, clones included.
    pub card: &'static str,
    /// Primary link inside a card; whole-card clicks are forwarded to it.
    pub card_link: &'static str,
    /// Indicators, each carrying `data-index`.
    pub indicator: &'static str,
    /// Progress bar inside an indicator. Optional.
    pub indicator_bar: &'static str,
    /// Play/pause control. Optional.
    pub toggle: &'static str,
    /// Region that recognizes swipes. Optional.
    pub pointer_region: &'static str,
    /// Index attribute on slides and indicators.
    pub index_attribute: &'static str,
    /// Interval attribute on the root element.
    pub interval_attribute: &'static str,
    /// Class toggled on the active indicator.
    pub active_class: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            track: ".slider-track",
            slide: ".slider-card[data-index]",
            card: ".slider-card",
            card_link: ".case-link",
            indicator: ".slider-dot[data-index]",
            indicator_bar: ".slider-dot-bar",
            toggle: "[data-carousel-toggle]",
            pointer_region: ".slider-window",
            index_attribute: "data-index",
            interval_attribute: "data-interval",
            active_class: "active",
        }
    }
}

/// Builds options from the root's interval attribute and the reduced-motion preference.
///
/// A missing or unusable interval keeps the default.
#[must_use]
pub fn options_from_markup(interval: Option<&str>, reduced_motion: bool) -> CarouselOptions {
    let mut options = CarouselOptions {
        reduced_motion,
        ..CarouselOptions::default()
    };
    // Interval attributes are whole milliseconds.
    if let Some(ms) = interval
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&ms| ms > 0)
    {
        options.interval_ms = f64::from(ms);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_attribute_overrides_default() {
        let options = options_from_markup(Some("8000"), false);
        assert_eq!(options.interval_ms, 8000.0);
        assert!(!options.reduced_motion);
    }

    #[test]
    fn bad_interval_keeps_default() {
        let default = CarouselOptions::default().interval_ms;
        assert_eq!(options_from_markup(Some("fast"), false).interval_ms, default);
        assert_eq!(options_from_markup(Some("0"), false).interval_ms, default);
        assert_eq!(options_from_markup(None, true).interval_ms, default);
    }

    #[test]
    fn reduced_motion_is_forwarded() {
        assert!(options_from_markup(None, true).reduced_motion);
    }
}
