// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Two independent pause sources.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PauseState {
    /// Toggled explicitly through the play/pause control.
    pub user: bool,
    /// Set while the pointer is over the carousel.
    pub hover: bool,
}

impl PauseState {
    /// Effective pause: either source pauses autoplay.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.user || self.hover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_pause_is_or_of_sources() {
        for (user, hover, paused) in [
            (false, false, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ] {
            assert_eq!(PauseState { user, hover }.is_paused(), paused);
        }
    }
}
