// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target-platform and browser-variant detection.
//!
//! Detection reads the platform identifier rather than the user agent: user
//! agents are spoofed freely by embedded browsers, while the platform
//! identifier reliably names the device family. The user agent is consulted
//! only to recognize one browser variant on the target platform that already
//! reserves space at the top of the viewport.

use crate::signals::EnvironmentSignals;

/// Detection constants for a device family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Substrings of the platform identifier that denote the family.
    pub family_markers: &'static [&'static str],
    /// User-agent substring of the browser variant that suppresses top insets.
    pub divergent_browser_marker: &'static str,
}

impl PlatformProfile {
    /// iOS devices (iPad, iPhone, iPod); Chrome for iOS is the divergent
    /// browser.
    #[must_use]
    pub const fn ios() -> Self {
        Self {
            family_markers: &["iPad", "iPhone", "iPod"],
            divergent_browser_marker: "CriOS",
        }
    }

    /// Returns `true` if the platform identifier is present and names a
    /// device of this family.
    #[must_use]
    pub fn is_target_platform<S: EnvironmentSignals + ?Sized>(&self, signals: &S) -> bool {
        signals.platform().is_some_and(|platform| {
            self.family_markers
                .iter()
                .any(|marker| platform.contains(marker))
        })
    }

    /// Returns `true` on the target platform when the user agent carries the
    /// divergent browser marker.
    #[must_use]
    pub fn is_divergent_browser_variant<S: EnvironmentSignals + ?Sized>(
        &self,
        signals: &S,
    ) -> bool {
        self.is_target_platform(signals)
            && signals
                .user_agent()
                .is_some_and(|ua| ua.contains(self.divergent_browser_marker))
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self::ios()
    }
}

/// [`PlatformProfile::is_target_platform`] with the [`ios`](PlatformProfile::ios)
/// profile.
#[must_use]
pub fn is_target_platform<S: EnvironmentSignals + ?Sized>(signals: &S) -> bool {
    PlatformProfile::ios().is_target_platform(signals)
}

/// [`PlatformProfile::is_divergent_browser_variant`] with the
/// [`ios`](PlatformProfile::ios) profile.
#[must_use]
pub fn is_divergent_browser_variant<S: EnvironmentSignals + ?Sized>(signals: &S) -> bool {
    PlatformProfile::ios().is_divergent_browser_variant(signals)
}
