// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only environment signals.
//!
//! Everything the resolver knows about the runtime arrives through
//! [`EnvironmentSignals`]. Backends implement it on top of the real platform
//! (for browsers: `navigator.platform`, `navigator.userAgent`,
//! `window.orientation`, `screen.orientation.type` and
//! `screen.mozOrientation`). [`StaticSignals`] holds plain values and is what
//! tests and offline tools use.
//!
//! Every accessor returns `None` when the underlying API is missing. Missing
//! APIs are never an error; the resolver maps them to its fallbacks.

use alloc::string::String;

/// Ambient runtime signals consulted during resolution.
pub trait EnvironmentSignals {
    /// Platform identifier (e.g. `"iPhone"`, `"MacIntel"`).
    fn platform(&self) -> Option<&str>;

    /// User-agent string.
    fn user_agent(&self) -> Option<&str>;

    /// Numeric orientation angle in degrees (`window.orientation`).
    fn orientation_angle(&self) -> Option<i32>;

    /// Named orientation from the standard API (`screen.orientation.type`).
    fn orientation_type(&self) -> Option<&str>;

    /// Named orientation from the legacy prefixed API (`screen.mozOrientation`).
    ///
    /// Only consulted when [`orientation_type`](Self::orientation_type) is
    /// unavailable.
    fn legacy_orientation_type(&self) -> Option<&str> {
        None
    }
}

impl<T: EnvironmentSignals + ?Sized> EnvironmentSignals for &T {
    fn platform(&self) -> Option<&str> {
        (**self).platform()
    }

    fn user_agent(&self) -> Option<&str> {
        (**self).user_agent()
    }

    fn orientation_angle(&self) -> Option<i32> {
        (**self).orientation_angle()
    }

    fn orientation_type(&self) -> Option<&str> {
        (**self).orientation_type()
    }

    fn legacy_orientation_type(&self) -> Option<&str> {
        (**self).legacy_orientation_type()
    }
}

/// Fixed signal values.
///
/// The default has every signal absent, which resolves as "not the target
/// platform" with no notch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSignals {
    /// See [`EnvironmentSignals::platform`].
    pub platform: Option<String>,
    /// See [`EnvironmentSignals::user_agent`].
    pub user_agent: Option<String>,
    /// See [`EnvironmentSignals::orientation_angle`].
    pub orientation_angle: Option<i32>,
    /// See [`EnvironmentSignals::orientation_type`].
    pub orientation_type: Option<String>,
    /// See [`EnvironmentSignals::legacy_orientation_type`].
    pub legacy_orientation_type: Option<String>,
}

impl StaticSignals {
    /// Creates a set of signals with everything absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform identifier.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the user-agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the numeric orientation angle.
    #[must_use]
    pub fn with_orientation_angle(mut self, angle: i32) -> Self {
        self.orientation_angle = Some(angle);
        self
    }

    /// Sets the standard named orientation.
    #[must_use]
    pub fn with_orientation_type(mut self, ty: impl Into<String>) -> Self {
        self.orientation_type = Some(ty.into());
        self
    }

    /// Sets the legacy prefixed named orientation.
    #[must_use]
    pub fn with_legacy_orientation_type(mut self, ty: impl Into<String>) -> Self {
        self.legacy_orientation_type = Some(ty.into());
        self
    }
}

impl EnvironmentSignals for StaticSignals {
    fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn orientation_angle(&self) -> Option<i32> {
        self.orientation_angle
    }

    fn orientation_type(&self) -> Option<&str> {
        self.orientation_type.as_deref()
    }

    fn legacy_orientation_type(&self) -> Option<&str> {
        self.legacy_orientation_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing() {
        let s = StaticSignals::new();
        assert_eq!(s.platform(), None);
        assert_eq!(s.user_agent(), None);
        assert_eq!(s.orientation_angle(), None);
        assert_eq!(s.orientation_type(), None);
        assert_eq!(s.legacy_orientation_type(), None);
    }

    #[test]
    fn builders_fill_fields() {
        let s = StaticSignals::new()
            .with_platform("iPhone")
            .with_user_agent("Mozilla/5.0 CriOS/120")
            .with_orientation_angle(-90)
            .with_orientation_type("landscape-secondary")
            .with_legacy_orientation_type("landscape-primary");
        assert_eq!(s.platform(), Some("iPhone"));
        assert_eq!(s.user_agent(), Some("Mozilla/5.0 CriOS/120"));
        assert_eq!(s.orientation_angle(), Some(-90));
        assert_eq!(s.orientation_type(), Some("landscape-secondary"));
        assert_eq!(s.legacy_orientation_type(), Some("landscape-primary"));
    }

    #[test]
    fn references_forward() {
        let s = StaticSignals::new().with_platform("iPad");
        let dynamic: &dyn EnvironmentSignals = &s;
        assert_eq!((&dynamic).platform(), Some("iPad"));
    }
}
