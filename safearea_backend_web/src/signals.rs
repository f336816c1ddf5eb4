// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser environment signals.
//!
//! [`BrowserSignals::capture`] reads everything the resolver needs from the
//! page once:
//!
//! | signal | source |
//! |--------|--------|
//! | platform | `navigator.platform` |
//! | user agent | `navigator.userAgent` |
//! | orientation angle | `window.orientation` (numeric, deprecated but still shipped on iOS) |
//! | orientation type | `screen.orientation.type` |
//! | legacy orientation type | `screen.mozOrientation` |
//!
//! Presence is probed the way the page would (`'orientation' in screen`) so
//! that a missing API reads as `None` instead of throwing. When the standard
//! `screen.orientation` exists, the prefixed property is not read at all.

use alloc::string::String;

use js_sys::Reflect;
use safearea_core::signals::{EnvironmentSignals, StaticSignals};
use wasm_bindgen::JsValue;
use web_sys::{Screen, Window};

/// A snapshot of the page's environment signals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserSignals(StaticSignals);

impl BrowserSignals {
    /// Reads the current signals from the global `window`.
    ///
    /// Outside a browser window (e.g. in a worker) every signal is absent,
    /// which resolves as "not the target platform".
    #[must_use]
    pub fn capture() -> Self {
        web_sys::window().map_or_else(Self::default, |window| Self::from_window(&window))
    }

    /// Reads the current signals from `window`.
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let navigator = window.navigator();
        let (orientation_type, legacy_orientation_type) = window
            .screen()
            .ok()
            .map(|screen| read_orientation_types(&screen))
            .unwrap_or_default();

        Self(StaticSignals {
            platform: navigator.platform().ok(),
            user_agent: navigator.user_agent().ok(),
            orientation_angle: read_property(window.as_ref(), "orientation")
                .and_then(|v| v.as_f64())
                .map(angle_from_js),
            orientation_type,
            legacy_orientation_type,
        })
    }

    /// Returns the captured values.
    #[must_use]
    pub fn into_inner(self) -> StaticSignals {
        self.0
    }
}

impl From<StaticSignals> for BrowserSignals {
    fn from(signals: StaticSignals) -> Self {
        Self(signals)
    }
}

impl EnvironmentSignals for BrowserSignals {
    fn platform(&self) -> Option<&str> {
        self.0.platform()
    }

    fn user_agent(&self) -> Option<&str> {
        self.0.user_agent()
    }

    fn orientation_angle(&self) -> Option<i32> {
        self.0.orientation_angle()
    }

    fn orientation_type(&self) -> Option<&str> {
        self.0.orientation_type()
    }

    fn legacy_orientation_type(&self) -> Option<&str> {
        self.0.legacy_orientation_type()
    }
}

/// Returns `(screen.orientation.type, screen.mozOrientation)`, reading the
/// legacy property only when the standard one is missing.
fn read_orientation_types(screen: &Screen) -> (Option<String>, Option<String>) {
    if let Some(orientation) = read_property(screen.as_ref(), "orientation") {
        let ty = read_property(&orientation, "type").and_then(|v| v.as_string());
        return (ty, None);
    }
    let legacy = read_property(screen.as_ref(), "mozOrientation").and_then(|v| v.as_string());
    (None, legacy)
}

/// Reads `target[name]` if `name in target`.
fn read_property(target: &JsValue, name: &str) -> Option<JsValue> {
    let key = JsValue::from_str(name);
    if !Reflect::has(target, &key).unwrap_or(false) {
        return None;
    }
    Reflect::get(target, &key)
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Converts a JS orientation angle to whole degrees.
fn angle_from_js(angle: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "window.orientation is a WebIDL short; NaN saturates to 0"
    )]
    let degrees = angle as i32;
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;
    use safearea_core::{NotchSide, SafeArea, SideSet, resolve_notch_side};

    #[test]
    fn angle_conversion() {
        assert_eq!(angle_from_js(90.0), 90);
        assert_eq!(angle_from_js(-90.0), -90);
        assert_eq!(angle_from_js(0.0), 0);
        assert_eq!(angle_from_js(f64::NAN), 0);
    }

    #[test]
    fn snapshot_forwards_to_resolver() {
        let signals = BrowserSignals::from(
            StaticSignals::new()
                .with_platform("iPad")
                .with_legacy_orientation_type("landscape-primary"),
        );
        assert_eq!(resolve_notch_side(&signals), NotchSide::Left);

        let resolution = SafeArea::new()
            .sides(SideSet::HORIZONTAL)
            .resolution(&signals)
            .unwrap();
        assert_eq!(resolution.sides, SideSet::LEFT);
        assert_eq!(signals.into_inner().platform.as_deref(), Some("iPad"));
    }

    #[test]
    fn default_snapshot_is_empty() {
        let signals = BrowserSignals::default();
        assert_eq!(signals.platform(), None);
        assert!(SafeArea::new().resolution(&signals).is_none());
    }
}
