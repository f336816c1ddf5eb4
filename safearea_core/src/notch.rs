// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch position from the device orientation.
//!
//! Runtimes expose orientation in one of two shapes, and exactly one source
//! is consulted per resolution:
//!
//! 1. A numeric angle in degrees. When present it is authoritative:
//!    `90` puts the notch on the left, `-90` on the right, and any other
//!    angle (portrait, upside down) means no side notch.
//! 2. A named orientation type, read from the standard API when it exists
//!    and from the legacy prefixed API otherwise. `landscape-primary` puts
//!    the notch on the left and `landscape-secondary` on the right.
//!
//! With neither source available the result is [`NotchSide::None`].

use crate::side::Side;
use crate::signals::EnvironmentSignals;

/// The physical side the notch currently sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotchSide {
    /// The notch is on the left edge.
    Left,
    /// The notch is on the right edge.
    Right,
    /// The notch is not on a side edge, or its position is unknown.
    #[default]
    None,
}

impl NotchSide {
    /// Maps a numeric orientation angle.
    #[must_use]
    pub const fn from_angle(angle: i32) -> Self {
        match angle {
            90 => Self::Left,
            -90 => Self::Right,
            _ => Self::None,
        }
    }

    /// Maps a named orientation type.
    #[must_use]
    pub fn from_orientation_type(ty: &str) -> Self {
        match ty {
            "landscape-primary" => Self::Left,
            "landscape-secondary" => Self::Right,
            _ => Self::None,
        }
    }

    /// The screen side holding the notch, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::None => None,
        }
    }
}

/// Which orientation signal a resolution was based on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrientationSource {
    /// The numeric angle.
    Angle,
    /// The standard named orientation type.
    OrientationType,
    /// The legacy prefixed named orientation type.
    LegacyOrientationType,
    /// No orientation signal was available.
    Unavailable,
}

/// Resolves the notch side from the current orientation signals.
#[must_use]
pub fn resolve_notch_side<S: EnvironmentSignals + ?Sized>(signals: &S) -> NotchSide {
    resolve_notch_side_with_source(signals).0
}

/// Like [`resolve_notch_side`], also reporting which signal was consulted.
#[must_use]
pub fn resolve_notch_side_with_source<S: EnvironmentSignals + ?Sized>(
    signals: &S,
) -> (NotchSide, OrientationSource) {
    if let Some(angle) = signals.orientation_angle() {
        return (NotchSide::from_angle(angle), OrientationSource::Angle);
    }
    if let Some(ty) = signals.orientation_type() {
        return (
            NotchSide::from_orientation_type(ty),
            OrientationSource::OrientationType,
        );
    }
    if let Some(ty) = signals.legacy_orientation_type() {
        return (
            NotchSide::from_orientation_type(ty),
            OrientationSource::LegacyOrientationType,
        );
    }
    (NotchSide::None, OrientationSource::Unavailable)
}
