// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen edges and sets of edges.
//!
//! [`Side`] names one physical edge of the screen. [`SideSet`] is a compact
//! bitset of sides, used both for the sides a caller requests and for the
//! subset that ends up eligible for an inset.

use core::fmt;

/// A physical screen edge.
///
/// The declaration order (`Left`, `Right`, `Top`, `Bottom`) is the order in
/// which [`SideSet::iter`] yields sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The left edge.
    Left,
    /// The right edge.
    Right,
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
}

impl Side {
    /// All sides in iteration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Lowercase name of the side (`"left"`, `"right"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Style key for padding on this side (`"paddingLeft"`, ...).
    #[must_use]
    pub const fn padding_key(self) -> &'static str {
        match self {
            Self::Left => "paddingLeft",
            Self::Right => "paddingRight",
            Self::Top => "paddingTop",
            Self::Bottom => "paddingBottom",
        }
    }

    /// CSS property name for padding on this side (`"padding-left"`, ...).
    #[must_use]
    pub const fn css_property(self) -> &'static str {
        match self {
            Self::Left => "padding-left",
            Self::Right => "padding-right",
            Self::Top => "padding-top",
            Self::Bottom => "padding-bottom",
        }
    }

    /// CSS environment variable reference for this side's inset.
    ///
    /// The value is resolved by the rendering engine at paint time; nothing
    /// here knows the numeric inset.
    #[must_use]
    pub const fn inset_env(self) -> &'static str {
        match self {
            Self::Left => "env(safe-area-inset-left)",
            Self::Right => "env(safe-area-inset-right)",
            Self::Top => "env(safe-area-inset-top)",
            Self::Bottom => "env(safe-area-inset-bottom)",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Left => 1 << 0,
            Self::Right => 1 << 1,
            Self::Top => 1 << 2,
            Self::Bottom => 1 << 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Side`]s.
///
/// The default is the empty set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideSet(u8);

impl SideSet {
    /// No sides.
    pub const NONE: Self = Self(0);

    /// All four sides.
    pub const ALL: Self = Self(0b1111);

    /// Left and right.
    pub const HORIZONTAL: Self = Self(Side::Left.bit() | Side::Right.bit());

    /// Top and bottom.
    pub const VERTICAL: Self = Self(Side::Top.bit() | Side::Bottom.bit());

    /// Left only.
    pub const LEFT: Self = Self(Side::Left.bit());

    /// Right only.
    pub const RIGHT: Self = Self(Side::Right.bit());

    /// Top only.
    pub const TOP: Self = Self(Side::Top.bit());

    /// Bottom only.
    pub const BOTTOM: Self = Self(Side::Bottom.bit());

    /// Builds a set from four per-side flags.
    #[must_use]
    pub const fn new(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        Self::NONE
            .with_flag(Side::Left, left)
            .with_flag(Side::Right, right)
            .with_flag(Side::Top, top)
            .with_flag(Side::Bottom, bottom)
    }

    /// Returns `true` if `side` is in the set.
    #[must_use]
    pub const fn contains(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    /// Returns a copy of the set with `side` added.
    #[must_use]
    pub const fn with(self, side: Side) -> Self {
        Self(self.0 | side.bit())
    }

    /// Returns a copy of the set with `side` removed.
    #[must_use]
    pub const fn without(self, side: Side) -> Self {
        Self(self.0 & !side.bit())
    }

    /// Returns a copy of the set with `side` added or removed per `on`.
    #[must_use]
    pub const fn with_flag(self, side: Side, on: bool) -> Self {
        if on { self.with(side) } else { self.without(side) }
    }

    /// Adds `side` to the set.
    pub fn insert(&mut self, side: Side) {
        *self = self.with(side);
    }

    /// Removes `side` from the set.
    pub fn remove(&mut self, side: Side) {
        *self = self.without(side);
    }

    /// Sides present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Sides present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every side in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of sides in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the sides in the set in [`Side::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |&side| self.contains(side))
    }
}

impl fmt::Debug for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        Self::NONE.with(side)
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn new_from_flags() {
        let set = SideSet::new(true, false, false, true);
        assert!(set.contains(Side::Left));
        assert!(!set.contains(Side::Right));
        assert!(!set.contains(Side::Top));
        assert!(set.contains(Side::Bottom));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_is_empty() {
        assert!(SideSet::default().is_empty());
        assert_eq!(SideSet::default(), SideSet::NONE);
        assert_eq!(SideSet::new(false, false, false, false), SideSet::NONE);
        assert_eq!(SideSet::new(true, true, true, true), SideSet::ALL);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let set: SideSet = [Side::Bottom, Side::Top, Side::Left].into_iter().collect();
        let sides: Vec<Side> = set.iter().collect();
        assert_eq!(sides, [Side::Left, Side::Top, Side::Bottom]);
    }

    #[test]
    fn set_algebra() {
        let set = SideSet::HORIZONTAL.union(SideSet::BOTTOM);
        assert_eq!(set.intersection(SideSet::VERTICAL), SideSet::BOTTOM);
        assert!(SideSet::LEFT.is_subset(set));
        assert!(!SideSet::TOP.is_subset(set));
        assert!(SideSet::NONE.is_subset(SideSet::NONE));

        let mut set = SideSet::NONE;
        set.insert(Side::Right);
        set.insert(Side::Right);
        assert_eq!(set, SideSet::RIGHT);
        set.remove(Side::Right);
        assert!(set.is_empty());
    }

    #[test]
    fn css_names() {
        assert_eq!(Side::Left.padding_key(), "paddingLeft");
        assert_eq!(Side::Bottom.css_property(), "padding-bottom");
        assert_eq!(Side::Top.inset_env(), "env(safe-area-inset-top)");
        for side in Side::ALL {
            assert!(side.inset_env().contains(side.name()));
        }
    }

    #[test]
    fn debug_lists_sides() {
        assert_eq!(format!("{:?}", SideSet::VERTICAL), "{Top, Bottom}");
        assert_eq!(format!("{:?}", SideSet::NONE), "{}");
    }
}
