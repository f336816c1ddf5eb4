// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset style generation.

use alloc::string::String;

use crate::props::Style;
use crate::side::SideSet;

/// Builds the inset style for `sides`: one `padding<Side>` entry per side,
/// valued with the matching `env(safe-area-inset-<side>)` reference.
#[must_use]
pub fn inset_styles(sides: SideSet) -> Style {
    sides
        .iter()
        .map(|side| (side.padding_key(), side.inset_env()))
        .collect()
}

/// Converts a camelCase style key to its CSS property name.
///
/// `paddingLeft` becomes `padding-left`. Keys that are already kebab-case,
/// including custom properties such as `--gutter`, pass through unchanged.
#[must_use]
pub fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return String::from(key);
    }
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    #[test]
    fn one_entry_per_side() {
        let style = inset_styles(SideSet::new(true, false, false, true));
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("paddingLeft"), Some("env(safe-area-inset-left)"));
        assert_eq!(
            style.get("paddingBottom"),
            Some("env(safe-area-inset-bottom)")
        );
    }

    #[test]
    fn empty_sides_give_empty_style() {
        assert!(inset_styles(SideSet::NONE).is_empty());
    }

    #[test]
    fn every_side_round_trips_to_css() {
        let style = inset_styles(SideSet::ALL);
        for side in Side::ALL {
            assert_eq!(style.get(side.padding_key()), Some(side.inset_env()));
            assert_eq!(css_property_name(side.padding_key()), side.css_property());
        }
    }

    #[test]
    fn css_property_names() {
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("padding-top"), "padding-top");
        assert_eq!(css_property_name("--safeGutter"), "--safeGutter");
    }
}
