// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style-application strategies.
//!
//! Once the eligible sides and their inset style are known, an
//! [`ApplyStyles`] strategy folds them into the component's properties.
//! [`MergeStyles`] is the default; any
//! `Fn(SideSet, &Style, Props) -> Props` closure works as well.

use crate::props::{Props, Style};
use crate::side::SideSet;

/// Folds computed inset styles into a component's properties.
pub trait ApplyStyles {
    /// Produces the final properties from the eligible `sides`, their inset
    /// `styles`, and the caller's original `props`.
    fn apply(&self, sides: SideSet, styles: &Style, props: Props) -> Props;
}

impl<F> ApplyStyles for F
where
    F: Fn(SideSet, &Style, Props) -> Props,
{
    fn apply(&self, sides: SideSet, styles: &Style, props: Props) -> Props {
        self(sides, styles, props)
    }
}

/// Shallow-merges the inset styles over the caller's inline style.
///
/// Computed inset entries always win over caller entries with the same key:
/// they encode clearance the hardware requires. All other caller style
/// entries and every attribute are kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeStyles;

impl ApplyStyles for MergeStyles {
    fn apply(&self, _sides: SideSet, styles: &Style, props: Props) -> Props {
        Props {
            style: props.style.merged(styles),
            attributes: props.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::inset_styles;

    #[test]
    fn merge_overrides_same_key_and_keeps_others() {
        let props = Props::new()
            .with_attribute("id", "content")
            .with_style(
                Style::new()
                    .with("paddingLeft", "8px")
                    .with("color", "white"),
            );
        let original = props.clone();

        let out = MergeStyles.apply(SideSet::LEFT, &inset_styles(SideSet::LEFT), props);
        assert_eq!(
            out.style.get("paddingLeft"),
            Some("env(safe-area-inset-left)")
        );
        assert_eq!(out.style.get("color"), Some("white"));
        assert_eq!(out.attribute("id"), Some("content"));

        // The caller's copy is unchanged.
        assert_eq!(original.style.get("paddingLeft"), Some("8px"));
    }

    #[test]
    fn merge_with_empty_styles_is_identity() {
        let props = Props::new().with_style(Style::new().with("margin", "0"));
        let out = MergeStyles.apply(SideSet::NONE, &Style::new(), props.clone());
        assert_eq!(out, props);
    }

    #[test]
    fn closures_are_strategies() {
        let tag_sides = |sides: SideSet, _styles: &Style, props: Props| {
            props.with_attribute("data-sides", alloc::format!("{}", sides.len()))
        };
        let out = tag_sides.apply(SideSet::VERTICAL, &Style::new(), Props::new());
        assert_eq!(out.attribute("data-sides"), Some("2"));
    }
}
