// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component properties handed to a renderer.
//!
//! [`Props`] is a deliberately small model of what a component receives:
//! an inline [`Style`] plus a bag of string attributes passed through
//! untouched. [`Component`] names what gets rendered.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

/// Inline style declarations keyed by camelCase property name
/// (`paddingLeft`, `backgroundColor`, ...).
///
/// Iteration is in key order, so equal styles always render identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    entries: BTreeMap<String, String>,
}

impl Style {
    /// Creates an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new style holding `self` overlaid with `overrides`.
    ///
    /// Keys present in both take the value from `overrides`. Neither input
    /// is modified.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Style {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Properties passed to a rendered component.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Props {
    /// Inline style.
    pub style: Style,
    /// Every other property, passed through as-is.
    pub attributes: BTreeMap<String, String>,
}

impl Props {
    /// Creates empty properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the inline style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns an attribute value, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// What a renderer instantiates: an element tag name or a registered
/// component name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Component(Cow<'static, str>);

impl Component {
    /// The generic container element, `div`.
    pub const DIV: Self = Self(Cow::Borrowed("div"));

    /// Creates a component reference from a name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The component's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::DIV
    }
}

impl From<&'static str> for Component {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for Component {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn merged_prefers_overrides_and_keeps_inputs() {
        let base = Style::new()
            .with("paddingLeft", "12px")
            .with("color", "red");
        let overrides = Style::new().with("paddingLeft", "env(safe-area-inset-left)");

        let merged = base.merged(&overrides);
        assert_eq!(merged.get("paddingLeft"), Some("env(safe-area-inset-left)"));
        assert_eq!(merged.get("color"), Some("red"));
        assert_eq!(merged.len(), 2);

        // Inputs are untouched.
        assert_eq!(base.get("paddingLeft"), Some("12px"));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn style_iterates_in_key_order() {
        let style: Style = [("paddingTop", "a"), ("color", "b"), ("margin", "c")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["color", "margin", "paddingTop"]);
    }

    #[test]
    fn style_set_and_remove() {
        let mut style = Style::new();
        assert!(style.is_empty());
        assert_eq!(style.set("color", "red"), None);
        assert_eq!(style.set("color", "blue").as_deref(), Some("red"));
        assert!(style.contains_key("color"));
        assert_eq!(style.remove("color").as_deref(), Some("blue"));
        assert!(style.is_empty());
    }

    #[test]
    fn props_attributes() {
        let props = Props::new()
            .with_attribute("id", "root")
            .with_style(Style::new().with("color", "red"));
        assert_eq!(props.attribute("id"), Some("root"));
        assert_eq!(props.attribute("class"), None);
        assert_eq!(props.style.get("color"), Some("red"));
    }

    #[test]
    fn component_defaults_to_div() {
        assert_eq!(Component::default().name(), "div");
        assert_eq!(Component::from("main").name(), "main");
        assert_eq!(Component::new(String::from("nav")), Component::from("nav"));
    }
}
