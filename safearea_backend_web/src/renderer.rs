// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element creation.
//!
//! Instantiates a [`Component`] as a DOM element under a container, writing
//! the final [`Props`]: attributes via `setAttribute`, inline style via the
//! element's `CSSStyleDeclaration` (camelCase keys are converted to CSS
//! property names).
//!
//! [`Component`]: safearea_core::props::Component
//! [`Props`]: safearea_core::props::Props

use safearea_core::backend::Renderer;
use safearea_core::props::{Component, Props, Style};
use safearea_core::style::css_property_name;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Renders components as child elements of a container `HtmlElement`.
///
/// Each [`render`](Renderer::render) call creates one element named after the
/// component, appends it to the container, and returns it.
pub struct DomRenderer {
    container: HtmlElement,
}

impl core::fmt::Debug for DomRenderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRenderer")
            .field("container", &"HtmlElement")
            .finish()
    }
}

impl DomRenderer {
    /// Creates a renderer that appends to `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }

    /// Returns a reference to the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }
}

impl Renderer for DomRenderer {
    type Output = Result<HtmlElement, JsValue>;

    fn render(&mut self, component: &Component, props: Props) -> Self::Output {
        let doc = self
            .container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container has no owner document"))?;
        let el: HtmlElement = doc.create_element(component.name())?.unchecked_into();
        for (name, value) in &props.attributes {
            el.set_attribute(name, value)?;
        }
        apply_style(&el, &props.style);
        self.container.append_child(&el)?;
        Ok(el)
    }
}

/// Writes every declaration in `style` onto `el`'s inline style.
///
/// Existing declarations for other properties are left alone. Values the
/// browser rejects (e.g. `env()` on engines without support) are ignored.
pub fn apply_style(el: &HtmlElement, style: &Style) {
    let s = el.style();
    for (key, value) in style.iter() {
        let _ = s.set_property(&css_property_name(key), value);
    }
}
