// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for safearea.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`BrowserSignals`]: environment signals from `navigator`, `window` and
//!   `screen`
//! - [`DomRenderer`]: DOM element creation with the final properties

#![no_std]

extern crate alloc;

mod renderer;
mod signals;

pub use renderer::{DomRenderer, apply_style};
pub use safearea_core::backend::Renderer;
pub use signals::BrowserSignals;

use safearea_core::apply::ApplyStyles;
use safearea_core::props::Props;
use safearea_core::safe_area::SafeArea;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Captures the current [`BrowserSignals`] and renders `area`'s component
/// with `props` into `container`.
///
/// Signals are read once, so platform detection, orientation and browser
/// variant all come from the same moment.
pub fn render_safe_area<A: ApplyStyles>(
    area: &SafeArea<A>,
    props: Props,
    container: HtmlElement,
) -> Result<HtmlElement, JsValue> {
    let signals = BrowserSignals::capture();
    area.render(&signals, props, &mut DomRenderer::new(container))
}

/// Re-applies `area`'s inset style to an already rendered `el`, e.g. after an
/// `orientationchange` event.
///
/// Inset declarations for sides that are no longer eligible are removed;
/// caller-set padding on those sides is left alone. On a non-target platform
/// nothing is touched.
pub fn refresh_insets<A>(area: &SafeArea<A>, el: &HtmlElement) {
    let Some(resolution) = area.resolution(&BrowserSignals::capture()) else {
        return;
    };
    let s = el.style();
    for side in area.requested_sides().iter() {
        if resolution.sides.contains(side) {
            continue;
        }
        if s
            .get_property_value(side.css_property())
            .is_ok_and(|value| value == side.inset_env())
        {
            let _ = s.remove_property(side.css_property());
        }
    }
    apply_style(el, &resolution.styles);
}
