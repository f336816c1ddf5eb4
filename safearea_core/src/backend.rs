// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Platform-specific work lives in *backend* crates. Each backend provides:
//!
//! - **Signals**: An [`EnvironmentSignals`] implementation that reads the
//!   platform identifier, user agent, and orientation from the host runtime.
//!   Backends typically capture these into owned values once per resolution
//!   so that every step sees the same snapshot.
//!
//! - **Renderer**: Implements the [`Renderer`] trait to instantiate a
//!   [`Component`] with its final [`Props`] in a native tree (e.g. DOM
//!   elements).
//!
//! # Crate boundaries
//!
//! `safearea_core` owns detection, resolution, style generation, and this
//! contract module. Backend crates depend on `safearea_core` and provide the
//! platform glue. Application code depends on both and wires them together:
//!
//! ```rust,ignore
//! let signals = BrowserSignals::capture();
//! let area = SafeArea::new().top(true).bottom(true);
//! let element = area.render(&signals, props, &mut DomRenderer::new(container))?;
//! ```
//!
//! [`EnvironmentSignals`]: crate::signals::EnvironmentSignals

use crate::props::{Component, Props};

/// Instantiates components with their final properties.
///
/// DOM-based renderers and test doubles both implement this trait.
pub trait Renderer {
    /// What rendering produces (an element handle, a result, a record).
    type Output;

    /// Renders `component` with `props`.
    fn render(&mut self, component: &Component, props: Props) -> Self::Output;
}
