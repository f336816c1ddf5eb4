// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch-aware safe-area inset resolution.
//!
//! `safearea_core` decides which screen edges of a component need padding to
//! stay clear of a notch-style cutout or system chrome, and expresses that
//! padding as inline style using CSS `env(safe-area-inset-*)` references. It
//! is `no_std` compatible (with `alloc`) and reads the runtime only through
//! an injected [`EnvironmentSignals`] implementation, so every resolution is a
//! pure function of its inputs.
//!
//! # Architecture
//!
//! ```text
//!   EnvironmentSignals (backend)
//!       │
//!       ├──► PlatformProfile::is_target_platform() ──(off)──► props unchanged
//!       │
//!       ├──► resolve_notch_side()               ─┐
//!       └──► is_divergent_browser_variant()     ─┤
//!                                                ▼
//!   SafeArea (requested sides) ──► eligible_sides() ──► inset_styles()
//!                                                          │
//!                 ┌────────────────────────────────────────┘
//!                 ▼
//!   ApplyStyles::apply() ──► Props ──► Renderer::render()
//! ```
//!
//! **[`side`]**: [`Side`] and the [`SideSet`] bitset.
//!
//! **[`signals`]**: The [`EnvironmentSignals`] capability and the
//! [`StaticSignals`] value type.
//!
//! **[`platform`]**: Target-family and browser-variant detection, configured
//! by a [`PlatformProfile`].
//!
//! **[`notch`]**: Orientation → [`NotchSide`] mapping with its source
//! fallback order.
//!
//! **[`style`]**: Inset style generation and CSS naming helpers.
//!
//! **[`props`]**: [`Props`], [`Style`] and [`Component`].
//!
//! **[`apply`]**: The [`ApplyStyles`] strategy trait and the default
//! [`MergeStyles`].
//!
//! **[`backend`]**: The [`Renderer`] trait that platform backends implement.
//!
//! **[`safe_area`]**: [`SafeArea`], which ties everything together.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! resolution instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod apply;
pub mod backend;
pub mod notch;
pub mod platform;
pub mod props;
pub mod safe_area;
pub mod side;
pub mod signals;
pub mod style;
pub mod trace;

pub use apply::{ApplyStyles, MergeStyles};
pub use backend::Renderer;
pub use notch::{NotchSide, OrientationSource, resolve_notch_side};
pub use platform::{PlatformProfile, is_divergent_browser_variant, is_target_platform};
pub use props::{Component, Props, Style};
pub use safe_area::{Resolution, SafeArea, eligible_sides};
pub use side::{Side, SideSet};
pub use signals::{EnvironmentSignals, StaticSignals};
pub use style::inset_styles;
