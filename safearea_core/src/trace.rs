// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for resolution.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`SafeArea::resolve_traced`](crate::safe_area::SafeArea::resolve_traced)
//! calls at each step. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::notch::{NotchSide, OrientationSource};
use crate::side::SideSet;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the platform gate has been evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformCheckEvent {
    /// Whether a platform identifier was available at all.
    pub platform_present: bool,
    /// Whether the platform is the targeted device family.
    pub target_platform: bool,
    /// Whether the divergent browser variant was detected. Always `false`
    /// off the target platform.
    pub divergent_browser: bool,
}

/// Emitted after the notch side has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotchEvent {
    /// Which orientation signal was consulted.
    pub source: OrientationSource,
    /// The resolved notch side.
    pub notch_side: NotchSide,
}

/// Emitted once per resolution with its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionEvent {
    /// Sides the caller asked for.
    pub requested: SideSet,
    /// Sides that received an inset.
    pub eligible: SideSet,
    /// Number of inset style entries produced.
    pub style_entries: usize,
    /// `true` when the platform gate bypassed resolution entirely.
    pub passthrough: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from resolution.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the platform gate.
    fn on_platform_check(&mut self, e: &PlatformCheckEvent) {
        _ = e;
    }

    /// Called after the notch side is resolved. Not called when the platform
    /// gate bypasses resolution.
    fn on_notch(&mut self, e: &NotchEvent) {
        _ = e;
    }

    /// Called at the end of every resolution.
    fn on_resolution(&mut self, e: &ResolutionEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PlatformCheckEvent`].
    #[inline]
    pub fn platform_check(&mut self, e: &PlatformCheckEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_platform_check(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NotchEvent`].
    #[inline]
    pub fn notch(&mut self, e: &NotchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_notch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResolutionEvent`].
    #[inline]
    pub fn resolution(&mut self, e: &ResolutionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resolution(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
