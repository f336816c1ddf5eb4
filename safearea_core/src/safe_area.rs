// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The safe-area resolver.
//!
//! [`SafeArea`] is the configuration for one component: which sides the
//! caller wants inset, what to render, and how to apply the styles. Given a
//! set of [`EnvironmentSignals`] it runs the whole pipeline:
//!
//! ```text
//!   requested sides
//!       │
//!       ▼
//!   platform gate ──(off)──► original props, unchanged
//!       │ (on)
//!       ▼
//!   notch side + browser variant ──► eligible_sides()
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   inset_styles() ──► ApplyStyles::apply() ──► Renderer::render()
//! ```
//!
//! Every call is a pure function of its arguments and the signals it is
//! given; a `SafeArea` holds no state that changes between calls.

use core::fmt;

use crate::apply::{ApplyStyles, MergeStyles};
use crate::backend::Renderer;
use crate::notch::{NotchSide, resolve_notch_side_with_source};
use crate::platform::PlatformProfile;
use crate::props::{Component, Props, Style};
use crate::side::{Side, SideSet};
use crate::signals::EnvironmentSignals;
use crate::style::inset_styles;
use crate::trace::{NotchEvent, PlatformCheckEvent, ResolutionEvent, Tracer};

/// Filters `requested` down to the sides that need an inset.
///
/// - `bottom` is eligible whenever requested.
/// - `top` is eligible unless the divergent browser already reserves it.
/// - `left` and `right` are eligible only on the side holding the notch.
#[must_use]
pub fn eligible_sides(requested: SideSet, notch: NotchSide, divergent: bool) -> SideSet {
    requested
        .iter()
        .filter(|&side| match side {
            Side::Bottom => true,
            Side::Top => !divergent,
            Side::Left | Side::Right => notch.side() == Some(side),
        })
        .collect()
}

/// Intermediate result of a resolution on the target platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Where the notch sits.
    pub notch_side: NotchSide,
    /// Whether the divergent browser variant was detected.
    pub divergent: bool,
    /// Sides that receive an inset.
    pub sides: SideSet,
    /// The inset style for [`sides`](Self::sides).
    pub styles: Style,
}

/// Safe-area configuration for one component.
///
/// Defaults: no sides requested, a `div` component, [`MergeStyles`], and the
/// [`ios`](PlatformProfile::ios) platform profile.
///
/// ```
/// use safearea_core::{Props, SafeArea, StaticSignals};
///
/// let signals = StaticSignals::new()
///     .with_platform("iPhone")
///     .with_orientation_angle(90);
/// let props = SafeArea::new()
///     .left(true)
///     .bottom(true)
///     .resolve(&signals, Props::new());
/// assert_eq!(props.style.get("paddingLeft"), Some("env(safe-area-inset-left)"));
/// ```
#[derive(Clone)]
pub struct SafeArea<A = MergeStyles> {
    component: Component,
    apply_styles: A,
    sides: SideSet,
    profile: PlatformProfile,
}

impl SafeArea {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            component: Component::DIV,
            apply_styles: MergeStyles,
            sides: SideSet::NONE,
            profile: PlatformProfile::ios(),
        }
    }
}

impl Default for SafeArea {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for SafeArea<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeArea")
            .field("component", &self.component)
            .field("sides", &self.sides)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl<A> SafeArea<A> {
    /// Sets the component to render.
    #[must_use]
    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.component = component.into();
        self
    }

    /// Replaces the style-application strategy.
    #[must_use]
    pub fn apply_styles<B>(self, apply_styles: B) -> SafeArea<B> {
        SafeArea {
            component: self.component,
            apply_styles,
            sides: self.sides,
            profile: self.profile,
        }
    }

    /// Requests (or stops requesting) a left inset.
    #[must_use]
    pub fn left(self, on: bool) -> Self {
        self.side(Side::Left, on)
    }

    /// Requests (or stops requesting) a right inset.
    #[must_use]
    pub fn right(self, on: bool) -> Self {
        self.side(Side::Right, on)
    }

    /// Requests (or stops requesting) a top inset.
    #[must_use]
    pub fn top(self, on: bool) -> Self {
        self.side(Side::Top, on)
    }

    /// Requests (or stops requesting) a bottom inset.
    #[must_use]
    pub fn bottom(self, on: bool) -> Self {
        self.side(Side::Bottom, on)
    }

    /// Requests (or stops requesting) an inset on `side`.
    #[must_use]
    pub fn side(mut self, side: Side, on: bool) -> Self {
        self.sides = self.sides.with_flag(side, on);
        self
    }

    /// Replaces the whole requested set.
    #[must_use]
    pub fn sides(mut self, sides: SideSet) -> Self {
        self.sides = sides;
        self
    }

    /// Replaces the platform profile.
    #[must_use]
    pub fn profile(mut self, profile: PlatformProfile) -> Self {
        self.profile = profile;
        self
    }

    /// The requested sides.
    #[must_use]
    pub fn requested_sides(&self) -> SideSet {
        self.sides
    }

    /// The component that will be rendered.
    #[must_use]
    pub fn target_component(&self) -> &Component {
        &self.component
    }

    /// The platform profile in use.
    #[must_use]
    pub fn platform_profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Computes the eligible sides and inset style without applying them.
    ///
    /// Returns `None` off the target platform.
    #[must_use]
    pub fn resolution<S: EnvironmentSignals + ?Sized>(&self, signals: &S) -> Option<Resolution> {
        self.resolution_traced(signals, &mut Tracer::none())
    }

    fn resolution_traced<S: EnvironmentSignals + ?Sized>(
        &self,
        signals: &S,
        tracer: &mut Tracer<'_>,
    ) -> Option<Resolution> {
        let target = self.profile.is_target_platform(signals);
        let divergent = target && self.profile.is_divergent_browser_variant(signals);
        tracer.platform_check(&PlatformCheckEvent {
            platform_present: signals.platform().is_some(),
            target_platform: target,
            divergent_browser: divergent,
        });
        if !target {
            return None;
        }

        let (notch_side, source) = resolve_notch_side_with_source(signals);
        tracer.notch(&NotchEvent { source, notch_side });

        let sides = eligible_sides(self.sides, notch_side, divergent);
        Some(Resolution {
            notch_side,
            divergent,
            sides,
            styles: inset_styles(sides),
        })
    }
}

impl<A: ApplyStyles> SafeArea<A> {
    /// Produces the final properties for `props` under `signals`.
    ///
    /// Off the target platform `props` is returned unchanged and the
    /// strategy is never invoked.
    #[must_use]
    pub fn resolve<S: EnvironmentSignals + ?Sized>(&self, signals: &S, props: Props) -> Props {
        self.resolve_traced(signals, props, &mut Tracer::none())
    }

    /// [`resolve`](Self::resolve), reporting each step to `tracer`.
    #[must_use]
    pub fn resolve_traced<S: EnvironmentSignals + ?Sized>(
        &self,
        signals: &S,
        props: Props,
        tracer: &mut Tracer<'_>,
    ) -> Props {
        match self.resolution_traced(signals, tracer) {
            None => {
                tracer.resolution(&ResolutionEvent {
                    requested: self.sides,
                    eligible: SideSet::NONE,
                    style_entries: 0,
                    passthrough: true,
                });
                props
            }
            Some(resolution) => {
                tracer.resolution(&ResolutionEvent {
                    requested: self.sides,
                    eligible: resolution.sides,
                    style_entries: resolution.styles.len(),
                    passthrough: false,
                });
                self.apply_styles
                    .apply(resolution.sides, &resolution.styles, props)
            }
        }
    }

    /// Resolves `props` and renders the target component with the result.
    pub fn render<S, R>(&self, signals: &S, props: Props, renderer: &mut R) -> R::Output
    where
        S: EnvironmentSignals + ?Sized,
        R: Renderer,
    {
        let props = self.resolve(signals, props);
        renderer.render(&self.component, props)
    }
}
