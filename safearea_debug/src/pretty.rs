// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use safearea_core::notch::{NotchSide, OrientationSource};
use safearea_core::side::SideSet;
use safearea_core::trace::{NotchEvent, PlatformCheckEvent, ResolutionEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn notch_name(side: NotchSide) -> &'static str {
    match side {
        NotchSide::Left => "left",
        NotchSide::Right => "right",
        NotchSide::None => "none",
    }
}

pub(crate) fn source_name(source: OrientationSource) -> &'static str {
    match source {
        OrientationSource::Angle => "angle",
        OrientationSource::OrientationType => "orientation-type",
        OrientationSource::LegacyOrientationType => "legacy-orientation-type",
        OrientationSource::Unavailable => "unavailable",
    }
}

/// Formats a side set as `left,top` (or `-` when empty).
pub(crate) fn sides_list(sides: SideSet) -> String {
    if sides.is_empty() {
        return String::from("-");
    }
    sides.iter().map(|s| s.name()).collect::<Vec<_>>().join(",")
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_platform_check(&mut self, e: &PlatformCheckEvent) {
        let _ = writeln!(
            self.writer,
            "[platform] present={} target={} divergent={}",
            e.platform_present, e.target_platform, e.divergent_browser,
        );
    }

    fn on_notch(&mut self, e: &NotchEvent) {
        let _ = writeln!(
            self.writer,
            "[notch] side={} source={}",
            notch_name(e.notch_side),
            source_name(e.source),
        );
    }

    fn on_resolution(&mut self, e: &ResolutionEvent) {
        if e.passthrough {
            let _ = writeln!(
                self.writer,
                "[resolve] requested={} passthrough",
                sides_list(e.requested),
            );
            return;
        }
        let _ = writeln!(
            self.writer,
            "[resolve] requested={} eligible={} styles={}",
            sides_list(e.requested),
            sides_list(e.eligible),
            e.style_entries,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_resolution() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_notch(&NotchEvent {
            source: OrientationSource::Angle,
            notch_side: NotchSide::Left,
        });
        sink.on_resolution(&ResolutionEvent {
            requested: SideSet::new(true, false, false, true),
            eligible: SideSet::new(true, false, false, true),
            style_entries: 2,
            passthrough: false,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[notch] side=left source=angle"), "got: {output}");
        assert!(
            output.contains("requested=left,bottom eligible=left,bottom styles=2"),
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_passthrough() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_platform_check(&PlatformCheckEvent {
            platform_present: false,
            target_platform: false,
            divergent_browser: false,
        });
        sink.on_resolution(&ResolutionEvent {
            requested: SideSet::NONE,
            eligible: SideSet::NONE,
            style_entries: 0,
            passthrough: true,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("present=false target=false"), "got: {output}");
        assert!(output.contains("requested=- passthrough"), "got: {output}");
    }
}
