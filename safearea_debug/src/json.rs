// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] implements [`TraceSink`] and writes each event as one
//! compact JSON object followed by a newline. Every object carries an
//! `"event"` field naming the event kind.

use std::io::{self, Write};

use serde_json::{Value, json};

use safearea_core::side::SideSet;
use safearea_core::trace::{NotchEvent, PlatformCheckEvent, ResolutionEvent, TraceSink};

use crate::pretty::{notch_name, source_name};

/// Writes trace events as newline-delimited JSON.
///
/// Write errors are counted rather than propagated so that tracing never
/// alters resolution; check [`errors`](Self::errors) after the fact.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    errors: usize,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, errors: 0 }
    }

    /// Number of events that failed to write.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Flushes and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, value: &Value) {
        let written = serde_json::to_writer(&mut self.writer, value)
            .map_err(io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if written.is_err() {
            self.errors += 1;
        }
    }
}

fn side_names(sides: SideSet) -> Vec<&'static str> {
    sides.iter().map(|s| s.name()).collect()
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_platform_check(&mut self, e: &PlatformCheckEvent) {
        self.emit(&json!({
            "event": "platform_check",
            "platform_present": e.platform_present,
            "target_platform": e.target_platform,
            "divergent_browser": e.divergent_browser,
        }));
    }

    fn on_notch(&mut self, e: &NotchEvent) {
        self.emit(&json!({
            "event": "notch",
            "side": notch_name(e.notch_side),
            "source": source_name(e.source),
        }));
    }

    fn on_resolution(&mut self, e: &ResolutionEvent) {
        self.emit(&json!({
            "event": "resolution",
            "requested": side_names(e.requested),
            "eligible": side_names(e.eligible),
            "style_entries": e.style_entries,
            "passthrough": e.passthrough,
        }));
    }
}
