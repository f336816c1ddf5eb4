// Copyright 2026 the Safearea Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs a handful of device contexts through the resolver.
//!
//! Each context is resolved with a
//! [`PrettyPrintSink`](safearea_debug::pretty::PrettyPrintSink) attached, and
//! the final properties are printed after the trace lines. Pass `--json` to
//! get newline-delimited JSON events instead.

use std::io::Write;

use safearea_core::props::{Props, Style};
use safearea_core::safe_area::SafeArea;
use safearea_core::side::SideSet;
use safearea_core::signals::StaticSignals;
use safearea_core::trace::{TraceSink, Tracer};

use safearea_debug::json::JsonLinesSink;
use safearea_debug::pretty::PrettyPrintSink;

const SAFARI_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 \
                         Mobile/15E148 Safari/604.1";
const CHROME_IOS_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
                             AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/120.0.6099.119 \
                             Mobile/15E148 Safari/604.1";

struct Case {
    name: &'static str,
    signals: StaticSignals,
    sides: SideSet,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "iPhone Safari, rotated left",
            signals: StaticSignals::new()
                .with_platform("iPhone")
                .with_user_agent(SAFARI_UA)
                .with_orientation_angle(90),
            sides: SideSet::LEFT.union(SideSet::BOTTOM),
        },
        Case {
            name: "iPhone Chrome, landscape-secondary",
            signals: StaticSignals::new()
                .with_platform("iPhone")
                .with_user_agent(CHROME_IOS_UA)
                .with_orientation_type("landscape-secondary"),
            sides: SideSet::TOP.union(SideSet::RIGHT),
        },
        Case {
            name: "iPad, legacy orientation API only",
            signals: StaticSignals::new()
                .with_platform("iPad")
                .with_legacy_orientation_type("landscape-primary"),
            sides: SideSet::ALL,
        },
        Case {
            name: "desktop",
            signals: StaticSignals::new()
                .with_platform("MacIntel")
                .with_user_agent(SAFARI_UA),
            sides: SideSet::ALL,
        },
    ]
}

fn main() {
    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut sink: Box<dyn TraceSink> = if json {
        Box::new(JsonLinesSink::new(std::io::stdout()))
    } else {
        Box::new(PrettyPrintSink::new(Box::new(std::io::stdout())))
    };

    let props = Props::new()
        .with_attribute("id", "content")
        .with_style(Style::new().with("paddingLeft", "16px"));

    for case in cases() {
        if !json {
            println!("== {}", case.name);
        }

        let area = SafeArea::new().sides(case.sides);
        let mut tracer = Tracer::new(sink.as_mut());
        let out = area.resolve_traced(&case.signals, props.clone(), &mut tracer);

        if !json {
            let mut stdout = std::io::stdout().lock();
            for (key, value) in out.style.iter() {
                let _ = writeln!(stdout, "   style {key}: {value}");
            }
            let _ = writeln!(stdout);
        }
    }
}
