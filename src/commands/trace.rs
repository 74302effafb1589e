//! Rendering of recorded search events

use std::fmt::Display;

use waypath_core::graph::{TraceEvent, TraceRecorder};

fn via<N: Display>(event: &TraceEvent<N>, key: &str) -> String {
    event
        .predecessor
        .as_ref()
        .map(|p| format!(" {}{}", key, p))
        .unwrap_or_default()
}

/// One line per event for human output
pub fn human_lines<N: Display>(recorder: &TraceRecorder<N>) -> Vec<String> {
    recorder
        .events
        .iter()
        .map(|e| {
            format!(
                "{:<10} {}  g={} h={} f={}{}",
                e.event.to_string(),
                e.node,
                e.g,
                e.h,
                e.f,
                via(e, "via ")
            )
        })
        .collect()
}

/// One `T` record per event
pub fn record_lines<N: Display>(recorder: &TraceRecorder<N>) -> Vec<String> {
    recorder
        .events
        .iter()
        .map(|e| {
            format!(
                "T {} {} g={} h={} f={}{}",
                e.event,
                e.node,
                e.g,
                e.h,
                e.f,
                via(e, "pred=")
            )
        })
        .collect()
}
