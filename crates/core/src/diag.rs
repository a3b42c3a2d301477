// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics sink for resolution-stage chatter.
//!
//! Resolution deliberately swallows most failures (wrong-cluster guesses,
//! optional enrichment lookups). Those events still need somewhere to go so
//! a debugging session can see them; stages emit through an injected
//! [`Diagnostics`] handle instead of a process-wide flag, and tests can
//! capture the stream with [`CollectSink`].

use std::sync::Arc;

/// Receives diagnostic events from resolution stages.
pub trait DiagSink: Send + Sync {
    fn emit(&self, stage: &'static str, message: &str);
}

/// Cloneable handle the engines carry.
#[derive(Clone)]
pub struct Diagnostics(Arc<dyn DiagSink>);

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagSink>) -> Self {
        Self(sink)
    }

    /// Sink that drops everything.
    pub fn disabled() -> Self {
        Self(Arc::new(NullSink))
    }

    /// Sink that forwards to `tracing` at debug level.
    pub fn tracing() -> Self {
        Self(Arc::new(TracingSink))
    }

    /// Emit one event. Has no effect on resolution outcomes.
    pub fn note(&self, stage: &'static str, message: impl AsRef<str>) {
        self.0.emit(stage, message.as_ref());
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Drops every event.
pub struct NullSink;

impl DiagSink for NullSink {
    fn emit(&self, _stage: &'static str, _message: &str) {}
}

/// Forwards events to the `tracing` subscriber at debug level, so verbosity
/// stays a subscriber concern (`RUST_LOG`, `--debug`).
pub struct TracingSink;

impl DiagSink for TracingSink {
    fn emit(&self, stage: &'static str, message: &str) {
        tracing::debug!(target: "jobtrail", %stage, "{message}");
    }
}

/// Captures events for assertions.
#[cfg(any(test, feature = "test-support"))]
pub struct CollectSink {
    events: parking_lot::Mutex<Vec<(String, String)>>,
}

#[cfg(any(test, feature = "test-support"))]
impl CollectSink {
    /// Build a diagnostics handle plus the sink it writes into.
    pub fn pair() -> (Diagnostics, Arc<CollectSink>) {
        let sink = Arc::new(CollectSink { events: parking_lot::Mutex::new(Vec::new()) });
        (Diagnostics::new(sink.clone()), sink)
    }

    /// Snapshot of `(stage, message)` events emitted so far.
    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().clone()
    }

    /// Events emitted by one stage.
    pub fn for_stage(&self, stage: &str) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|(s, _)| s == stage)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl DiagSink for CollectSink {
    fn emit(&self, stage: &'static str, message: &str) {
        self.events.lock().push((stage.to_string(), message.to_string()));
    }
}

#[cfg(test)]
#[path = "diag_tests.rs"]
mod tests;
