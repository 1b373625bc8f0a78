// libt4t-rs/libt4t/src/trace/sink.rs

use std::sync::Mutex;

use crate::trace::TraceEvent;

/// Log target used by [`LogSink`].
pub const TRACE_TARGET: &str = "libt4t::trace";

/// Receives trace events. Implementations decide where they end up (log,
/// UI, file); the tag only guarantees emission order.
///
/// Events are emitted after the session lock is released, so an
/// implementation may block or call back into the tag.
pub trait TraceSink: Send + Sync {
    fn emit(&self, event: &TraceEvent);
}

/// Forwards events to the `log` facade: failures at `warn`, everything else
/// at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&self, event: &TraceEvent) {
        if event.is_failure() {
            log::warn!(target: TRACE_TARGET, "{}", event);
        } else {
            log::debug!(target: TRACE_TARGET, "{}", event);
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&self, _event: &TraceEvent) {}
}

/// Keeps every event in memory, in order. Useful for tests and for UIs that
/// poll instead of subscribing.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.lock().clone()
    }

    /// Recorded events rendered as text lines.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.to_string()).collect()
    }

    /// True if any recorded event equals `event`.
    pub fn contains(&self, event: &TraceEvent) -> bool {
        self.lock().iter().any(|e| e == event)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<TraceEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TraceEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TraceSink for RecordingSink {
    fn emit(&self, event: &TraceEvent) {
        self.lock().push(event.clone());
    }
}
