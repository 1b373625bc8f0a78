// libt4t-rs/libt4t/src/trace/mod.rs
//! Human-readable trace of every decision the tag makes.

pub mod event;
pub mod sink;

pub use event::TraceEvent;
pub use sink::{LogSink, NullSink, RecordingSink, TRACE_TARGET, TraceSink};
