// libt4t-rs/libt4t/src/prelude.rs

pub use crate::ndef::{NdefMessage, NdefRecord, TextRecord, Tnf};
pub use crate::protocol::{Command, CommandApdu, ResponseApdu};
pub use crate::service::{ApduService, MockReader};
pub use crate::tag::{CapabilityContainer, SessionSnapshot, Tag, TagBuilder};
pub use crate::trace::{LogSink, NullSink, RecordingSink, TraceEvent, TraceSink};
pub use crate::{Aid, DeactivationReason, Error, FileId, Result, StatusWord};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
