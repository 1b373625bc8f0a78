// libt4t-rs/libt4t/src/trace/event.rs

use std::fmt;

use crate::types::{DeactivationReason, FileId};
use crate::utils::bytes_to_hex_spaced;

/// One decision point of command processing, in emission order.
///
/// Byte fields hold the raw bytes; `Display` renders them as spaced hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    CommandReceived(Vec<u8>),
    NotApdu {
        length: usize,
    },
    Header {
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
    },
    UnknownInstruction(u8),
    UnknownSelectMode(u8),
    MalformedLength {
        expected: usize,
        actual: usize,
    },
    AidReceived(Vec<u8>),
    AidMatched,
    AidRejected,
    FileIdReceived(Vec<u8>),
    FileSelected(FileId),
    FileNotFound,
    NoFileSelected,
    ReadData(Vec<u8>),
    ReadOutOfBounds {
        offset: usize,
        length: usize,
        size: usize,
    },
    WriteNotAllowed,
    WriteOutOfBounds {
        offset: usize,
        length: usize,
        capacity: usize,
    },
    BytesWritten {
        length: usize,
        offset: usize,
    },
    MessageLength(u16),
    EmptyMessageLength,
    AwaitingData {
        have: usize,
        need: usize,
    },
    MessageDecoded {
        records: usize,
    },
    TextDecoded(String),
    UnknownRecordType,
    TextRecordError(String),
    MessageDecodeFailed(String),
    Deactivated(DeactivationReason),
    ResponseSent(Vec<u8>),
}

impl TraceEvent {
    /// Events describing a rejected command or a failed decode.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::NotApdu { .. }
                | Self::UnknownInstruction(_)
                | Self::UnknownSelectMode(_)
                | Self::MalformedLength { .. }
                | Self::AidRejected
                | Self::FileNotFound
                | Self::NoFileSelected
                | Self::ReadOutOfBounds { .. }
                | Self::WriteNotAllowed
                | Self::WriteOutOfBounds { .. }
                | Self::TextRecordError(_)
                | Self::MessageDecodeFailed(_)
        )
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandReceived(raw) => {
                write!(f, "APDU command received: {}", bytes_to_hex_spaced(raw))
            }
            Self::NotApdu { length } => {
                write!(f, "received {} bytes that are not APDU-shaped", length)
            }
            Self::Header { cla, ins, p1, p2 } => write!(
                f,
                "APDU command: CLA={:02X}, INS={:02X}, P1={:02X}, P2={:02X}",
                cla, ins, p1, p2
            ),
            Self::UnknownInstruction(ins) => write!(f, "unknown instruction INS={:02X}", ins),
            Self::UnknownSelectMode(p1) => write!(f, "unknown P1 for SELECT: {:02X}", p1),
            Self::MalformedLength { expected, actual } => write!(
                f,
                "command has invalid length: expected {} bytes, got {}",
                expected, actual
            ),
            Self::AidReceived(aid) => write!(f, "AID received: {}", bytes_to_hex_spaced(aid)),
            Self::AidMatched => f.write_str("AID matches an expected application"),
            Self::AidRejected => f.write_str("AID does not match any expected application"),
            Self::FileIdReceived(id) => {
                write!(f, "file ID received: {}", bytes_to_hex_spaced(id))
            }
            Self::FileSelected(id) => write!(f, "file {} selected", id),
            Self::FileNotFound => f.write_str("unknown file ID"),
            Self::NoFileSelected => f.write_str("no file selected"),
            Self::ReadData(data) => {
                write!(f, "READ BINARY data: {}", bytes_to_hex_spaced(data))
            }
            Self::ReadOutOfBounds {
                offset,
                length,
                size,
            } => write!(
                f,
                "read of {} bytes at offset {} exceeds file size {}",
                length, offset, size
            ),
            Self::WriteNotAllowed => f.write_str("NDEF file is not selected for writing"),
            Self::WriteOutOfBounds {
                offset,
                length,
                capacity,
            } => write!(
                f,
                "write of {} bytes at offset {} exceeds NDEF file capacity {}",
                length, offset, capacity
            ),
            Self::BytesWritten { length, offset } => write!(
                f,
                "wrote {} bytes to NDEF file at offset {}",
                length, offset
            ),
            Self::MessageLength(len) => write!(f, "NDEF message length: {}", len),
            Self::EmptyMessageLength => {
                f.write_str("NDEF message length is 0, awaiting message body")
            }
            Self::AwaitingData { have, need } => write!(
                f,
                "awaiting more data: have {} bytes, need {}",
                have, need
            ),
            Self::MessageDecoded { records } => {
                write!(f, "NDEF message decoded: {} record(s)", records)
            }
            Self::TextDecoded(text) => write!(f, "received text: {}", text),
            Self::UnknownRecordType => f.write_str("received NDEF record of unknown type"),
            Self::TextRecordError(msg) => write!(f, "failed to parse text record: {}", msg),
            Self::MessageDecodeFailed(msg) => {
                write!(f, "failed to parse NDEF message: {}", msg)
            }
            Self::Deactivated(reason) => {
                write!(f, "NFC deactivated, reason: {} ({})", reason.code(), reason)
            }
            Self::ResponseSent(raw) => {
                write!(f, "sending response: {}", bytes_to_hex_spaced(raw))
            }
        }
    }
}
