// libt4t-rs/libt4t/src/error.rs

use thiserror::Error;

use crate::types::StatusWord;

/// 共通エラー型
///
/// Every variant maps onto the status word the tag answers with, see
/// [`Error::status_word`]. Decode failures never reach the reader; they are
/// only traced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not an APDU: {actual} bytes, at least 4 required")]
    NotApdu { actual: usize },

    #[error("invalid command length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unsupported instruction: {0:#04x}")]
    UnsupportedInstruction(u8),

    #[error("unsupported SELECT P1: {0:#04x}")]
    UnsupportedSelect(u8),

    #[error("application not found")]
    UnknownAid,

    #[error("file not found: {0:02X?}")]
    FileNotFound(Vec<u8>),

    #[error("out of bounds: offset {offset} + length {length} exceeds size {size}")]
    OutOfBounds {
        offset: usize,
        length: usize,
        size: usize,
    },

    #[error("command not allowed: {0}")]
    NotAllowed(&'static str),

    #[error("ndef format error: {0}")]
    NdefFormat(String),

    #[error("text record error: {0}")]
    TextRecord(String),

    #[error("malformed capability container: {0}")]
    CapabilityContainer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reader side: the tag answered with something other than 90 00.
    #[error("tag returned status {0}")]
    Status(StatusWord),
}

impl Error {
    /// Status word reported to the reader for this failure.
    pub fn status_word(&self) -> StatusWord {
        match self {
            Error::NotApdu { .. }
            | Error::InvalidLength { .. }
            | Error::UnsupportedInstruction(_)
            | Error::UnsupportedSelect(_)
            | Error::UnknownAid => StatusWord::UNKNOWN_COMMAND,
            Error::FileNotFound(_) => StatusWord::FILE_NOT_FOUND,
            Error::OutOfBounds { .. } => StatusWord::WRONG_PARAMETERS,
            Error::NotAllowed(_) => StatusWord::COMMAND_NOT_ALLOWED,
            // Not reachable from the dispatcher; kept total for callers that
            // surface decode or builder errors themselves.
            Error::NdefFormat(_)
            | Error::TextRecord(_)
            | Error::CapabilityContainer(_)
            | Error::InvalidConfig(_) => {
                StatusWord::UNKNOWN_COMMAND
            }
            Error::Status(sw) => *sw,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
