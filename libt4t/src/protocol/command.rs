// libt4t-rs/libt4t/src/protocol/command.rs

use crate::constants::{
    INS_READ_BINARY, INS_SELECT, INS_UPDATE_BINARY, SELECT_BY_FILE_ID, SELECT_BY_NAME,
    SELECT_FIRST_OCCURRENCE,
};
use crate::types::{Aid, FileId};

/// Reader-side command builder. The tag decodes incoming bytes through
/// [`CommandApdu`](crate::protocol::CommandApdu); this enum produces those
/// bytes for the mock reader, tests and benches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SELECT by DF name. Carries raw bytes so malformed AIDs can be sent.
    SelectAid(Vec<u8>),
    /// SELECT by file identifier.
    SelectFile(Vec<u8>),
    ReadBinary {
        offset: u16,
        le: u8,
    },
    UpdateBinary {
        offset: u16,
        data: Vec<u8>,
    },
}

impl Command {
    pub fn select_aid(aid: Aid) -> Self {
        Self::SelectAid(aid.as_bytes().to_vec())
    }

    pub fn select_file(id: FileId) -> Self {
        Self::SelectFile(id.as_bytes().to_vec())
    }

    /// Return the instruction byte.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::SelectAid(_) | Self::SelectFile(_) => INS_SELECT,
            Self::ReadBinary { .. } => INS_READ_BINARY,
            Self::UpdateBinary { .. } => INS_UPDATE_BINARY,
        }
    }

    /// Encode into raw APDU bytes (CLA is always 0x00).
    ///
    /// Data fields longer than 255 bytes do not fit a short APDU; callers are
    /// expected to chunk them, see `MockReader::write_ndef`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SelectAid(aid) => {
                // P2 = 0x00: first or only occurrence, return FCI
                let mut buf = vec![0x00, INS_SELECT, SELECT_BY_NAME, 0x00, aid.len() as u8];
                buf.extend_from_slice(aid);
                buf.push(0x00); // Le
                buf
            }
            Self::SelectFile(id) => {
                let mut buf = vec![
                    0x00,
                    INS_SELECT,
                    SELECT_BY_FILE_ID,
                    SELECT_FIRST_OCCURRENCE,
                    id.len() as u8,
                ];
                buf.extend_from_slice(id);
                buf
            }
            Self::ReadBinary { offset, le } => {
                let [p1, p2] = offset.to_be_bytes();
                vec![0x00, INS_READ_BINARY, p1, p2, *le]
            }
            Self::UpdateBinary { offset, data } => {
                let [p1, p2] = offset.to_be_bytes();
                let mut buf = vec![0x00, INS_UPDATE_BINARY, p1, p2, data.len() as u8];
                buf.extend_from_slice(data);
                buf
            }
        }
    }
}
