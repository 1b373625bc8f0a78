// libt4t-rs/libt4t/src/protocol/apdu.rs

use crate::constants::{APDU_DATA_OFFSET, APDU_HEADER_LEN, APDU_LENGTH_INDEX};
use crate::protocol::parser;
use crate::{Error, Result};

/// Decoded view of a raw command APDU.
///
/// Format: [CLA(1)] [INS(1)] [P1(1)] [P2(1)] [Lc/Le(1)]? [Data(Lc)]?
///
/// Only the 4-byte header is validated on decode. Whether byte 4 is Lc or Le
/// depends on the instruction, so the handlers ask for [`data`] or
/// [`expected_length`] themselves.
///
/// [`data`]: CommandApdu::data
/// [`expected_length`]: CommandApdu::expected_length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandApdu<'a> {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    raw: &'a [u8],
}

impl<'a> CommandApdu<'a> {
    /// Decode the header of a raw command.
    pub fn decode(raw: &'a [u8]) -> Result<Self> {
        if raw.len() < APDU_HEADER_LEN {
            return Err(Error::NotApdu { actual: raw.len() });
        }
        Ok(Self {
            cla: raw[0],
            ins: raw[1],
            p1: raw[2],
            p2: raw[3],
            raw,
        })
    }

    /// The raw bytes this view was decoded from.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// READ/UPDATE BINARY offset: `(P1 << 8) | P2`.
    pub fn offset(&self) -> u16 {
        u16::from_be_bytes([self.p1, self.p2])
    }

    /// Byte 4 read as Lc, if present.
    pub fn lc(&self) -> Option<u8> {
        self.raw.get(APDU_LENGTH_INDEX).copied()
    }

    /// Byte 4 read as Le, or 0 when the command is header only.
    pub fn expected_length(&self) -> usize {
        self.lc().map(usize::from).unwrap_or(0)
    }

    /// The data field for commands that must carry one (SELECT).
    ///
    /// Requires the Lc byte and at least `5 + Lc` bytes in total. Trailing
    /// bytes past the data field (an Le) are ignored.
    pub fn data(&self) -> Result<&'a [u8]> {
        let lc = parser::byte_at(self.raw, APDU_LENGTH_INDEX)? as usize;
        parser::slice_at(self.raw, APDU_DATA_OFFSET, lc)
    }

    /// The data field for commands where it is optional (UPDATE BINARY): a
    /// header-only command carries no data, otherwise the same rules as
    /// [`CommandApdu::data`] apply, so a frame shorter than `5 + Lc` is
    /// rejected instead of being under-sliced.
    pub fn data_or_empty(&self) -> Result<&'a [u8]> {
        if self.raw.len() == APDU_HEADER_LEN {
            return Ok(&[]);
        }
        self.data()
    }
}
