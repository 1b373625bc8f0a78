// libt4t-rs/libt4t/src/tag/capability.rs

use crate::constants::CC_LEN;
use crate::protocol::parser;
use crate::types::FileId;
use crate::{Error, Result};

/// NFC Forum Type 4 Tag Capability Container (mapping version 2.0).
///
/// Format: [CCLEN(2)] [Version(1)] [MLe(2)] [MLc(2)] [NDEF File Control TLV(8)]
/// TLV: T=0x04 L=0x06 [File ID(2)] [Max NDEF size(2)] [Read access(1)] [Write access(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityContainer {
    pub mapping_version: u8,
    /// Maximum data a single READ BINARY may return (MLe)
    pub max_read_len: u16,
    /// Maximum data a single UPDATE BINARY may carry (MLc)
    pub max_write_len: u16,
    pub ndef_file_id: FileId,
    pub max_ndef_size: u16,
    pub read_access: u8,
    pub write_access: u8,
}

impl Default for CapabilityContainer {
    fn default() -> Self {
        Self {
            mapping_version: 0x20,
            max_read_len: 0x003B,
            max_write_len: 0x0034,
            ndef_file_id: FileId::NDEF,
            max_ndef_size: 0x0FFF,
            read_access: 0x00,
            write_access: 0x00,
        }
    }
}

impl CapabilityContainer {
    const NDEF_FILE_CONTROL_TAG: u8 = 0x04;
    const NDEF_FILE_CONTROL_LEN: u8 = 0x06;

    /// Encode into the 15 bytes of the CC file.
    pub fn encode(&self) -> [u8; CC_LEN] {
        let mut out = [0u8; CC_LEN];
        out[0..2].copy_from_slice(&(CC_LEN as u16).to_be_bytes());
        out[2] = self.mapping_version;
        out[3..5].copy_from_slice(&self.max_read_len.to_be_bytes());
        out[5..7].copy_from_slice(&self.max_write_len.to_be_bytes());
        out[7] = Self::NDEF_FILE_CONTROL_TAG;
        out[8] = Self::NDEF_FILE_CONTROL_LEN;
        out[9..11].copy_from_slice(self.ndef_file_id.as_bytes());
        out[11..13].copy_from_slice(&self.max_ndef_size.to_be_bytes());
        out[13] = self.read_access;
        out[14] = self.write_access;
        out
    }

    /// Parse a CC file as read by a reader. Trailing bytes past CCLEN are
    /// ignored.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let cc_len = parser::be_u16_at(raw, 0)? as usize;
        if cc_len < CC_LEN {
            return Err(cc_err(format!("CCLEN {} below {}", cc_len, CC_LEN)));
        }
        parser::ensure_len(raw, CC_LEN)?;
        if raw[7] != Self::NDEF_FILE_CONTROL_TAG || raw[8] != Self::NDEF_FILE_CONTROL_LEN {
            return Err(cc_err(format!(
                "expected NDEF File Control TLV 04 06, found {:02X} {:02X}",
                raw[7], raw[8]
            )));
        }
        Ok(Self {
            mapping_version: raw[2],
            max_read_len: parser::be_u16_at(raw, 3)?,
            max_write_len: parser::be_u16_at(raw, 5)?,
            ndef_file_id: FileId::from_bytes([raw[9], raw[10]]),
            max_ndef_size: parser::be_u16_at(raw, 11)?,
            read_access: raw[13],
            write_access: raw[14],
        })
    }
}

fn cc_err(msg: String) -> Error {
    Error::CapabilityContainer(msg)
}
