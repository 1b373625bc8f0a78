// libt4t-rs/libt4t/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// File identifier - Newtype Pattern (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId([u8; 2]);

impl FileId {
    /// Capability Container file
    pub const CAPABILITY_CONTAINER: Self = Self([0xE1, 0x03]);
    /// NDEF file
    pub const NDEF: Self = Self([0xE1, 0x04]);

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

impl TryFrom<&[u8]> for FileId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0))
    }
}

/// Application identifier (7 バイト)
///
/// Compared by value against the candidate carried in a SELECT by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid([u8; 7]);

impl Aid {
    /// NDEF Tag Application, mapping version 1.0
    pub const NDEF_TAG_V1: Self = Self([0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x00]);
    /// NDEF Tag Application, mapping version 2.0
    pub const NDEF_TAG_V2: Self = Self([0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01]);
    /// All-zero wildcard some readers send
    pub const WILDCARD: Self = Self([0x00; 7]);

    pub const fn from_bytes(bytes: [u8; 7]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 7] {
        &self.0
    }

    /// True when `candidate` is byte-for-byte this AID. Candidates of any
    /// other length never match.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        self.0[..] == *candidate
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 7 {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 7];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// StatusWord (SW1 SW2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord(u16);

impl StatusWord {
    pub const SUCCESS: Self = Self(0x9000);
    pub const UNKNOWN_COMMAND: Self = Self(0x6F00);
    pub const FILE_NOT_FOUND: Self = Self(0x6A82);
    pub const WRONG_PARAMETERS: Self = Self(0x6B00);
    pub const COMMAND_NOT_ALLOWED: Self = Self(0x6986);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [sw1, sw2] = self.to_be_bytes();
        write!(f, "{:02X} {:02X}", sw1, sw2)
    }
}

/// Why the contactless link went away, as reported by the host stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeactivationReason {
    #[display(fmt = "link lost")]
    LinkLoss,
    #[display(fmt = "deselected")]
    Deselected,
    #[display(fmt = "code {}", _0)]
    Other(i32),
}

impl DeactivationReason {
    pub fn code(&self) -> i32 {
        match self {
            Self::LinkLoss => 0,
            Self::Deselected => 1,
            Self::Other(code) => *code,
        }
    }
}

impl From<i32> for DeactivationReason {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::LinkLoss,
            1 => Self::Deselected,
            other => Self::Other(other),
        }
    }
}
