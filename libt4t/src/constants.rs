// libt4t-rs/libt4t/src/constants.rs
//! Common protocol constants used across the crate

use crate::types::Aid;

/// CLA INS P1 P2
pub const APDU_HEADER_LEN: usize = 4;

/// Index of the Lc/Le byte, directly after the header
pub const APDU_LENGTH_INDEX: usize = 4;

/// First byte of the command data field
pub const APDU_DATA_OFFSET: usize = 5;

/// ISO 7816-4 instruction codes handled by the tag
pub const INS_SELECT: u8 = 0xA4;
pub const INS_READ_BINARY: u8 = 0xB0;
pub const INS_UPDATE_BINARY: u8 = 0xD6;

/// SELECT P1 values: by DF name (AID) and by file identifier
pub const SELECT_BY_NAME: u8 = 0x04;
pub const SELECT_BY_FILE_ID: u8 = 0x00;

/// SELECT P2 the NFC Forum procedures use (first or only occurrence)
pub const SELECT_FIRST_OCCURRENCE: u8 = 0x0C;

/// A SELECT by file identifier needs the header, Lc and a 2-byte id
pub const SELECT_FILE_MIN_LEN: usize = 7;

/// Applications the tag answers to
pub const DEFAULT_AIDS: [Aid; 3] = [Aid::NDEF_TAG_V1, Aid::NDEF_TAG_V2, Aid::WILDCARD];

/// Capability Container length (CCLEN)
pub const CC_LEN: usize = 15;

/// Default NDEF file capacity, NLEN prefix included
pub const NDEF_FILE_CAPACITY: usize = 4096;

/// Largest capacity addressable with a 16-bit offset
pub const NDEF_FILE_MAX_CAPACITY: usize = u16::MAX as usize + 1;

/// Size of the big-endian NLEN prefix at the start of the NDEF file
pub const NLEN_SIZE: usize = 2;
