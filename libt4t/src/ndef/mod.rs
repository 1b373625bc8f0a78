// libt4t-rs/libt4t/src/ndef/mod.rs
//! NDEF message decoding.
//!
//! The tag exposes the raw message body behind the 2-byte NLEN prefix, so
//! there is no TLV wrapper to strip here.

pub mod record;
pub mod text;

pub use record::{NdefMessage, NdefRecord, RTD_TEXT, Tnf};
pub use text::{TextEncoding, TextRecord};

/// Parse one complete NDEF message body.
pub fn decode_message(data: &[u8]) -> crate::Result<NdefMessage> {
    NdefMessage::parse(data)
}
