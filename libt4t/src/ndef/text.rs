// libt4t-rs/libt4t/src/ndef/text.rs

use crate::ndef::record::NdefRecord;
use crate::{Error, Result};

const STATUS_UTF16: u8 = 0x80;
const STATUS_LANG_LEN_MASK: u8 = 0x3F;

/// Text encoding selected by bit 7 of the status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEncoding {
    #[display(fmt = "UTF-8")]
    Utf8,
    #[display(fmt = "UTF-16")]
    Utf16,
}

/// Decoded well-known text record (RTD "T").
///
/// Payload layout: status(1) + language(n) + text. Status bit 7 is the
/// encoding, bits 0-5 are `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRecord {
    pub encoding: TextEncoding,
    pub language: String,
    pub text: String,
}

impl TextRecord {
    /// Decode a text record payload.
    pub fn decode_payload(payload: &[u8]) -> Result<Self> {
        let status = *payload
            .first()
            .ok_or_else(|| text_err("empty payload"))?;
        let encoding = if status & STATUS_UTF16 == 0 {
            TextEncoding::Utf8
        } else {
            TextEncoding::Utf16
        };
        let lang_len = (status & STATUS_LANG_LEN_MASK) as usize;

        let language = payload.get(1..1 + lang_len).ok_or_else(|| {
            text_err(&format!(
                "language code of {} bytes exceeds payload of {} bytes",
                lang_len,
                payload.len()
            ))
        })?;
        let body = &payload[1 + lang_len..];

        let text = match encoding {
            TextEncoding::Utf8 => std::str::from_utf8(body)
                .map_err(|e| text_err(&format!("invalid UTF-8: {}", e)))?
                .to_string(),
            TextEncoding::Utf16 => decode_utf16(body)?,
        };

        Ok(Self {
            encoding,
            language: String::from_utf8_lossy(language).into_owned(),
            text,
        })
    }
}

impl TryFrom<&NdefRecord> for TextRecord {
    type Error = Error;

    fn try_from(record: &NdefRecord) -> Result<Self> {
        if !record.is_text() {
            return Err(text_err(&format!(
                "not a text record (tnf {}, type {})",
                record.tnf,
                crate::utils::bytes_to_hex(&record.record_type)
            )));
        }
        Self::decode_payload(&record.payload)
    }
}

/// UTF-16 with an optional byte-order mark; big-endian when absent.
fn decode_utf16(body: &[u8]) -> Result<String> {
    if body.len() % 2 != 0 {
        return Err(text_err(&format!("odd UTF-16 length {}", body.len())));
    }

    let (little_endian, body) = match body {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, body),
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little_endian {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();

    String::from_utf16(&units).map_err(|e| text_err(&format!("invalid UTF-16: {}", e)))
}

fn text_err(msg: &str) -> Error {
    Error::TextRecord(msg.to_string())
}
