// libt4t-rs/libt4t/src/ndef/record.rs

use crate::protocol::parser;
use crate::{Error, Result};

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// Bits 0-5 of a text record status byte
const TEXT_LANG_MAX: usize = 0x3F;

/// Well-known type of a text record
pub const RTD_TEXT: &[u8] = b"T";

/// Type Name Format (3 bits of the record header)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Tnf {
    #[display(fmt = "empty")]
    Empty = 0x00,
    #[display(fmt = "well-known")]
    WellKnown = 0x01,
    #[display(fmt = "media")]
    Media = 0x02,
    #[display(fmt = "absolute URI")]
    AbsoluteUri = 0x03,
    #[display(fmt = "external")]
    External = 0x04,
    #[display(fmt = "unknown")]
    Unknown = 0x05,
    #[display(fmt = "unchanged")]
    Unchanged = 0x06,
}

impl Tnf {
    /// Decode the low 3 bits of a header byte. The reserved value 0x07 is
    /// treated as [`Tnf::Unknown`].
    pub fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::Media,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x06 => Self::Unchanged,
            _ => Self::Unknown,
        }
    }
}

/// Record header flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    mb: bool,
    me: bool,
    cf: bool,
    sr: bool,
    il: bool,
    tnf: Tnf,
}

impl Header {
    fn parse(byte: u8) -> Self {
        Self {
            mb: byte & FLAG_MB != 0,
            me: byte & FLAG_ME != 0,
            cf: byte & FLAG_CF != 0,
            sr: byte & FLAG_SR != 0,
            il: byte & FLAG_IL != 0,
            tnf: Tnf::from_bits(byte),
        }
    }
}

/// A single logical NDEF record. Chunked records are already joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    pub tnf: Tnf,
    pub record_type: Vec<u8>,
    pub id: Vec<u8>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    pub fn new(tnf: Tnf, record_type: Vec<u8>, id: Vec<u8>, payload: Vec<u8>) -> Self {
        Self {
            tnf,
            record_type,
            id,
            payload,
        }
    }

    /// Build a well-known text record with UTF-8 text. The status byte has
    /// six bits for the language tag length, so tags over 63 bytes fail.
    pub fn text(language: &str, text: &str) -> Result<Self> {
        let lang = language.as_bytes();
        if lang.len() > TEXT_LANG_MAX {
            return Err(format_err(&format!(
                "language tag of {} bytes exceeds {}",
                lang.len(),
                TEXT_LANG_MAX
            )));
        }
        let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
        payload.push(lang.len() as u8);
        payload.extend_from_slice(lang);
        payload.extend_from_slice(text.as_bytes());
        Ok(Self::new(Tnf::WellKnown, RTD_TEXT.to_vec(), Vec::new(), payload))
    }

    /// Well-known type `T`.
    pub fn is_text(&self) -> bool {
        self.tnf == Tnf::WellKnown && self.record_type == RTD_TEXT
    }

    /// Encode as one unchunked record, short form when the payload fits.
    /// Type and id lengths are single bytes and the long payload length is
    /// 32 bits; anything larger is refused instead of truncated.
    fn encode_into(&self, out: &mut Vec<u8>, first: bool, last: bool) -> Result<()> {
        let type_len = u8::try_from(self.record_type.len())
            .map_err(|_| format_err(&format!("type of {} bytes", self.record_type.len())))?;
        let id_len = u8::try_from(self.id.len())
            .map_err(|_| format_err(&format!("id of {} bytes", self.id.len())))?;
        let payload_len = u32::try_from(self.payload.len())
            .map_err(|_| format_err(&format!("payload of {} bytes", self.payload.len())))?;

        let short = payload_len <= u8::MAX as u32;
        let mut header = self.tnf as u8;
        if first {
            header |= FLAG_MB;
        }
        if last {
            header |= FLAG_ME;
        }
        if short {
            header |= FLAG_SR;
        }
        if id_len != 0 {
            header |= FLAG_IL;
        }

        out.push(header);
        out.push(type_len);
        if short {
            out.push(payload_len as u8);
        } else {
            out.extend_from_slice(&payload_len.to_be_bytes());
        }
        if id_len != 0 {
            out.push(id_len);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// An ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<NdefRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode the message body (what follows NLEN in the NDEF file).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let last = self.records.len().saturating_sub(1);
        for (i, record) in self.records.iter().enumerate() {
            record.encode_into(&mut out, i == 0, i == last)?;
        }
        Ok(out)
    }

    /// Parse a complete NDEF message.
    ///
    /// Layout per record: header(1) + type_len(1) + payload_len(1 or 4) +
    /// id_len(0 or 1) + type + id + payload. The whole message is rejected
    /// if any record is truncated or the MB/ME/CF framing is inconsistent.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(format_err("empty message"));
        }

        let mut records = Vec::new();
        let mut idx = 0usize;
        let mut first = true;
        let mut chunk: Option<NdefRecord> = None;

        loop {
            let header = Header::parse(take_byte(data, &mut idx, "header")?);

            if first && !header.mb {
                return Err(format_err("expected MB flag on first record"));
            }
            if !first && header.mb {
                return Err(format_err("unexpected MB flag"));
            }
            if header.cf && header.me {
                return Err(format_err("unexpected ME flag in non-trailing chunk"));
            }
            if chunk.is_some() {
                if header.il {
                    return Err(format_err("unexpected IL flag in non-leading chunk"));
                }
                if header.tnf != Tnf::Unchanged {
                    return Err(format_err("expected TNF_UNCHANGED in non-leading chunk"));
                }
            } else if header.tnf == Tnf::Unchanged {
                return Err(format_err("unexpected TNF_UNCHANGED in first chunk or unchunked record"));
            }

            let type_len = take_byte(data, &mut idx, "type length")? as usize;
            let payload_len = if header.sr {
                take_byte(data, &mut idx, "payload length")? as usize
            } else {
                let len = parser::be_u32_at(data, idx)
                    .map_err(|_| format_err("truncated payload length"))?;
                idx += 4;
                len as usize
            };
            let id_len = if header.il {
                take_byte(data, &mut idx, "id length")? as usize
            } else {
                0
            };

            if chunk.is_some() && type_len != 0 {
                return Err(format_err("expected zero-length type in non-leading chunk"));
            }

            let record_type = take(data, &mut idx, type_len, "type")?.to_vec();
            let id = take(data, &mut idx, id_len, "id")?.to_vec();
            let payload = take(data, &mut idx, payload_len, "payload")?;

            if header.cf {
                if let Some(head) = chunk.as_mut() {
                    head.payload.extend_from_slice(payload);
                } else {
                    chunk = Some(NdefRecord::new(header.tnf, record_type, id, payload.to_vec()));
                }
            } else if let Some(mut head) = chunk.take() {
                head.payload.extend_from_slice(payload);
                records.push(head);
            } else {
                let record = NdefRecord::new(header.tnf, record_type, id, payload.to_vec());
                validate_empty(&record)?;
                records.push(record);
            }

            first = false;
            if header.me {
                break;
            }
        }

        if idx != data.len() {
            return Err(format_err(&format!(
                "{} trailing bytes after ME record",
                data.len() - idx
            )));
        }

        Ok(Self { records })
    }
}

fn format_err(msg: &str) -> Error {
    Error::NdefFormat(msg.to_string())
}

fn take<'a>(data: &'a [u8], idx: &mut usize, len: usize, what: &str) -> Result<&'a [u8]> {
    let s = parser::slice_at(data, *idx, len).map_err(|_| {
        format_err(&format!(
            "truncated {}: need {} bytes at offset {}, message is {} bytes",
            what,
            len,
            *idx,
            data.len()
        ))
    })?;
    *idx += len;
    Ok(s)
}

fn take_byte(data: &[u8], idx: &mut usize, what: &str) -> Result<u8> {
    Ok(take(data, idx, 1, what)?[0])
}

fn validate_empty(record: &NdefRecord) -> Result<()> {
    if record.tnf == Tnf::Empty
        && (!record.record_type.is_empty() || !record.id.is_empty() || !record.payload.is_empty())
    {
        return Err(format_err("TNF_EMPTY record with type, id or payload"));
    }
    Ok(())
}
