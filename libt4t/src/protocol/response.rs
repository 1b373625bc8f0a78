// libt4t-rs/libt4t/src/protocol/response.rs

use crate::protocol::parser;
use crate::types::StatusWord;
use crate::Result;

/// Response APDU: [Payload(n)] [SW1(1)] [SW2(1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseApdu {
    pub payload: Vec<u8>,
    pub status: StatusWord,
}

impl ResponseApdu {
    /// Successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            payload,
            status: StatusWord::SUCCESS,
        }
    }

    /// Bare status word with no payload.
    pub fn status(status: StatusWord) -> Self {
        Self {
            payload: Vec::new(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Encode into the bytes handed back to the host transport.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload.len() + 2);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.status.to_be_bytes());
        out
    }

    /// Split raw response bytes into payload and status word. Used by the
    /// reader side; the tag itself only encodes.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, 2)?;
        let split = raw.len() - 2;
        let status = StatusWord::new(parser::be_u16_at(raw, split)?);
        Ok(Self {
            payload: raw[..split].to_vec(),
            status,
        })
    }
}

impl From<crate::Error> for ResponseApdu {
    fn from(err: crate::Error) -> Self {
        Self::status(err.status_word())
    }
}
