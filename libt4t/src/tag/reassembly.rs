// libt4t-rs/libt4t/src/tag/reassembly.rs

use crate::constants::NLEN_SIZE;
use crate::tag::files::NdefFile;

/// What a write did to the message currently being reassembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The current message was already handed to the decoder.
    AlreadyReassembled,
    /// Fewer than the two NLEN bytes have been written.
    AwaitingLength,
    /// NLEN is zero: the reader is mid-update and will write NLEN last.
    EmptyLength,
    /// NLEN is known but the body is not fully written yet.
    Incomplete { declared: u16, have: usize, need: usize },
    /// The whole message is present. Carries a copy so decoding can run
    /// without holding the session lock.
    Complete { declared: u16, message: Vec<u8> },
}

/// High-water mark and length tracking for an NDEF message written in
/// arbitrary chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reassembly {
    max_offset_written: usize,
    declared_length: Option<u16>,
    reassembled: bool,
}

impl Reassembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_offset_written(&self) -> usize {
        self.max_offset_written
    }

    pub fn declared_length(&self) -> Option<u16> {
        self.declared_length
    }

    pub fn is_reassembled(&self) -> bool {
        self.reassembled
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Account for `len` bytes just written at `offset` into `file`.
    ///
    /// NLEN is re-read on every call until the message completes, so a
    /// reader that rewrites the prefix last (NFC Forum update procedure)
    /// is handled. Completion is reported exactly once per reset.
    pub fn record_write(&mut self, file: &NdefFile, offset: usize, len: usize) -> Progress {
        self.max_offset_written = self.max_offset_written.max(offset + len);

        if self.reassembled {
            return Progress::AlreadyReassembled;
        }
        if self.max_offset_written < NLEN_SIZE {
            return Progress::AwaitingLength;
        }

        let declared = match file.nlen() {
            Ok(n) => n,
            Err(_) => return Progress::AwaitingLength,
        };
        self.declared_length = Some(declared);

        if declared == 0 {
            return Progress::EmptyLength;
        }

        let need = NLEN_SIZE + declared as usize;
        if self.max_offset_written < need {
            return Progress::Incomplete {
                declared,
                have: self.max_offset_written,
                need,
            };
        }

        match file.message(declared as usize) {
            Ok(message) => {
                self.reassembled = true;
                Progress::Complete {
                    declared,
                    message: message.to_vec(),
                }
            }
            // max_offset_written never exceeds the capacity, so this only
            // happens if the file was swapped underneath us.
            Err(_) => Progress::Incomplete {
                declared,
                have: self.max_offset_written,
                need,
            },
        }
    }
}
