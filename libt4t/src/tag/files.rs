// libt4t-rs/libt4t/src/tag/files.rs

use crate::constants::NLEN_SIZE;
use crate::protocol::parser;
use crate::{Error, Result};

/// Return `len` bytes at `offset`, or `OutOfBounds` if any of them lies
/// past the end of `content`. Never clamps.
pub fn read_range(content: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    match offset.checked_add(len) {
        Some(end) if end <= content.len() => Ok(&content[offset..end]),
        _ => Err(Error::OutOfBounds {
            offset,
            length: len,
            size: content.len(),
        }),
    }
}

/// Backing storage of the NDEF file: fixed capacity, NLEN prefix first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefFile {
    content: Vec<u8>,
}

impl NdefFile {
    /// Zero-filled file, which also means NLEN = 0 (no message).
    pub fn new(capacity: usize) -> Self {
        Self {
            content: vec![0u8; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.content.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn read(&self, offset: usize, len: usize) -> Result<&[u8]> {
        read_range(&self.content, offset, len)
    }

    /// Copy `data` in at `offset`. The file never grows: a write past the
    /// capacity fails without touching the content.
    pub fn write(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let capacity = self.content.len();
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= capacity)
            .ok_or(Error::OutOfBounds {
                offset,
                length: data.len(),
                size: capacity,
            })?;
        self.content[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Current big-endian NLEN prefix.
    pub fn nlen(&self) -> Result<u16> {
        parser::be_u16_at(&self.content, 0)
    }

    /// The `len` message bytes following the prefix.
    pub fn message(&self, len: usize) -> Result<&[u8]> {
        self.read(NLEN_SIZE, len)
    }
}
