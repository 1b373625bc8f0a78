// libt4t-rs/libt4t/src/tag/session.rs

use crate::Result;
use crate::tag::files::NdefFile;
use crate::tag::reassembly::{Progress, Reassembly};
use crate::types::FileId;

/// Everything that changes while a reader is connected: the selection, the
/// NDEF file content and the reassembly bookkeeping. The tag keeps exactly
/// one of these behind its lock.
#[derive(Debug, Clone)]
pub struct Session {
    selected_file: Option<FileId>,
    ndef_file_id: FileId,
    ndef: NdefFile,
    reassembly: Reassembly,
}

/// Copy of the session fields, for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub selected_file: Option<FileId>,
    pub max_offset_written: usize,
    pub declared_message_length: Option<u16>,
    pub message_reassembled: bool,
}

impl Session {
    pub fn new(ndef_file_id: FileId, ndef_capacity: usize) -> Self {
        Self {
            selected_file: None,
            ndef_file_id,
            ndef: NdefFile::new(ndef_capacity),
            reassembly: Reassembly::new(),
        }
    }

    pub fn selected_file(&self) -> Option<FileId> {
        self.selected_file
    }

    pub fn is_ndef_selected(&self) -> bool {
        self.selected_file == Some(self.ndef_file_id)
    }

    pub fn ndef(&self) -> &NdefFile {
        &self.ndef
    }

    /// Clear the selection and the reassembly state. File content is kept.
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.reassembly.reset();
    }

    /// Select `id`. Selecting the NDEF file starts a fresh write sequence.
    pub fn select(&mut self, id: FileId) {
        if id == self.ndef_file_id {
            self.reassembly.reset();
        }
        self.selected_file = Some(id);
    }

    /// Store `data` at `offset` and advance reassembly. Nothing changes when
    /// the write is out of bounds.
    pub fn write(&mut self, offset: usize, data: &[u8]) -> Result<Progress> {
        self.ndef.write(offset, data)?;
        Ok(self.reassembly.record_write(&self.ndef, offset, data.len()))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_file: self.selected_file,
            max_offset_written: self.reassembly.max_offset_written(),
            declared_message_length: self.reassembly.declared_length(),
            message_reassembled: self.reassembly.is_reassembled(),
        }
    }
}
