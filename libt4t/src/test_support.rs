//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common tag setup so tests across the crate and
//! tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::Arc;

use crate::constants::{DEFAULT_AIDS, NDEF_FILE_CAPACITY};
use crate::protocol::Command;
use crate::tag::{CapabilityContainer, Tag};
use crate::trace::RecordingSink;
use crate::types::{Aid, FileId};

/// Build a default Tag whose trace goes to a RecordingSink, and return both.
#[doc(hidden)]
pub fn recording_tag() -> (Tag, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let tag = Tag::from_parts(
        DEFAULT_AIDS.to_vec(),
        CapabilityContainer::default(),
        NDEF_FILE_CAPACITY,
        sink.clone(),
    );
    (tag, sink)
}

/// Convenience: SELECT the NDEF application and then `file`, asserting
/// nothing. Returns the two responses.
#[doc(hidden)]
pub fn select_path(tag: &Tag, file: FileId) -> (Vec<u8>, Vec<u8>) {
    let app = tag.process_command(&Command::select_aid(Aid::NDEF_TAG_V1).encode());
    let file = tag.process_command(&Command::select_file(file).encode());
    (app, file)
}

/// Encode an UPDATE BINARY with `data` at `offset`.
#[doc(hidden)]
pub fn update_binary(offset: u16, data: &[u8]) -> Vec<u8> {
    Command::UpdateBinary {
        offset,
        data: data.to_vec(),
    }
    .encode()
}

/// Encode a READ BINARY of `le` bytes at `offset`.
#[doc(hidden)]
pub fn read_binary(offset: u16, le: u8) -> Vec<u8> {
    Command::ReadBinary { offset, le }.encode()
}
