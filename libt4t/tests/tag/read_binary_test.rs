#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use common::helpers::{read_binary, recording_tag, split, update_binary};
use libt4t::trace::TraceEvent;
use proptest::prelude::*;

#[test]
fn read_without_selection() {
    let (tag, sink) = recording_tag();
    assert_eq!(tag.process_command(&read_binary(0, 15)), SW_NOT_ALLOWED);
    assert!(sink.contains(&TraceEvent::NoFileSelected));
}

#[test]
fn read_full_capability_container() {
    let (tag, _) = recording_tag();
    tag.process_command(&select_app_v1());
    tag.process_command(&select_cc());
    let resp = tag.process_command(&read_binary(0, 15));
    let (data, sw) = split(&resp);
    assert_eq!(sw, SW_OK);
    assert_eq!(data, default_cc_bytes().as_slice());
}

#[test]
fn read_cc_in_pieces() {
    let (tag, _) = recording_tag();
    tag.process_command(&select_cc());
    let head = tag.process_command(&read_binary(0, 2));
    assert_eq!(head, vec![0x00, 0x0F, 0x90, 0x00]);
    let tail = tag.process_command(&read_binary(13, 2));
    assert_eq!(tail, vec![0x00, 0x00, 0x90, 0x00]);
}

#[test]
fn read_past_end_of_cc_is_rejected() {
    let (tag, sink) = recording_tag();
    tag.process_command(&select_cc());
    assert_eq!(tag.process_command(&read_binary(10, 10)), SW_WRONG_PARAMS);
    assert!(sink.contains(&TraceEvent::ReadOutOfBounds {
        offset: 10,
        length: 10,
        size: 15
    }));
}

#[test]
fn header_only_read_returns_nothing() {
    let (tag, _) = recording_tag();
    tag.process_command(&select_cc());
    assert_eq!(tag.process_command(&[0x00, 0xB0, 0x00, 0x00]), SW_OK);
}

#[test]
fn read_fresh_ndef_file() {
    let (tag, _) = common::helpers::ndef_selected_tag();
    assert_eq!(
        tag.process_command(&read_binary(0, 2)),
        vec![0x00, 0x00, 0x90, 0x00]
    );
    // last byte of a 4096-byte file
    assert_eq!(
        tag.process_command(&read_binary(4095, 1)),
        vec![0x00, 0x90, 0x00]
    );
    assert_eq!(tag.process_command(&read_binary(4095, 2)), SW_WRONG_PARAMS);
}

proptest! {
    #[test]
    fn read_after_write_returns_written_bytes(
        offset in 0u16..4000,
        data in prop::collection::vec(any::<u8>(), 1..=52),
    ) {
        let (tag, _) = common::helpers::ndef_selected_tag();
        prop_assert_eq!(tag.process_command(&update_binary(offset, &data)), SW_OK.to_vec());

        let resp = tag.process_command(&read_binary(offset, data.len() as u8));
        let (read, sw) = split(&resp);
        prop_assert_eq!(sw, SW_OK);
        prop_assert_eq!(read, data.as_slice());
    }
}
