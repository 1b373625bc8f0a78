#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use common::helpers::{ndef_selected_tag, recording_tag, update_binary};
use libt4t::trace::TraceEvent;
use proptest::prelude::*;

#[test]
fn write_requires_ndef_selection() {
    let (tag, sink) = recording_tag();
    assert_eq!(tag.process_command(&update_binary(0, &[0x00, 0x01])), SW_NOT_ALLOWED);

    tag.process_command(&select_cc());
    assert_eq!(tag.process_command(&update_binary(0, &[0x00, 0x01])), SW_NOT_ALLOWED);
    assert!(sink.contains(&TraceEvent::WriteNotAllowed));
    assert_eq!(tag.ndef_file()[..2], [0x00, 0x00]);
}

#[test]
fn write_past_capacity_does_not_grow_or_mutate() {
    let (tag, sink) = ndef_selected_tag();
    let before = tag.ndef_file();
    assert_eq!(
        tag.process_command(&update_binary(4095, &[0xAA, 0xBB])),
        SW_WRONG_PARAMS
    );
    assert!(sink.contains(&TraceEvent::WriteOutOfBounds {
        offset: 4095,
        length: 2,
        capacity: 4096
    }));
    assert_eq!(tag.ndef_file(), before);
    assert_eq!(tag.session().max_offset_written, 0);
}

#[test]
fn short_frame_is_rejected_without_mutation() {
    let (tag, sink) = ndef_selected_tag();
    // Lc = 4 but only two data bytes present
    let cmd = hex::decode("00D6000004ABCD").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
    assert!(sink.contains(&TraceEvent::MalformedLength {
        expected: 9,
        actual: 7
    }));
    assert_eq!(tag.ndef_file()[..4], [0, 0, 0, 0]);
}

#[test]
fn header_only_write_is_a_no_op_success() {
    let (tag, sink) = ndef_selected_tag();
    assert_eq!(tag.process_command(&[0x00, 0xD6, 0x00, 0x00]), SW_OK);
    assert!(sink.contains(&TraceEvent::BytesWritten {
        length: 0,
        offset: 0
    }));
}

#[test]
fn partial_message_traces_shortfall() {
    let (tag, sink) = ndef_selected_tag();
    assert_eq!(tag.process_command(&update_binary(0, &[0x00, 0x0A, 0xD1])), SW_OK);
    assert!(sink.contains(&TraceEvent::MessageLength(10)));
    assert!(sink.contains(&TraceEvent::AwaitingData { have: 3, need: 12 }));
    assert!(!tag.session().message_reassembled);
}

#[test]
fn nlen_zero_keeps_waiting() {
    let (tag, sink) = ndef_selected_tag();
    assert_eq!(tag.process_command(&update_binary(0, &[0x00, 0x00])), SW_OK);
    assert!(sink.contains(&TraceEvent::EmptyMessageLength));
    assert_eq!(tag.session().declared_message_length, Some(0));
    assert!(!tag.session().message_reassembled);
    assert!(!sink
        .events()
        .iter()
        .any(|e| matches!(e, TraceEvent::MessageDecodeFailed(_))));
}

#[test]
fn completion_is_reported_once() {
    let (tag, sink) = ndef_selected_tag();
    let mut frame = vec![0x00, 0x0A];
    frame.extend(hi_message_body());
    assert_eq!(tag.process_command(&update_binary(0, &frame)), SW_OK);
    assert_eq!(tag.process_command(&update_binary(2, &hi_message_body())), SW_OK);

    let decoded = sink
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::MessageDecoded { .. }))
        .count();
    assert_eq!(decoded, 1);
}

#[test]
fn reselecting_ndef_starts_new_message() {
    let (tag, sink) = ndef_selected_tag();
    let mut frame = vec![0x00, 0x0A];
    frame.extend(hi_message_body());
    tag.process_command(&update_binary(0, &frame));
    assert!(tag.session().message_reassembled);

    tag.process_command(&select_ndef());
    assert!(!tag.session().message_reassembled);
    sink.take();

    // Same content again: a fresh high-water mark makes it complete again
    tag.process_command(&update_binary(0, &frame));
    assert!(sink.contains(&TraceEvent::TextDecoded("Hi!".into())));
}

#[test]
fn malformed_message_still_succeeds() {
    let (tag, sink) = ndef_selected_tag();
    // MB missing on the only record
    let resp = tag.process_command(&update_binary(0, &hex::decode("0003500000").unwrap()));
    assert_eq!(resp, SW_OK);
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, TraceEvent::MessageDecodeFailed(_))));
    assert!(tag.session().message_reassembled);
    assert!(tag.last_message().is_none());
}

#[test]
fn unknown_record_types_are_traced() {
    let (tag, sink) = ndef_selected_tag();
    let body = uri_and_text_body();
    let mut frame = (body.len() as u16).to_be_bytes().to_vec();
    frame.extend(&body);
    assert_eq!(tag.process_command(&update_binary(0, &frame)), SW_OK);
    assert!(sink.contains(&TraceEvent::MessageDecoded { records: 2 }));
    assert!(sink.contains(&TraceEvent::UnknownRecordType));
    assert!(sink.contains(&TraceEvent::TextDecoded("OK".into())));
    assert_eq!(tag.last_texts(), vec!["OK".to_string()]);
}

#[test]
fn bad_text_record_does_not_stop_others() {
    let (tag, sink) = ndef_selected_tag();
    // first text record declares a 9-byte language code in a 3-byte payload
    let body = hex::decode("9101035409656E5101055402656E4F4B").unwrap();
    let mut frame = (body.len() as u16).to_be_bytes().to_vec();
    frame.extend(&body);
    assert_eq!(tag.process_command(&update_binary(0, &frame)), SW_OK);
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, TraceEvent::TextRecordError(_))));
    assert!(sink.contains(&TraceEvent::TextDecoded("OK".into())));
}

proptest! {
    #[test]
    fn arbitrary_writes_never_panic(
        offset in any::<u16>(),
        data in prop::collection::vec(any::<u8>(), 0..=255),
    ) {
        let (tag, _) = ndef_selected_tag();
        let resp = tag.process_command(&update_binary(offset, &data));
        let in_bounds = offset as usize + data.len() <= 4096;
        if in_bounds {
            prop_assert_eq!(resp, SW_OK.to_vec());
        } else {
            prop_assert_eq!(resp, SW_WRONG_PARAMS.to_vec());
        }
        prop_assert_eq!(tag.ndef_file().len(), 4096);
    }
}
