#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libt4t::trace::TraceEvent;
use libt4t::types::{Aid, FileId};

#[test]
fn select_known_aids() {
    let (tag, sink) = common::helpers::recording_tag();
    assert_eq!(tag.process_command(&select_app_v1()), SW_OK);
    assert_eq!(tag.process_command(&select_app_v2_with_le()), SW_OK);
    assert!(sink.contains(&TraceEvent::AidMatched));
    assert!(!sink.contains(&TraceEvent::AidRejected));
}

#[test]
fn wildcard_aid_is_accepted() {
    let (tag, _) = common::helpers::recording_tag();
    let cmd = hex::decode("00A404000700000000000000").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_OK);
}

#[test]
fn unknown_aid_is_rejected() {
    let (tag, sink) = common::helpers::recording_tag();
    let cmd = hex::decode("00A4040007A0000000031010").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
    assert!(sink.contains(&TraceEvent::AidReceived(
        hex::decode("A0000000031010").unwrap()
    )));
    assert!(sink.contains(&TraceEvent::AidRejected));
}

#[test]
fn aid_of_wrong_length_never_matches() {
    let (tag, _) = common::helpers::recording_tag();
    let cmd = hex::decode("00A4040006D27600008501").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
}

#[test]
fn truncated_select_is_malformed() {
    let (tag, sink) = common::helpers::recording_tag();
    // Lc says 7, only 3 data bytes follow
    let cmd = hex::decode("00A4040007D27600").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
    assert!(sink.contains(&TraceEvent::MalformedLength {
        expected: 12,
        actual: 8
    }));

    // no Lc at all
    assert_eq!(tag.process_command(&[0x00, 0xA4, 0x04, 0x00]), SW_UNKNOWN);
}

#[test]
fn select_files() {
    let (tag, sink) = common::helpers::recording_tag();
    assert_eq!(tag.process_command(&select_cc()), SW_OK);
    assert_eq!(tag.session().selected_file, Some(FileId::CAPABILITY_CONTAINER));
    assert_eq!(tag.process_command(&select_ndef()), SW_OK);
    assert_eq!(tag.session().selected_file, Some(FileId::NDEF));
    assert!(sink.contains(&TraceEvent::FileSelected(FileId::NDEF)));
}

#[test]
fn unknown_file_id_is_not_found_and_keeps_selection() {
    let (tag, sink) = common::helpers::recording_tag();
    tag.process_command(&select_cc());
    let cmd = hex::decode("00A4000C023F00").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_FILE_NOT_FOUND);
    assert!(sink.contains(&TraceEvent::FileNotFound));
    assert_eq!(tag.session().selected_file, Some(FileId::CAPABILITY_CONTAINER));
}

#[test]
fn short_file_id_is_malformed() {
    let (tag, _) = common::helpers::recording_tag();
    // Lc = 1, one byte of id
    let cmd = hex::decode("00A4000C01E1").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
    assert_eq!(tag.session().selected_file, None);
}

#[test]
fn unknown_select_mode() {
    let (tag, sink) = common::helpers::recording_tag();
    let cmd = hex::decode("00A4020C02E104").unwrap();
    assert_eq!(tag.process_command(&cmd), SW_UNKNOWN);
    assert!(sink.contains(&TraceEvent::UnknownSelectMode(0x02)));
}

#[test]
fn aid_selection_resets_session() {
    let (tag, _) = common::helpers::ndef_selected_tag();
    tag.process_command(&common::helpers::update_binary(0, &[0x00, 0x05]));
    assert_eq!(tag.session().declared_message_length, Some(5));

    assert_eq!(
        tag.process_command(&libt4t::protocol::Command::select_aid(Aid::NDEF_TAG_V2).encode()),
        SW_OK
    );
    let s = tag.session();
    assert_eq!(s.selected_file, None);
    assert_eq!(s.max_offset_written, 0);
    assert_eq!(s.declared_message_length, None);
    assert!(!s.message_reassembled);
}

#[test]
fn file_id_comes_from_lc_delimited_data() {
    let (tag, sink) = common::helpers::ndef_selected_tag();
    tag.process_command(&common::helpers::update_binary(0, &[0x00, 0x05]));

    let cases = [
        // Lc = 0, id bytes trail the empty data field
        ("00A4000C00E104", vec![]),
        // Lc = 1, data is E1 only
        ("00A4000C01E103", vec![0xE1]),
        // Lc = 3, data is E1 04 00
        ("00A4000C03E10400", vec![0xE1, 0x04, 0x00]),
    ];
    for (frame, data) in cases {
        let cmd = hex::decode(frame).unwrap();
        assert_eq!(tag.process_command(&cmd), SW_FILE_NOT_FOUND, "{}", frame);
        assert!(sink.contains(&TraceEvent::FileIdReceived(data)));
    }
    assert!(sink.contains(&TraceEvent::FileNotFound));

    // selection and reassembly untouched
    let s = tag.session();
    assert_eq!(s.selected_file, Some(FileId::NDEF));
    assert_eq!(s.declared_message_length, Some(5));
}
