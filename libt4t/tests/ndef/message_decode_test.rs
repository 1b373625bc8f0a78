#[path = "../common/mod.rs"]
mod common;

use libt4t::Error;
use libt4t::ndef::{NdefMessage, NdefRecord, Tnf, decode_message};
use proptest::prelude::*;

#[test]
fn decode_hi_fixture() {
    let msg = decode_message(&common::fixtures::hi_message_body()).unwrap();
    assert_eq!(msg, common::fixtures::hi_message());
    let rec = &msg.records()[0];
    assert_eq!(rec.tnf, Tnf::WellKnown);
    assert_eq!(rec.record_type, b"T");
    assert!(rec.is_text());
}

#[test]
fn decode_two_records_in_order() {
    let msg = decode_message(&common::fixtures::uri_and_text_body()).unwrap();
    assert_eq!(msg.len(), 2);
    assert_eq!(msg.records()[0].record_type, b"U");
    assert_eq!(msg.records()[1].record_type, b"T");
}

#[test]
fn chunked_record_is_joined() {
    // MB|CF|SR well-known "T" [02 'e' 'n'], then UNCHANGED 'H' 'i', then ME 'UNCHANGED' '!'
    let body = hex::decode("B1010354 02656E 3600024869 5600 0121".replace(' ', "").as_str()).unwrap();
    let msg = decode_message(&body).unwrap();
    assert_eq!(msg.len(), 1);
    assert_eq!(msg.records()[0].payload, hex::decode("02656E486921").unwrap());
    assert_eq!(msg.records()[0].record_type, b"T");
}

#[test]
fn framing_violations_are_format_errors() {
    let cases: &[&str] = &[
        // empty message
        "",
        // second record sets MB again
        "91010154 41 D1010154 42",
        // no ME anywhere
        "91010154 41",
        // bytes after ME
        "D1010154 41 00",
        // payload runs past the end
        "D1010554 4142",
        // UNCHANGED without a chunk in progress
        "D6000141",
        // chunk continuation with a type
        "B1010154 41 56010142 43",
        // empty record carrying a payload
        "D0000141",
    ];
    for case in cases {
        let body = hex::decode(case.replace(' ', "")).unwrap();
        match decode_message(&body) {
            Err(Error::NdefFormat(_)) => {}
            other => panic!("{}: expected NdefFormat, got {:?}", case, other),
        }
    }
}

#[test]
fn encoder_output_decodes() {
    let msg = NdefMessage::new(vec![
        NdefRecord::text("en", "first").unwrap(),
        NdefRecord::new(Tnf::External, b"example.com:t".to_vec(), b"id".to_vec(), vec![1; 300]),
        NdefRecord::text("ja", "二番目").unwrap(),
    ]);
    assert_eq!(decode_message(&msg.to_bytes().unwrap()).unwrap(), msg);
}

proptest! {
    #[test]
    fn decoding_arbitrary_bytes_never_panics(body in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode_message(&body);
    }
}
