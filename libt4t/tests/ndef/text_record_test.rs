#[path = "../common/mod.rs"]
mod common;

use libt4t::Error;
use libt4t::ndef::{NdefRecord, TextEncoding, TextRecord};

#[test]
fn utf8_text_with_language() {
    let rec = NdefRecord::text("en-US", "hello").unwrap();
    let text = TextRecord::try_from(&rec).unwrap();
    assert_eq!(text.encoding, TextEncoding::Utf8);
    assert_eq!(text.language, "en-US");
    assert_eq!(text.text, "hello");
}

#[test]
fn utf16_big_endian_default() {
    let payload = hex::decode("82656E00480069").unwrap();
    let text = TextRecord::decode_payload(&payload).unwrap();
    assert_eq!(text.encoding, TextEncoding::Utf16);
    assert_eq!(text.text, "Hi");
}

#[test]
fn utf16_little_endian_bom() {
    let payload = hex::decode("82656EFFFE48006900").unwrap();
    assert_eq!(TextRecord::decode_payload(&payload).unwrap().text, "Hi");
}

#[test]
fn odd_utf16_length_is_an_error() {
    let payload = hex::decode("82656E004800").unwrap();
    assert!(matches!(
        TextRecord::decode_payload(&payload),
        Err(Error::TextRecord(_))
    ));
}

#[test]
fn invalid_utf8_and_empty_payload() {
    assert!(matches!(
        TextRecord::decode_payload(&hex::decode("02656EFF").unwrap()),
        Err(Error::TextRecord(_))
    ));
    assert!(matches!(
        TextRecord::decode_payload(&[]),
        Err(Error::TextRecord(_))
    ));
}

#[test]
fn non_text_record_is_refused() {
    let msg = libt4t::ndef::decode_message(&common::fixtures::uri_and_text_body()).unwrap();
    assert!(TextRecord::try_from(&msg.records()[0]).is_err());
    assert_eq!(
        TextRecord::try_from(&msg.records()[1]).unwrap().text,
        "OK"
    );
}
