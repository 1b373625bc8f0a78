// fixtures.rs : provides commonly used test APDUs and NDEF bodies

use libt4t::ndef::{NdefMessage, NdefRecord};

pub const SW_OK: [u8; 2] = [0x90, 0x00];
pub const SW_UNKNOWN: [u8; 2] = [0x6F, 0x00];
pub const SW_FILE_NOT_FOUND: [u8; 2] = [0x6A, 0x82];
pub const SW_WRONG_PARAMS: [u8; 2] = [0x6B, 0x00];
pub const SW_NOT_ALLOWED: [u8; 2] = [0x69, 0x86];

pub fn select_app_v1() -> Vec<u8> {
    hex::decode("00A4040007D2760000850100").unwrap()
}

pub fn select_app_v2_with_le() -> Vec<u8> {
    hex::decode("00A4040007D276000085010100").unwrap()
}

pub fn select_cc() -> Vec<u8> {
    hex::decode("00A4000C02E103").unwrap()
}

pub fn select_ndef() -> Vec<u8> {
    hex::decode("00A4000C02E104").unwrap()
}

pub fn default_cc_bytes() -> Vec<u8> {
    hex::decode("000F20003B00340406E1040FFF0000").unwrap()
}

/// Single text record "Hi!" (language "en"), the message body only.
pub fn hi_message_body() -> Vec<u8> {
    hex::decode("D101065402656E486921").unwrap()
}

pub fn hi_message() -> NdefMessage {
    NdefMessage::new(vec![NdefRecord::text("en", "Hi!").unwrap()])
}

/// URI record (well-known "U") followed by a text record.
pub fn uri_and_text_body() -> Vec<u8> {
    let mut body = hex::decode("91010C55046578616D706C652E636F6D").unwrap();
    body.extend(hex::decode("5101055402656E4F4B").unwrap());
    body
}
