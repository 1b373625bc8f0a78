// libt4t-rs/libt4t/src/protocol/mod.rs

pub mod apdu;
pub mod command;
pub mod parser;
pub mod response;

pub use apdu::CommandApdu;
pub use command::Command;
pub use response::ResponseApdu;
