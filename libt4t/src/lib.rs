// libt4t-rs/libt4t/src/lib.rs

//! libt4t
//!
//! NFC Forum Type 4 Tag emulation: answers ISO 7816-4 command APDUs from a
//! reader, exposes a Capability Container and an NDEF file, and reassembles
//! and decodes NDEF messages the reader writes.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod service;
pub mod tag;
pub mod test_support;
pub mod trace;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
