// libt4t-rs/libt4t/src/tag/mod.rs
//! The emulated Type 4 Tag: capability container, NDEF file, per-connection
//! session state and the APDU dispatcher tying them together.

pub mod builder;
pub mod capability;
pub mod emulator;
pub mod files;
pub mod reassembly;
pub mod session;

pub use builder::TagBuilder;
pub use capability::CapabilityContainer;
pub use emulator::Tag;
pub use files::NdefFile;
pub use reassembly::{Progress, Reassembly};
pub use session::{Session, SessionSnapshot};
