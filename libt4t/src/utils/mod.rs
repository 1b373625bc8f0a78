//! Utilities for libt4t: small, reusable helpers used across the crate.
//!
//! Only hex formatting lives here for now; it backs the APDU traces and the
//! replay example.

pub mod hex;

pub use hex::*;
