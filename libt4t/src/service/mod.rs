// libt4t-rs/libt4t/src/service/mod.rs

pub mod mock;
pub mod traits;

pub use mock::MockReader;
pub use traits::ApduService;
