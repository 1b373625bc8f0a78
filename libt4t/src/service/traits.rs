// libt4t-rs/libt4t/src/service/traits.rs

use crate::tag::Tag;

/// Host-side seam of a card emulation service: the platform hands raw
/// command APDUs in and gets raw response APDUs back.
pub trait ApduService: Send + Sync {
    /// Process one command APDU. Must always produce a response.
    fn process_command(&self, command: &[u8]) -> Vec<u8>;

    /// The reader link ended. `reason` uses the host codes (0 = link lost,
    /// 1 = deselected).
    fn on_deactivated(&self, reason: i32);
}

impl ApduService for Tag {
    fn process_command(&self, command: &[u8]) -> Vec<u8> {
        Tag::process_command(self, command)
    }

    fn on_deactivated(&self, reason: i32) {
        Tag::on_deactivated(self, reason)
    }
}

impl<S: ApduService + ?Sized> ApduService for std::sync::Arc<S> {
    fn process_command(&self, command: &[u8]) -> Vec<u8> {
        (**self).process_command(command)
    }

    fn on_deactivated(&self, reason: i32) {
        (**self).on_deactivated(reason)
    }
}
