//! One ARC characteristic: identity, buffers, transfer state.

use arc_codec::TransferState;
use arc_core::{AttrHandle, CharPerms, Uuid128};

/// A named GATT value slot owned by the server.
///
/// `value` holds the current logical content and is mutated in place by
/// inbound writes and control-plane setters. `scratch` is populated only
/// while a chunked read is in progress and always holds a snapshot of
/// `value`, never an alias.
#[derive(Debug, Clone)]
pub struct Characteristic {
    pub name: &'static str,
    pub uuid: Uuid128,
    pub handle: AttrHandle,
    pub perms: CharPerms,
    pub value: Vec<u8>,
    pub scratch: Vec<u8>,
    pub state: TransferState,
}

impl Characteristic {
    pub fn new(name: &'static str, uuid: Uuid128, handle: AttrHandle, perms: CharPerms) -> Self {
        Self {
            name,
            uuid,
            handle,
            perms,
            value: Vec::new(),
            scratch: Vec::new(),
            state: TransferState::Idle,
        }
    }

    /// Replaces the value with the bytes of `s`; an empty input clears it.
    pub fn set_value_str(&mut self, s: &str) {
        self.value.clear();
        self.value.extend_from_slice(s.as_bytes());
    }

    /// Current value as text, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Drops any read-in-progress snapshot and returns to idle framing.
    /// The value is untouched.
    pub fn reset_transfer(&mut self) {
        self.scratch.clear();
        self.state = TransferState::Idle;
    }
}
