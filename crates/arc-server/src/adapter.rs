//! Adapter-level control consumed from the management transport side.

use arc_core::AdapterIndex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("adapter operation failed: {0}")]
    Failed(&'static str),
}

/// Narrow adapter surface: identity, link teardown, local name.
pub trait AdapterControl {
    fn index(&self) -> AdapterIndex;
    /// Force-disconnects every currently connected device.
    fn disconnect_all(&mut self);
    fn local_name(&self) -> &str;
    fn set_local_name(&mut self, name: &str) -> Result<(), AdapterError>;
}

/// In-memory adapter double recording teardown and name changes.
#[derive(Debug)]
pub struct MockAdapter {
    index: AdapterIndex,
    name: String,
    pub disconnect_calls: u32,
    fail_set_name: bool,
}

impl MockAdapter {
    pub fn new(index: u16) -> Self {
        Self {
            index: AdapterIndex(index),
            name: "arc-peripheral".to_owned(),
            disconnect_calls: 0,
            fail_set_name: false,
        }
    }

    /// Makes every subsequent `set_local_name` fail.
    pub fn fail_set_name(&mut self) {
        self.fail_set_name = true;
    }
}

impl AdapterControl for MockAdapter {
    fn index(&self) -> AdapterIndex {
        self.index
    }

    fn disconnect_all(&mut self) {
        self.disconnect_calls += 1;
    }

    fn local_name(&self) -> &str {
        &self.name
    }

    fn set_local_name(&mut self, name: &str) -> Result<(), AdapterError> {
        if self.fail_set_name {
            return Err(AdapterError::Failed("set name rejected"));
        }
        self.name = name.to_owned();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AdapterControl, AdapterError, MockAdapter};

    #[test]
    fn mock_tracks_name_and_disconnects() {
        let mut adapter = MockAdapter::new(0);
        adapter
            .set_local_name("living-room")
            .expect("set name should succeed");
        adapter.disconnect_all();

        assert_eq!(adapter.local_name(), "living-room");
        assert_eq!(adapter.disconnect_calls, 1);
    }

    #[test]
    fn injected_name_failure_keeps_the_old_name() {
        let mut adapter = MockAdapter::new(0);
        adapter.fail_set_name();
        assert_eq!(
            adapter.set_local_name("nope"),
            Err(AdapterError::Failed("set name rejected"))
        );
        assert_eq!(adapter.local_name(), "arc-peripheral");
    }
}
