//! End-to-end simulation harness for the ARC server.
//!
//! Provides a scripted central that drives a full session through its
//! public entry points over in-memory doubles, so integration tests can
//! exercise the complete write/read/lifecycle surface without hardware.

pub mod central;

pub use central::SimCentral;

use arc_core::AttrHandle;
use arc_gatt::table::SequentialRegistrar;
use arc_server::adapter::MockAdapter;
use arc_server::hci::MockHci;
use arc_server::{ServerConfig, Session};

/// A session over in-memory doubles, handles assigned sequentially.
pub fn test_session() -> Session<MockHci, MockAdapter> {
    let mut registrar = SequentialRegistrar::default();
    Session::new(
        MockAdapter::new(0),
        MockHci::default(),
        ServerConfig::default(),
        &mut registrar,
    )
    .expect("fixed table registration cannot fail in-memory")
}

/// Attribute handle of a fixed characteristic, by display name.
pub fn handle_of(session: &Session<MockHci, MockAdapter>, name: &str) -> AttrHandle {
    session
        .registry()
        .find_by_name(name)
        .expect("fixed characteristic should exist")
        .handle
}
