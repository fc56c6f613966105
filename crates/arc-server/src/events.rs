//! Outward notifications surfaced to the embedding control plane.

use arc_core::DeviceId;

/// Notification queued by server entry points and drained by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A central finalized a Request value.
    MethodCalled { caller: DeviceId, request: String },
    /// A characteristic's externally visible value changed.
    PropertyChanged { name: &'static str },
}
