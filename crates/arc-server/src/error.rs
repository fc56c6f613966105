use thiserror::Error;

use crate::adapter::AdapterError;
use crate::hci::HciError;

/// Control-plane operation failure, surfaced to the external caller
/// before any core state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// Malformed request (missing or unusable argument).
    #[error("invalid request: {0}")]
    Validation(&'static str),
    /// Property name does not match any characteristic.
    #[error("unknown property {0}")]
    UnknownProperty(String),
    /// Stored value is not representable as text.
    #[error("value is not valid utf8")]
    Encoding,
    /// Adapter-level call failed.
    #[error("adapter control failed: {0}")]
    Adapter(#[from] AdapterError),
    /// HCI advertising step failed.
    #[error("advertising request failed: {0}")]
    Hci(#[from] HciError),
}
