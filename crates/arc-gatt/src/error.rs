use arc_core::AttrHandle;
use thiserror::Error;

/// Failure statuses surfaced to the attribute database by bridge
/// operations. None of these mutate characteristic state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GattError {
    /// The handle does not resolve to any registered characteristic.
    #[error("unknown attribute handle {:#06x}", .0 .0)]
    UnknownAttribute(AttrHandle),
    /// Write attempted on a characteristic without the writable flag.
    #[error("characteristic {0} is not writable")]
    NotWritable(&'static str),
    /// Read attempted on a characteristic without the readable flag.
    #[error("characteristic {0} is not readable")]
    NotReadable(&'static str),
    /// The external registration facility rejected a table entry.
    #[error("characteristic registration failed: {0}")]
    RegistrationFailed(&'static str),
}
