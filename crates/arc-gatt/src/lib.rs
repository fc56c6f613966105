//! GATT-facing value model for the ARC protocol.
//!
//! Owns the fixed characteristic table (value/scratch buffers, permission
//! flags, transfer state) and the two attribute-level entry points the
//! external attribute database invokes per physical read/write.

pub mod bridge;
pub mod characteristic;
pub mod error;
pub mod registry;
pub mod table;

pub use characteristic::Characteristic;
pub use error::GattError;
pub use registry::CharRegistry;
