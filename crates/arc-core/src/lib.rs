//! Core ARC primitives shared across crates.
//!
//! Includes attribute/adapter identity newtypes, characteristic permission
//! flags, and 128-bit UUID parsing.

pub mod error;
pub mod types;
pub mod uuid;

pub use error::CoreError;
pub use types::{AdapterIndex, AttrHandle, CharPerms, DeviceId};
pub use uuid::Uuid128;
