use serde::{Deserialize, Serialize};

/// Transport-assigned integer identifying one GATT attribute instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttrHandle(pub u16);

/// Index identifying one managed Bluetooth adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdapterIndex(pub u16);

/// Opaque identity of the remote device behind a GATT operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read/write permission flags for one characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharPerms {
    pub readable: bool,
    pub writable: bool,
}

impl CharPerms {
    pub const READ: CharPerms = CharPerms {
        readable: true,
        writable: false,
    };
    pub const WRITE: CharPerms = CharPerms {
        readable: false,
        writable: true,
    };
    pub const READ_WRITE: CharPerms = CharPerms {
        readable: true,
        writable: true,
    };
}
