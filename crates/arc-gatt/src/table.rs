//! The fixed ARC characteristic table and its registration seam.

use arc_core::{AttrHandle, CharPerms, Uuid128};

use crate::characteristic::Characteristic;
use crate::error::GattError;
use crate::registry::CharRegistry;

/// 128-bit service UUID advertised by every ARC peripheral.
pub const ARC_SERVICE_UUID: &str = "939DCB26-B6CB-4519-B6CA-A0D617C403BB";

pub const ARC_REQUEST_UUID: &str = "8D4DD795-D603-4D0A-93F7-02DE511F4B70";
pub const ARC_RESULT_UUID: &str = "B7F2D698-B677-4B93-8D9B-83E3B6ED9AE0";
pub const ARC_EVENT_UUID: &str = "1BA9AF1F-686E-4E1B-90A7-6945584BECA0";
pub const ARC_DEVNAME_UUID: &str = "6C39EC45-C012-47B5-ADC2-B98A91EA0494";
pub const ARC_JID_UUID: &str = "0677B8B1-D6DA-439E-BAB6-F22535991D05";

/// Display names double as control-plane property names.
pub const NAME_REQUEST: &str = "Request";
pub const NAME_RESULT: &str = "Result";
pub const NAME_EVENT: &str = "Event";
pub const NAME_DEVNAME: &str = "DeviceName";
pub const NAME_JID: &str = "JID";

/// Registration facility owned by the external attribute database: stores
/// the attribute slot and yields its transport-assigned value handle.
pub trait GattRegistrar {
    fn register_characteristic(
        &mut self,
        uuid: &Uuid128,
        perms: CharPerms,
    ) -> Result<AttrHandle, GattError>;
}

/// In-memory registrar assigning sequential handles, for tests and
/// simulation.
#[derive(Debug, Default)]
pub struct SequentialRegistrar {
    next: u16,
}

impl GattRegistrar for SequentialRegistrar {
    fn register_characteristic(
        &mut self,
        _uuid: &Uuid128,
        _perms: CharPerms,
    ) -> Result<AttrHandle, GattError> {
        self.next += 1;
        Ok(AttrHandle(self.next))
    }
}

/// Builds the fixed ARC characteristic table, registering each entry with
/// the attribute database. Called once at server start.
pub fn build_registry(registrar: &mut dyn GattRegistrar) -> Result<CharRegistry, GattError> {
    let entries: [(&'static str, &str, CharPerms); 5] = [
        (NAME_REQUEST, ARC_REQUEST_UUID, CharPerms::READ_WRITE),
        (NAME_RESULT, ARC_RESULT_UUID, CharPerms::READ),
        (NAME_EVENT, ARC_EVENT_UUID, CharPerms::READ_WRITE),
        (NAME_DEVNAME, ARC_DEVNAME_UUID, CharPerms::READ),
        (NAME_JID, ARC_JID_UUID, CharPerms::READ_WRITE),
    ];

    let mut registry = CharRegistry::new();
    for (name, uuid, perms) in entries {
        let uuid = Uuid128::parse(uuid)
            .map_err(|_| GattError::RegistrationFailed("malformed table uuid"))?;
        let handle = registrar.register_characteristic(&uuid, perms)?;
        registry.register(Characteristic::new(name, uuid, handle, perms));
    }
    Ok(registry)
}
