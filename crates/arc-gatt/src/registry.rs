//! Fixed characteristic table with uuid/handle/name lookup.

use std::collections::HashMap;

use arc_core::{AttrHandle, Uuid128};

use crate::characteristic::Characteristic;

/// Unique mapping from UUID (equivalently, attribute handle or display
/// name) to one characteristic. Owned exclusively by a session; torn down
/// as a unit at shutdown.
#[derive(Debug, Default)]
pub struct CharRegistry {
    chars: HashMap<Uuid128, Characteristic>,
}

impl CharRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, achar: Characteristic) {
        self.chars.insert(achar.uuid, achar);
    }

    pub fn find_by_uuid(&self, uuid: &Uuid128) -> Option<&Characteristic> {
        self.chars.get(uuid)
    }

    pub fn find_by_uuid_mut(&mut self, uuid: &Uuid128) -> Option<&mut Characteristic> {
        self.chars.get_mut(uuid)
    }

    pub fn find_by_handle(&self, handle: AttrHandle) -> Option<&Characteristic> {
        self.chars.values().find(|c| c.handle == handle)
    }

    pub fn find_by_handle_mut(&mut self, handle: AttrHandle) -> Option<&mut Characteristic> {
        self.chars.values_mut().find(|c| c.handle == handle)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Characteristic> {
        self.chars.values().find(|c| c.name == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Characteristic> {
        self.chars.values_mut().find(|c| c.name == name)
    }

    /// Clears every scratch buffer and forces idle transfer state so a
    /// fresh link starts with clean framing. Values are untouched.
    pub fn reset_all(&mut self) {
        for achar in self.chars.values_mut() {
            achar.reset_transfer();
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Characteristic> {
        self.chars.values()
    }
}

#[cfg(test)]
mod tests {
    use arc_codec::TransferState;
    use arc_core::{AttrHandle, CharPerms, Uuid128};

    use super::CharRegistry;
    use crate::characteristic::Characteristic;

    fn registry_with(name: &'static str, handle: u16) -> (CharRegistry, Uuid128) {
        let uuid = Uuid128::parse("0677B8B1-D6DA-439E-BAB6-F22535991D05")
            .expect("sample uuid should parse");
        let mut registry = CharRegistry::new();
        registry.register(Characteristic::new(
            name,
            uuid,
            AttrHandle(handle),
            CharPerms::READ_WRITE,
        ));
        (registry, uuid)
    }

    #[test]
    fn lookups_agree_across_all_three_keys() {
        let (registry, uuid) = registry_with("JID", 7);
        let by_uuid = registry.find_by_uuid(&uuid).expect("uuid lookup");
        let by_handle = registry.find_by_handle(AttrHandle(7)).expect("handle lookup");
        let by_name = registry.find_by_name("JID").expect("name lookup");
        assert_eq!(by_uuid.handle, by_handle.handle);
        assert_eq!(by_handle.name, by_name.name);
    }

    #[test]
    fn missing_entries_return_none() {
        let (registry, _) = registry_with("JID", 7);
        assert!(registry.find_by_handle(AttrHandle(8)).is_none());
        assert!(registry.find_by_name("Request").is_none());
    }

    #[test]
    fn reset_all_clears_transfer_state_only() {
        let (mut registry, uuid) = registry_with("JID", 7);
        {
            let achar = registry.find_by_uuid_mut(&uuid).expect("uuid lookup");
            achar.set_value_str("payload");
            achar.scratch = achar.value.clone();
            achar.state = TransferState::Reading;
        }

        registry.reset_all();
        let achar = registry.find_by_uuid(&uuid).expect("uuid lookup");
        assert!(achar.scratch.is_empty());
        assert_eq!(achar.state, TransferState::Idle);
        assert_eq!(achar.value_str(), Some("payload"));
    }
}
