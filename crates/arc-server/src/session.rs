//! Per-adapter session: connection lifecycle, timeout, control plane.

use std::collections::VecDeque;

use arc_core::{AdapterIndex, AttrHandle, DeviceId, Uuid128};
use arc_gatt::bridge;
use arc_gatt::table::{self, GattRegistrar, NAME_DEVNAME, NAME_EVENT, NAME_RESULT};
use arc_gatt::{CharRegistry, GattError};
use tracing::debug;

use crate::adapter::AdapterControl;
use crate::advertise;
use crate::config::ServerConfig;
use crate::error::ControlError;
use crate::events::ServerEvent;
use crate::hci::{HciError, HciRequests};

/// One ARC server bound to one adapter.
///
/// Owns the characteristic registry and the session scratch state (magic
/// byte, advertising flag, inactivity deadline). All entry points run on
/// the single event thread; state is only ever mutated synchronously
/// inside them, so no locking is involved.
pub struct Session<H: HciRequests, A: AdapterControl> {
    registry: CharRegistry,
    config: ServerConfig,
    hci: H,
    adapter: A,
    service_uuid: Uuid128,
    magic: u8,
    advertising: bool,
    /// Absolute deadline of the inactivity auto-disconnect; present only
    /// while a countdown is armed.
    disconnect_deadline: Option<u64>,
    events: VecDeque<ServerEvent>,
}

impl<H: HciRequests, A: AdapterControl> Session<H, A> {
    /// Builds the fixed characteristic table through the external
    /// registration facility and binds the session to its adapter.
    /// Advertising starts disabled until the host enables it.
    pub fn new(
        adapter: A,
        hci: H,
        config: ServerConfig,
        registrar: &mut dyn GattRegistrar,
    ) -> Result<Self, GattError> {
        let registry = table::build_registry(registrar)?;
        let service_uuid = Uuid128::parse(table::ARC_SERVICE_UUID)
            .map_err(|_| GattError::RegistrationFailed("malformed service uuid"))?;
        Ok(Self {
            registry,
            config,
            hci,
            adapter,
            service_uuid,
            magic: 0,
            advertising: false,
            disconnect_deadline: None,
            events: VecDeque::new(),
        })
    }

    pub fn adapter_index(&self) -> AdapterIndex {
        self.adapter.index()
    }

    pub fn registry(&self) -> &CharRegistry {
        &self.registry
    }

    pub fn advertising(&self) -> bool {
        self.advertising
    }

    pub fn magic(&self) -> u8 {
        self.magic
    }

    pub fn disconnect_deadline(&self) -> Option<u64> {
        self.disconnect_deadline
    }

    /// Test/simulation access to the underlying controller double.
    pub fn hci_mut(&mut self) -> &mut H {
        &mut self.hci
    }

    /// Test/simulation access to the underlying adapter double.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    // ---- GATT entry points -------------------------------------------

    /// Write callback from the attribute database. Unknown handles and
    /// non-writable characteristics fail without effect; finalized
    /// requests are queued as [`ServerEvent::MethodCalled`].
    pub fn attribute_write(
        &mut self,
        caller: &DeviceId,
        handle: AttrHandle,
        bytes: &[u8],
    ) -> Result<(), GattError> {
        let calls = bridge::attribute_write(&mut self.registry, caller, handle, bytes)?;
        for call in calls {
            self.events.push_back(ServerEvent::MethodCalled {
                caller: call.caller,
                request: call.request,
            });
        }
        Ok(())
    }

    /// Read callback from the attribute database: the next outbound frame
    /// of the characteristic's chunked transfer.
    pub fn attribute_read(&mut self, handle: AttrHandle) -> Result<Vec<u8>, GattError> {
        bridge::attribute_read(&mut self.registry, handle)
    }

    // ---- connection lifecycle ----------------------------------------

    /// A central connected: discard partial transfer state left by any
    /// previous link and arm the inactivity countdown. The countdown is
    /// fixed from connect; GATT traffic does not rearm it.
    pub fn on_device_connected(&mut self, now: u64) {
        debug!("device connected on adapter {}", self.adapter.index().0);
        self.registry.reset_all();
        self.disconnect_deadline = Some(now + self.config.client_timeout_secs);
    }

    /// A central disconnected: resume advertising (the link turned it
    /// off in the controller).
    pub fn on_device_disconnected(&mut self) -> Result<(), HciError> {
        debug!("device disconnected on adapter {}", self.adapter.index().0);
        self.disconnect_deadline = None;
        self.set_advertising(true)
    }

    /// Drives the inactivity countdown; `now` comes from the host event
    /// loop's monotonic clock. When the deadline is reached every
    /// connected device is force-disconnected and advertising resumes.
    /// Returns whether the countdown fired.
    pub fn tick(&mut self, now: u64) -> Result<bool, HciError> {
        match self.disconnect_deadline {
            Some(deadline) if now >= deadline => {}
            _ => return Ok(false),
        }
        debug!("client timeout reached; disconnecting");
        self.disconnect_deadline = None;
        self.adapter.disconnect_all();
        self.set_advertising(true)?;
        Ok(true)
    }

    /// Enables or disables advertising. Parameters and payload are
    /// reprogrammed on every enable; a failed step leaves the recorded
    /// state unchanged.
    pub fn set_advertising(&mut self, enable: bool) -> Result<(), HciError> {
        if enable {
            let name = self
                .config
                .advertise_local_name
                .then(|| self.adapter.local_name().to_owned());
            advertise::enable_advertising(
                &mut self.hci,
                &self.config,
                &self.service_uuid,
                self.magic,
                name.as_deref(),
            )?;
        } else {
            advertise::disable_advertising(&mut self.hci)?;
        }
        self.advertising = enable;
        Ok(())
    }

    // ---- control plane -----------------------------------------------

    /// Publishes a result for the most recent request.
    pub fn submit_result(&mut self, result: &str) -> Result<(), ControlError> {
        self.set_property(NAME_RESULT, result)
    }

    /// Publishes an event blob for the connected central to collect.
    pub fn emit_event(&mut self, event: &str) -> Result<(), ControlError> {
        self.set_property(NAME_EVENT, event)
    }

    /// Updates the adapter's local name and the DeviceName
    /// characteristic. If the adapter rejects the name the
    /// characteristic keeps its previous value.
    pub fn update_name(&mut self, name: &str) -> Result<(), ControlError> {
        if name.is_empty() {
            return Err(ControlError::Validation("name must not be empty"));
        }
        self.adapter.set_local_name(name)?;
        self.set_property(NAME_DEVNAME, name)
    }

    /// Tag embedded in the manufacturer-specific advertising block;
    /// takes effect on the next advertising enable.
    pub fn set_magic(&mut self, magic: u8) {
        self.magic = magic;
    }

    /// Reads a property backed by the characteristic table.
    pub fn get_property(&self, name: &str) -> Result<String, ControlError> {
        let achar = self
            .registry
            .find_by_name(name)
            .ok_or_else(|| ControlError::UnknownProperty(name.to_owned()))?;
        achar
            .value_str()
            .map(str::to_owned)
            .ok_or(ControlError::Encoding)
    }

    /// Sets a property backed by the characteristic table. Local callers
    /// are not bound by the GATT permission flags.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), ControlError> {
        let achar = self
            .registry
            .find_by_name_mut(name)
            .ok_or_else(|| ControlError::UnknownProperty(name.to_owned()))?;
        achar.set_value_str(value);
        let changed = achar.name;
        self.events.push_back(ServerEvent::PropertyChanged { name: changed });
        Ok(())
    }

    /// Next queued outward notification, if any.
    pub fn poll_event(&mut self) -> Option<ServerEvent> {
        self.events.pop_front()
    }
}
