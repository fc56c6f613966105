//! Attach/detach lifecycle across adapters.

use std::collections::HashMap;

use arc_core::AdapterIndex;
use tracing::warn;

use crate::adapter::AdapterControl;
use crate::hci::HciRequests;
use crate::session::Session;

/// Sessions keyed by adapter identity.
///
/// Attach/detach mirror the profile probe/remove notifications of the
/// host stack; connection notifications arriving for an unmanaged
/// adapter are logged and ignored.
pub struct ServerMap<H: HciRequests, A: AdapterControl> {
    sessions: HashMap<AdapterIndex, Session<H, A>>,
}

impl<H: HciRequests, A: AdapterControl> Default for ServerMap<H, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HciRequests, A: AdapterControl> ServerMap<H, A> {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Binds a session to its adapter, replacing any prior session for
    /// the same index.
    pub fn attach(&mut self, session: Session<H, A>) {
        self.sessions.insert(session.adapter_index(), session);
    }

    /// Removes and returns the session for `index`, if any.
    pub fn detach(&mut self, index: AdapterIndex) -> Option<Session<H, A>> {
        self.sessions.remove(&index)
    }

    pub fn session(&self, index: AdapterIndex) -> Option<&Session<H, A>> {
        self.sessions.get(&index)
    }

    pub fn session_mut(&mut self, index: AdapterIndex) -> Option<&mut Session<H, A>> {
        self.sessions.get_mut(&index)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Routes a device-connected notification to the owning session.
    pub fn on_device_connected(&mut self, index: AdapterIndex, now: u64) {
        match self.sessions.get_mut(&index) {
            Some(session) => session.on_device_connected(now),
            None => warn!("connect notification for unmanaged adapter {}", index.0),
        }
    }

    /// Routes a device-disconnected notification to the owning session.
    pub fn on_device_disconnected(&mut self, index: AdapterIndex) {
        match self.sessions.get_mut(&index) {
            Some(session) => {
                if let Err(err) = session.on_device_disconnected() {
                    warn!("failed to re-enable advertising: {err}");
                }
            }
            None => warn!("disconnect notification for unmanaged adapter {}", index.0),
        }
    }

    /// Drives every armed countdown; returns the adapters whose timeout
    /// fired this tick.
    pub fn tick(&mut self, now: u64) -> Vec<AdapterIndex> {
        let mut fired = Vec::new();
        for (index, session) in self.sessions.iter_mut() {
            match session.tick(now) {
                Ok(true) => fired.push(*index),
                Ok(false) => {}
                Err(err) => {
                    warn!("timeout handling failed on adapter {}: {err}", index.0);
                    fired.push(*index);
                }
            }
        }
        fired
    }
}
