//! Session configuration with conservative defaults.

/// Tunables for one ARC session.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Seconds a client may hold the link before the forced disconnect.
    pub client_timeout_secs: u64,
    /// Advertising interval lower bound (units of 0.625 ms).
    pub adv_interval_min: u16,
    /// Advertising interval upper bound (units of 0.625 ms).
    pub adv_interval_max: u16,
    /// Advertising channel map (one bit per channel 37/38/39).
    pub adv_channel_map: u8,
    /// Whether to append the adapter's local name to the advertising
    /// payload, space permitting.
    pub advertise_local_name: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            client_timeout_secs: 10,
            adv_interval_min: 0x0800,
            adv_interval_max: 0x0800,
            adv_channel_map: 0x07,
            advertise_local_name: true,
        }
    }
}
