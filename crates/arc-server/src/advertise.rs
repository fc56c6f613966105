//! Advertising payload assembly and the enable/disable sequence.

use arc_core::Uuid128;
use tracing::debug;

use crate::config::ServerConfig;
use crate::hci::{AdvParams, HciError, HciRequests, ADV_TYPE_CONNECTABLE_UNDIRECTED};

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_UUID128_COMPLETE: u8 = 0x07;
const AD_TYPE_NAME_SHORT: u8 = 0x08;
const AD_TYPE_MANUFACTURER: u8 = 0xFF;

/// LE general discoverable, BR/EDR not supported.
const ADV_FLAGS: u8 = 0x06;

/// Company/tag prefix carried before the magic byte in the
/// manufacturer-specific block.
const MANUFACTURER_PREFIX: [u8; 2] = [0xF2, 0x00];

/// Advertising payload hard cap (31 octets).
pub const ADV_DATA_MAX: usize = 31;

/// Assembles the length-prefixed AD structures: flags, the complete
/// 128-bit service UUID (little-endian), the manufacturer-specific magic
/// block, and (space permitting) a shortened local name truncated to
/// what is left of the 31-octet budget.
pub fn build_adv_data(service_uuid: &Uuid128, magic: u8, local_name: Option<&str>) -> Vec<u8> {
    let mut data = Vec::with_capacity(ADV_DATA_MAX);
    data.extend_from_slice(&[2, AD_TYPE_FLAGS, ADV_FLAGS]);

    let uuid = service_uuid.to_le_bytes();
    data.push(uuid.len() as u8 + 1);
    data.push(AD_TYPE_UUID128_COMPLETE);
    data.extend_from_slice(&uuid);

    data.extend_from_slice(&[
        4,
        AD_TYPE_MANUFACTURER,
        MANUFACTURER_PREFIX[0],
        MANUFACTURER_PREFIX[1],
        magic,
    ]);

    if let Some(name) = local_name {
        let room = ADV_DATA_MAX.saturating_sub(data.len() + 2);
        let take = name.len().min(room);
        if take > 0 {
            data.push(take as u8 + 1);
            data.push(AD_TYPE_NAME_SHORT);
            data.extend_from_slice(&name.as_bytes()[..take]);
        }
    }
    data
}

/// Programs parameters, then payload, then advertising-enable.
///
/// Parameters and payload are reprogrammed on every cycle because the
/// controller does not retain them across a connect/disconnect. Any
/// failed step aborts the remainder and surfaces to the caller; steps
/// already issued are not rolled back.
pub fn enable_advertising(
    hci: &mut dyn HciRequests,
    config: &ServerConfig,
    service_uuid: &Uuid128,
    magic: u8,
    local_name: Option<&str>,
) -> Result<(), HciError> {
    let params = AdvParams {
        interval_min: config.adv_interval_min,
        interval_max: config.adv_interval_max,
        adv_type: ADV_TYPE_CONNECTABLE_UNDIRECTED,
        channel_map: config.adv_channel_map,
    };
    hci.set_adv_params(&params)?;
    hci.set_adv_data(&build_adv_data(service_uuid, magic, local_name))?;
    hci.set_adv_enable(true)?;
    debug!("advertising enabled (magic {magic:#04x})");
    Ok(())
}

/// Issues advertising-disable only.
pub fn disable_advertising(hci: &mut dyn HciRequests) -> Result<(), HciError> {
    hci.set_adv_enable(false)?;
    debug!("advertising disabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use arc_core::Uuid128;
    use arc_gatt::table::ARC_SERVICE_UUID;

    use super::{build_adv_data, ADV_DATA_MAX};

    fn service_uuid() -> Uuid128 {
        Uuid128::parse(ARC_SERVICE_UUID).expect("service uuid should parse")
    }

    #[test]
    fn payload_leads_with_flags_then_service_uuid() {
        let data = build_adv_data(&service_uuid(), 0x42, None);
        assert_eq!(&data[..3], &[0x02, 0x01, 0x06]);
        assert_eq!(data[3], 17);
        assert_eq!(data[4], 0x07);
        // little-endian: the uuid's last canonical byte comes first
        assert_eq!(data[5], 0xBB);
        assert_eq!(data[20], 0x93);
    }

    #[test]
    fn manufacturer_block_carries_the_magic_byte() {
        let data = build_adv_data(&service_uuid(), 0x42, None);
        assert_eq!(&data[21..26], &[0x04, 0xFF, 0xF2, 0x00, 0x42]);
        assert_eq!(data.len(), 26);
    }

    #[test]
    fn local_name_is_truncated_to_the_remaining_budget() {
        let data = build_adv_data(&service_uuid(), 0x00, Some("a-very-long-peripheral-name"));
        assert!(data.len() <= ADV_DATA_MAX);
        assert_eq!(data[26], 4); // 3 name bytes + type
        assert_eq!(data[27], 0x08);
        assert_eq!(&data[28..], b"a-v");
    }

    #[test]
    fn short_name_fits_whole() {
        let data = build_adv_data(&service_uuid(), 0x00, Some("arc"));
        assert_eq!(&data[26..], &[0x04, 0x08, b'a', b'r', b'c']);
    }
}
