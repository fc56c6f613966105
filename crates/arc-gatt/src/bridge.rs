//! Attribute-level entry points driven by the external attribute database.

use arc_codec::{drain_chunk, ingest_chunks};
use arc_core::{AttrHandle, DeviceId};
use tracing::{debug, warn};

use crate::error::GattError;
use crate::registry::CharRegistry;
use crate::table::{NAME_REQUEST, NAME_RESULT};

/// A finalized Request value, ready to surface to the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub caller: DeviceId,
    pub request: String,
}

/// Handles one physical GATT write against the characteristic owning
/// `handle`.
///
/// The payload is scanned for chunk markers; any Request values finalized
/// by it are returned in order. A finalized Request must be valid UTF-8,
/// otherwise it is logged and dropped. Finalizing a Request clears the
/// Result characteristic, since a new request invalidates the previous
/// result. Other characteristics finalize silently.
pub fn attribute_write(
    registry: &mut CharRegistry,
    caller: &DeviceId,
    handle: AttrHandle,
    bytes: &[u8],
) -> Result<Vec<MethodCall>, GattError> {
    let achar = registry.find_by_handle_mut(handle).ok_or_else(|| {
        warn!("write to unknown attribute handle {:#06x}", handle.0);
        GattError::UnknownAttribute(handle)
    })?;
    if !achar.perms.writable {
        warn!("characteristic {} is not writable", achar.name);
        return Err(GattError::NotWritable(achar.name));
    }

    debug!("writing handle {:#06x} ({} bytes)", handle.0, bytes.len());
    let finalized = ingest_chunks(&mut achar.value, bytes);
    if achar.name != NAME_REQUEST || finalized.is_empty() {
        return Ok(Vec::new());
    }

    let mut calls = Vec::new();
    for value in finalized {
        let request = match String::from_utf8(value) {
            Ok(request) => request,
            Err(_) => {
                warn!("finalized request is not valid utf8; dropping");
                continue;
            }
        };
        if let Some(result) = registry.find_by_name_mut(NAME_RESULT) {
            result.value.clear();
        }
        calls.push(MethodCall {
            caller: caller.clone(),
            request,
        });
    }
    Ok(calls)
}

/// Handles one physical GATT read, returning the next outbound frame of
/// the characteristic's chunked transfer.
pub fn attribute_read(
    registry: &mut CharRegistry,
    handle: AttrHandle,
) -> Result<Vec<u8>, GattError> {
    let achar = registry.find_by_handle_mut(handle).ok_or_else(|| {
        warn!("read of unknown attribute handle {:#06x}", handle.0);
        GattError::UnknownAttribute(handle)
    })?;
    if !achar.perms.readable {
        warn!("characteristic {} is not readable", achar.name);
        return Err(GattError::NotReadable(achar.name));
    }

    let frame = drain_chunk(&achar.value, &mut achar.scratch, &mut achar.state);
    debug!("reading handle {:#06x} ({} bytes)", handle.0, frame.len());
    Ok(frame)
}
