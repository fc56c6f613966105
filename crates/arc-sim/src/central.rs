//! Scripted central: chunked writes and read-until-POST loops.

use arc_codec::{MAX_FRAME_LEN, POST, PRE};
use arc_core::{AttrHandle, DeviceId};
use arc_gatt::GattError;
use arc_server::adapter::MockAdapter;
use arc_server::hci::MockHci;
use arc_server::Session;

/// A fake central driving one session's GATT entry points the way a
/// remote device would: bounded physical writes, repeated reads until a
/// closing marker arrives.
pub struct SimCentral {
    pub device: DeviceId,
}

impl SimCentral {
    pub fn new(addr: &str) -> Self {
        Self {
            device: DeviceId::new(addr),
        }
    }

    /// Writes one logical value as `PRE + payload + POST`, split into
    /// physical writes of at most [`MAX_FRAME_LEN`] bytes.
    pub fn write_value(
        &self,
        session: &mut Session<MockHci, MockAdapter>,
        handle: AttrHandle,
        value: &[u8],
    ) -> Result<(), GattError> {
        let mut stream = Vec::with_capacity(value.len() + 2);
        stream.push(PRE);
        stream.extend_from_slice(value);
        stream.push(POST);
        for chunk in stream.chunks(MAX_FRAME_LEN) {
            session.attribute_write(&self.device, handle, chunk)?;
        }
        Ok(())
    }

    /// Reads frames until one closes with POST; returns the reassembled
    /// payload between the markers.
    pub fn read_value(
        &self,
        session: &mut Session<MockHci, MockAdapter>,
        handle: AttrHandle,
    ) -> Result<Vec<u8>, GattError> {
        let mut out = Vec::new();
        let mut first = true;
        for _ in 0..4096 {
            let mut frame = session.attribute_read(handle)?;
            assert!(frame.len() <= MAX_FRAME_LEN, "oversized frame");
            let done = frame.last() == Some(&POST);
            if done {
                frame.pop();
            }
            let start = usize::from(first && frame.first() == Some(&PRE));
            out.extend_from_slice(&frame[start..]);
            first = false;
            if done {
                return Ok(out);
            }
        }
        panic!("read did not terminate with a closing marker");
    }
}
