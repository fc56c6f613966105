//! Read-path drain: emit a value as bounded marker-delimited frames.

use crate::{MAX_CHUNK_PAYLOAD, MAX_FRAME_LEN, POST, PRE};

/// Read-side transfer state for one characteristic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    /// No transfer in progress; the scratch buffer is empty.
    #[default]
    Idle,
    /// A snapshot is being drained from the scratch buffer chunk by chunk.
    Reading,
}

/// Produces the next outbound frame of a chunked read.
///
/// Entering a transfer snapshots `value` into `scratch` and opens the frame
/// with [`PRE`] (the marker costs one payload byte); subsequent calls drain
/// `scratch` further. Once the snapshot is exhausted the frame is closed
/// with [`POST`] and the state returns to [`TransferState::Idle`]. `value`
/// itself is never consumed, so the next transfer starts from the current
/// content. An empty `value` yields the two-byte `{PRE, POST}` frame
/// without leaving idle. Every frame is at most [`MAX_FRAME_LEN`] bytes.
pub fn drain_chunk(value: &[u8], scratch: &mut Vec<u8>, state: &mut TransferState) -> Vec<u8> {
    let mut frame = Vec::with_capacity(MAX_FRAME_LEN);
    match state {
        TransferState::Idle => {
            if value.is_empty() {
                return vec![PRE, POST];
            }
            scratch.clear();
            scratch.extend_from_slice(value);
            *state = TransferState::Reading;
            let n = MAX_CHUNK_PAYLOAD.min(scratch.len());
            frame.push(PRE);
            frame.extend(scratch.drain(..n - 1));
        }
        TransferState::Reading => {
            let n = MAX_CHUNK_PAYLOAD.min(scratch.len());
            frame.extend(scratch.drain(..n));
        }
    }
    if scratch.is_empty() && frame.len() < MAX_FRAME_LEN {
        frame.push(POST);
        *state = TransferState::Idle;
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::{drain_chunk, TransferState};
    use crate::{MAX_FRAME_LEN, POST, PRE};

    /// Drains a value to completion, returning the raw frame sequence.
    fn drain_all(value: &[u8]) -> Vec<Vec<u8>> {
        let mut scratch = Vec::new();
        let mut state = TransferState::default();
        let mut frames = Vec::new();
        loop {
            let frame = drain_chunk(value, &mut scratch, &mut state);
            let done = frame.last() == Some(&POST);
            frames.push(frame);
            if done {
                assert_eq!(state, TransferState::Idle);
                assert!(scratch.is_empty());
                return frames;
            }
            assert!(frames.len() < 64, "drain did not terminate");
        }
    }

    /// Reassembles the payload carried between the PRE and POST markers.
    fn reassemble(frames: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, frame) in frames.iter().enumerate() {
            let mut bytes = frame.as_slice();
            if i == 0 {
                assert_eq!(bytes.first(), Some(&PRE));
                bytes = &bytes[1..];
            }
            if i == frames.len() - 1 {
                assert_eq!(bytes.last(), Some(&POST));
                bytes = &bytes[..bytes.len() - 1];
            }
            out.extend_from_slice(bytes);
        }
        out
    }

    fn sample_value(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 64) as u8 + 0x20).collect()
    }

    #[test]
    fn empty_value_yields_pre_post_and_stays_idle() {
        let mut scratch = Vec::new();
        let mut state = TransferState::default();
        let frame = drain_chunk(&[], &mut scratch, &mut state);
        assert_eq!(frame, vec![PRE, POST]);
        assert_eq!(state, TransferState::Idle);
        assert!(scratch.is_empty());
    }

    #[test]
    fn short_value_fits_one_frame() {
        let frames = drain_all(b"hi");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], vec![PRE, b'h', b'i', POST]);
    }

    #[test]
    fn reconstructs_value_across_frames() {
        let value = sample_value(45);
        let frames = drain_all(&value);
        assert!(frames.len() > 1);
        assert_eq!(reassemble(&frames), value);
    }

    #[test]
    fn every_frame_respects_the_transaction_cap() {
        for len in [18, 19, 20, 37, 38, 39, 57] {
            let value = sample_value(len);
            for frame in drain_all(&value) {
                assert!(frame.len() <= MAX_FRAME_LEN);
            }
        }
    }

    #[test]
    fn reconstruction_holds_for_any_length_mod_payload() {
        for len in 1..=60 {
            let value = sample_value(len);
            let frames = drain_all(&value);
            assert_eq!(reassemble(&frames), value, "length {len}");
        }
    }

    #[test]
    fn value_is_left_intact_for_the_next_transfer() {
        let value = sample_value(30);
        let mut scratch = Vec::new();
        let mut state = TransferState::default();
        loop {
            if drain_chunk(&value, &mut scratch, &mut state).last() == Some(&POST) {
                break;
            }
        }
        let frames = drain_all(&value);
        assert_eq!(reassemble(&frames), value);
    }

    #[test]
    fn opening_marker_costs_one_payload_byte() {
        let value = sample_value(19);
        let frames = drain_all(&value);
        // 18 payload bytes ride with PRE, the last byte with POST
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].len(), 19);
        assert_eq!(frames[1].len(), 2);
    }
}
