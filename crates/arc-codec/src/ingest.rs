//! Write-path scan: fold marker-delimited chunks into a value buffer.

use crate::{POST, PRE};

/// Scans one inbound write payload against the accumulation buffer.
///
/// `value` is mutated in place: [`PRE`] truncates it, payload bytes append,
/// and every [`POST`] snapshots the bytes accumulated so far into the
/// returned list. The buffer keeps its contents after a `POST` (the
/// finalized bytes remain the current value); only a later `PRE` discards
/// them. A single call may finalize zero, one, or several values, and a
/// value may span any number of calls.
pub fn ingest_chunks(value: &mut Vec<u8>, bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut finalized = Vec::new();
    for &byte in bytes {
        match byte {
            PRE => value.clear(),
            POST => finalized.push(value.clone()),
            _ => value.push(byte),
        }
    }
    finalized
}
