//! ARC chunk-stream codec.
//!
//! Values longer than one GATT transaction are carried as a byte stream
//! delimited by single-byte markers: [`PRE`] discards any partial value and
//! opens a new one, [`POST`] completes the value accumulated since the last
//! opening marker. Every other byte is payload. One physical read or write
//! moves at most [`MAX_FRAME_LEN`] bytes.
//!
//! The codec is pure buffer logic; callers own the buffers and the I/O.

pub mod drain;
pub mod ingest;

/// Marker byte opening a value: discard any partial accumulation.
pub const PRE: u8 = 0xFE;
/// Marker byte closing a value: finalize the accumulation.
pub const POST: u8 = 0xFF;
/// Payload bytes one GATT transaction can carry next to a marker.
pub const MAX_CHUNK_PAYLOAD: usize = 19;
/// Hard per-transaction frame cap.
pub const MAX_FRAME_LEN: usize = 20;

pub use drain::{drain_chunk, TransferState};
pub use ingest::ingest_chunks;
