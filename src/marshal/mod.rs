//! Bounded-buffer marshalling across the engine boundary.
//!
//! Every data-carrying call goes through a fixed-capacity buffer with an
//! explicit size check. The contract in both directions: never expose
//! more bytes than were actually produced, never accept more bytes than
//! the destination can hold. Oversized payloads are rejected before any
//! copy, never truncated.
//!
//! ## Size classes
//!
//! - `RESPONSE_CAPACITY` (64 B): inbound host responses
//! - `MESSAGE_CAPACITY` (4096 B): outbound engine messages
//! - `QUERY_CAPACITY` (16384 B): outbound query results

use crate::error::{BridgeError, BridgeResult};

/// Maximum inbound response payload, in bytes.
pub const RESPONSE_CAPACITY: usize = 64;

/// Scratch capacity for engine-produced messages, in bytes.
pub const MESSAGE_CAPACITY: usize = 4096;

/// Scratch capacity for query results, in bytes.
pub const QUERY_CAPACITY: usize = 16384;

/// Fixed 64-byte scratch area for inbound response payloads.
///
/// `load` rejects anything over capacity before touching the scratch,
/// so a failed load leaves the previous contents (and whatever the
/// engine last saw) intact. Trailing bytes past the loaded length keep
/// their previous or zero value; the engine defines their semantics,
/// this layer never exposes them.
#[derive(Clone, Debug)]
pub struct ResponseBuffer {
    data: [u8; RESPONSE_CAPACITY],
    len: usize,
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self { data: [0; RESPONSE_CAPACITY], len: 0 }
    }
}

impl ResponseBuffer {
    /// Create a zeroed, empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a payload in, replacing the previous one.
    ///
    /// Fails with `BufferOverflow` before any copy if `payload` exceeds
    /// 64 bytes.
    pub fn load(&mut self, payload: &[u8]) -> BridgeResult<()> {
        if payload.len() > RESPONSE_CAPACITY {
            return Err(BridgeError::BufferOverflow {
                len: payload.len(),
                capacity: RESPONSE_CAPACITY,
            });
        }

        self.data[..payload.len()].copy_from_slice(payload);
        self.len = payload.len();
        Ok(())
    }

    /// The currently loaded payload, exact length.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Length of the currently loaded payload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether a payload is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fixed-capacity scratch for engine-produced payloads.
///
/// The engine writes into the full scratch and reports how many bytes
/// it produced; only that exact-length slice is ever exposed. An engine
/// reporting more than the capacity violates the marshalling contract
/// and surfaces as `BufferOverflow`.
///
/// ## Example
///
/// ```
/// use duel_bridge::marshal::ScratchBuffer;
///
/// let mut scratch = ScratchBuffer::message();
/// let bytes = scratch
///     .fill(|buf| {
///         buf[..3].copy_from_slice(b"abc");
///         3
///     })
///     .unwrap();
/// assert_eq!(bytes, b"abc");
/// ```
#[derive(Clone, Debug)]
pub struct ScratchBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl ScratchBuffer {
    /// Create a zeroed scratch of the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: vec![0; capacity].into_boxed_slice(), len: 0 }
    }

    /// Scratch sized for engine messages (4096 bytes).
    #[must_use]
    pub fn message() -> Self {
        Self::with_capacity(MESSAGE_CAPACITY)
    }

    /// Scratch sized for query results (16384 bytes).
    #[must_use]
    pub fn query() -> Self {
        Self::with_capacity(QUERY_CAPACITY)
    }

    /// Total scratch capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Let a producer write into the scratch and report its length.
    ///
    /// Returns the exact-length produced slice. Fails with
    /// `BufferOverflow` if the reported length exceeds the capacity; in
    /// that case nothing is exposed.
    pub fn fill<F>(&mut self, produce: F) -> BridgeResult<&[u8]>
    where
        F: FnOnce(&mut [u8]) -> usize,
    {
        let produced = produce(&mut self.data);
        if produced > self.data.len() {
            self.len = 0;
            return Err(BridgeError::BufferOverflow {
                len: produced,
                capacity: self.data.len(),
            });
        }

        self.len = produced;
        Ok(&self.data[..self.len])
    }

    /// The most recently produced payload, exact length.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}
