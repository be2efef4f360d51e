//! Error taxonomy for the bridge.
//!
//! Only two conditions are errors at this layer: an id that does not
//! resolve to a live duel, and a payload that does not fit its fixed
//! buffer. Card and script misses are statuses, not errors - the engine
//! decides the fallback, and nothing here is process-fatal.

use crate::registry::DuelId;

/// Errors surfaced by bridge operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeError {
    /// The id does not resolve to a live duel handle.
    ///
    /// Raised before any engine call; the operation is aborted.
    InvalidId(DuelId),

    /// A payload exceeds the fixed capacity of its buffer.
    ///
    /// Raised before any byte is copied; the destination is untouched.
    BufferOverflow {
        /// Length of the offending payload.
        len: usize,
        /// Capacity of the buffer it was meant for.
        capacity: usize,
    },
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "no live duel with id {}", id),
            Self::BufferOverflow { len, capacity } => {
                write!(f, "payload of {} bytes exceeds buffer capacity {}", len, capacity)
            }
        }
    }
}

impl std::error::Error for BridgeError {}

/// Result alias used throughout the bridge.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BridgeError::InvalidId(DuelId::new(7));
        assert_eq!(format!("{}", err), "no live duel with id Duel(7)");

        let err = BridgeError::BufferOverflow { len: 65, capacity: 64 };
        assert_eq!(
            format!("{}", err),
            "payload of 65 bytes exceeds buffer capacity 64"
        );
    }
}
