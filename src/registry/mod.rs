//! Duel handle registry: small-integer ids for engine-owned handles.
//!
//! The engine hands back pointer-sized opaque handles that are not safe
//! to expose to the host. The registry maps each live handle to a small
//! positive `DuelId` and recycles ids when duels end.
//!
//! ## Key Types
//!
//! - `DuelId`: host-safe integer id (`0` is never issued)
//! - `DuelHandle`: opaque engine-owned token, never dereferenced here
//! - `IdPool`: counter + LIFO free list backing id allocation
//! - `HandleRegistry`: id -> handle mapping built on the pool

pub mod handles;
pub mod pool;

pub use handles::{DuelHandle, DuelId, HandleRegistry};
pub use pool::IdPool;
