//! Id and handle newtypes, and the registry mapping one to the other.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pool::IdPool;

/// Host-safe identifier for a live duel.
///
/// Fits comfortably in any host runtime's safe-integer range. `0` is
/// reserved as the "no such id" sentinel and is never issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DuelId(pub u32);

impl DuelId {
    /// The reserved "no such id" sentinel.
    pub const NONE: Self = Self(0);

    /// Create a duel id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DuelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duel({})", self.0)
    }
}

/// Opaque engine-owned token for a running duel.
///
/// Conceptually a pointer-sized value. This layer never dereferences or
/// interprets it; it only stores and returns it. Kept as a distinct
/// newtype so a raw handle can never be mistaken for a `DuelId` or vice
/// versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DuelHandle(pub u64);

impl DuelHandle {
    /// Wrap a raw engine handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Maps duel ids to engine handles.
///
/// The engine owns the objects behind the handles for their entire
/// lifetime; the registry owns only the mapping entries. Registering the
/// same handle twice is permitted and yields two independent ids.
///
/// ## Example
///
/// ```
/// use duel_bridge::registry::{DuelHandle, HandleRegistry};
///
/// let mut duels = HandleRegistry::new();
/// let id = duels.register(DuelHandle::new(0xdead_beef));
///
/// assert_eq!(duels.lookup(id), Some(DuelHandle::new(0xdead_beef)));
///
/// duels.remove(id);
/// assert_eq!(duels.lookup(id), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HandleRegistry {
    handles: FxHashMap<DuelId, DuelHandle>,
    pool: IdPool,
}

impl HandleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle and return its freshly issued id.
    pub fn register(&mut self, handle: DuelHandle) -> DuelId {
        let id = self.pool.acquire();
        self.handles.insert(id, handle);
        id
    }

    /// Look up the handle for an id.
    ///
    /// Callers must treat `None` as a hard `InvalidId` error, never
    /// proceed with a null handle.
    #[must_use]
    pub fn lookup(&self, id: DuelId) -> Option<DuelHandle> {
        self.handles.get(&id).copied()
    }

    /// Remove a mapping and recycle its id.
    ///
    /// Returns the handle that was mapped, or `None` if the id was not
    /// registered. An absent id is a no-op: it is NOT pushed onto the
    /// free list, so a never-issued or already-removed id can never be
    /// reissued while another duel holds it.
    pub fn remove(&mut self, id: DuelId) -> Option<DuelHandle> {
        let handle = self.handles.remove(&id)?;
        self.pool.release(id);
        Some(handle)
    }

    /// Check whether an id is currently registered.
    #[must_use]
    pub fn contains(&self, id: DuelId) -> bool {
        self.handles.contains_key(&id)
    }

    /// Number of live duels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no duels are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterate over live `(id, handle)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (DuelId, DuelHandle)> + '_ {
        self.handles.iter().map(|(id, handle)| (*id, *handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut duels = HandleRegistry::new();

        let id = duels.register(DuelHandle::new(1234));
        assert_eq!(id, DuelId::new(1));
        assert_eq!(duels.lookup(id), Some(DuelHandle::new(1234)));

        assert_eq!(duels.lookup(DuelId::new(99)), None);
        assert_eq!(duels.lookup(DuelId::NONE), None);
    }

    #[test]
    fn test_same_handle_twice_gets_distinct_ids() {
        let mut duels = HandleRegistry::new();

        let a = duels.register(DuelHandle::new(7));
        let b = duels.register(DuelHandle::new(7));

        assert_ne!(a, b);
        assert_eq!(duels.lookup(a), duels.lookup(b));
    }

    #[test]
    fn test_remove_recycles_lifo() {
        let mut duels = HandleRegistry::new();

        let id1 = duels.register(DuelHandle::new(10));
        let id2 = duels.register(DuelHandle::new(20));
        assert_eq!(id1, DuelId::new(1));
        assert_eq!(id2, DuelId::new(2));

        duels.remove(id1);
        duels.remove(id2);

        assert_eq!(duels.register(DuelHandle::new(30)), DuelId::new(2));
        assert_eq!(duels.register(DuelHandle::new(40)), DuelId::new(1));
    }

    #[test]
    fn test_remove_absent_id_does_not_recycle() {
        let mut duels = HandleRegistry::new();

        let id1 = duels.register(DuelHandle::new(10));

        // Neither a never-issued id nor a double remove may enter the
        // free list.
        assert_eq!(duels.remove(DuelId::new(42)), None);
        assert_eq!(duels.remove(id1), Some(DuelHandle::new(10)));
        assert_eq!(duels.remove(id1), None);

        let next = duels.register(DuelHandle::new(20));
        assert_eq!(next, id1);
        assert_eq!(duels.register(DuelHandle::new(30)), DuelId::new(2));
    }

    #[test]
    fn test_live_ids_distinct() {
        let mut duels = HandleRegistry::new();

        let ids: Vec<_> = (0..8).map(|i| duels.register(DuelHandle::new(i))).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_len_tracks_live_duels() {
        let mut duels = HandleRegistry::new();
        assert!(duels.is_empty());

        let id = duels.register(DuelHandle::new(1));
        assert_eq!(duels.len(), 1);
        assert!(duels.contains(id));

        duels.remove(id);
        assert!(duels.is_empty());
        assert!(!duels.contains(id));
    }
}
