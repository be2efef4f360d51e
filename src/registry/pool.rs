//! Id allocation with LIFO recycling.

use super::handles::DuelId;

/// Issues and recycles duel ids.
///
/// Freshly issued ids come from a counter that starts at 1, so `0` is
/// never issued and stays free as the "no such id" sentinel. Released
/// ids go on a LIFO free list and are reissued most-recently-released
/// first, before the counter advances.
///
/// ## Example
///
/// ```
/// use duel_bridge::registry::{DuelId, IdPool};
///
/// let mut pool = IdPool::new();
/// assert_eq!(pool.acquire(), DuelId::new(1));
/// assert_eq!(pool.acquire(), DuelId::new(2));
///
/// pool.release(DuelId::new(1));
/// assert_eq!(pool.acquire(), DuelId::new(1));
/// assert_eq!(pool.acquire(), DuelId::new(3));
/// ```
#[derive(Clone, Debug)]
pub struct IdPool {
    next: u32,
    free: Vec<DuelId>,
}

impl Default for IdPool {
    fn default() -> Self {
        Self { next: 1, free: Vec::new() }
    }
}

impl IdPool {
    /// Create a pool with no ids issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an id.
    ///
    /// Pops the free list if it is non-empty, otherwise advances the
    /// counter. Never returns `0`; never returns an id currently in use,
    /// provided `release` preconditions were upheld.
    pub fn acquire(&mut self) -> DuelId {
        if let Some(id) = self.free.pop() {
            return id;
        }

        let id = DuelId::new(self.next);
        self.next += 1;
        id
    }

    /// Return an id to the pool for reuse.
    ///
    /// Precondition: `id` was previously acquired and is not currently on
    /// the free list. The caller (`HandleRegistry`) guards this; releasing
    /// an id twice would let `acquire` issue it to two live duels.
    pub fn release(&mut self, id: DuelId) {
        self.free.push(id);
    }

    /// Number of ids waiting on the free list.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut pool = IdPool::new();
        assert_eq!(pool.acquire(), DuelId::new(1));
        assert_ne!(pool.acquire(), DuelId::NONE);
    }

    #[test]
    fn test_lifo_reuse() {
        let mut pool = IdPool::new();
        let a = pool.acquire();
        let b = pool.acquire();

        pool.release(a);
        pool.release(b);

        // Most recently released comes back first.
        assert_eq!(pool.acquire(), b);
        assert_eq!(pool.acquire(), a);
    }

    #[test]
    fn test_counter_resumes_after_free_list_drains() {
        let mut pool = IdPool::new();
        let a = pool.acquire(); // 1
        let _b = pool.acquire(); // 2

        pool.release(a);
        assert_eq!(pool.acquire(), a);
        assert_eq!(pool.acquire(), DuelId::new(3));
    }
}
