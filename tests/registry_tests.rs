//! Registry property tests.
//!
//! Randomized register/remove interleavings checking the invariant that
//! ids held by currently-live handles are pairwise distinct at every
//! observation point, plus the deterministic reuse-order cases.

use std::collections::HashSet;

use proptest::prelude::*;

use duel_bridge::registry::{DuelHandle, DuelId, HandleRegistry};

/// One step of an interleaving.
#[derive(Clone, Copy, Debug)]
enum Step {
    Register(u64),
    /// Remove the nth live id (mod live count), oldest first.
    RemoveLive(usize),
    /// Remove an id that was never issued.
    RemoveBogus(u32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..1000).prop_map(Step::Register),
        (0usize..64).prop_map(Step::RemoveLive),
        // High ids the counter cannot plausibly reach in one run.
        (100_000u32..200_000).prop_map(Step::RemoveBogus),
    ]
}

proptest! {
    /// Live ids stay pairwise distinct across arbitrary interleavings,
    /// including removals of absent ids.
    #[test]
    fn live_ids_pairwise_distinct(steps in prop::collection::vec(step_strategy(), 1..200)) {
        let mut duels = HandleRegistry::new();
        let mut live: Vec<DuelId> = Vec::new();

        for step in steps {
            match step {
                Step::Register(raw) => {
                    let id = duels.register(DuelHandle::new(raw));
                    prop_assert!(!live.contains(&id), "id {} issued twice", id);
                    prop_assert_ne!(id, DuelId::NONE);
                    live.push(id);
                }
                Step::RemoveLive(n) => {
                    if !live.is_empty() {
                        let id = live.remove(n % live.len());
                        prop_assert!(duels.remove(id).is_some());
                    }
                }
                Step::RemoveBogus(raw) => {
                    // Must be a no-op: absent ids never enter the pool.
                    prop_assert!(duels.remove(DuelId::new(raw)).is_none());
                }
            }

            // Observation point: every live id resolves, uniquely.
            let distinct: HashSet<_> = live.iter().copied().collect();
            prop_assert_eq!(distinct.len(), live.len());
            prop_assert_eq!(duels.len(), live.len());
            for id in &live {
                prop_assert!(duels.lookup(*id).is_some());
            }
        }
    }

    /// A removed id always resolves to not-found until reissued.
    #[test]
    fn removed_ids_do_not_resolve(count in 1usize..32) {
        let mut duels = HandleRegistry::new();

        let ids: Vec<_> = (0..count as u64)
            .map(|raw| duels.register(DuelHandle::new(raw)))
            .collect();

        for id in &ids {
            duels.remove(*id);
            prop_assert_eq!(duels.lookup(*id), None);
        }
        prop_assert!(duels.is_empty());
    }
}

/// Canonical reuse order: release 1 then 2, get back 2 then 1.
#[test]
fn test_reuse_order_matches_release_order() {
    let mut duels = HandleRegistry::new();

    let id1 = duels.register(DuelHandle::new(10));
    let id2 = duels.register(DuelHandle::new(20));
    assert_eq!((id1, id2), (DuelId::new(1), DuelId::new(2)));

    duels.remove(id1);
    duels.remove(id2);

    assert_eq!(duels.register(DuelHandle::new(30)), DuelId::new(2));
    assert_eq!(duels.register(DuelHandle::new(40)), DuelId::new(1));
}
