//! Property tests for hashing, probe boundedness, and walk termination.

use proptest::prelude::*;

use probelab::{InsertError, ProbeStrategy, ProbeTable, SearchError, Slot};

fn any_strategy() -> impl Strategy<Value = ProbeStrategy> {
    prop_oneof![
        Just(ProbeStrategy::Linear),
        Just(ProbeStrategy::Quadratic),
    ]
}

fn ready_table(size: usize, strategy: ProbeStrategy) -> ProbeTable {
    let mut table = ProbeTable::new();
    table.initialize(size).unwrap();
    table.set_strategy(strategy);
    table
}

proptest! {
    #[test]
    fn hash_is_always_in_range(key in any::<i64>(), size in 1usize..=300) {
        let h = ProbeTable::hash(key, size);
        prop_assert!(h < size);
    }

    #[test]
    fn probe_is_always_in_range(
        key in any::<i64>(),
        size in 1usize..=300,
        strategy in any_strategy(),
        attempt_seed in any::<usize>(),
    ) {
        let attempt = attempt_seed % size;
        let idx = ProbeTable::probe(key, size, strategy, attempt);
        prop_assert!(idx < size);
    }

    #[test]
    fn probe_sequence_starts_at_home(
        key in any::<i64>(),
        size in 1usize..=300,
        strategy in any_strategy(),
    ) {
        prop_assert_eq!(
            ProbeTable::probe(key, size, strategy, 0),
            ProbeTable::hash(key, size)
        );
    }

    #[test]
    fn probe_record_is_bounded(
        size in 1usize..=16,
        strategy in any_strategy(),
        ops in proptest::collection::vec((0u8..3, -40i64..40), 0..64),
    ) {
        let mut table = ready_table(size, strategy);
        for (op, key) in ops {
            let _ = match op {
                0 => table.insert(key).map_err(|_| ()),
                1 => table.search(key).map_err(|_| ()),
                _ => table.remove(key).map_err(|_| ()),
            };
            let path = table.last_probe_path();
            prop_assert!(path.len() <= size);
            prop_assert!(path.iter().all(|&idx| idx < size));
        }
    }

    #[test]
    fn inserted_keys_are_findable(
        size in 1usize..=16,
        strategy in any_strategy(),
        keys in proptest::collection::vec(-40i64..40, 0..24),
    ) {
        // No removes in this walk: every key that landed must be findable,
        // and the first occurrence found must actually hold it.
        let mut table = ready_table(size, strategy);
        for key in keys {
            if let Ok(landed) = table.insert(key) {
                prop_assert_eq!(table.slots()[landed], Slot::Occupied(key));
                let found = table.search(key);
                prop_assert!(found.is_ok());
                let found = found.unwrap();
                prop_assert_eq!(table.slots()[found], Slot::Occupied(key));
            }
        }
    }

    #[test]
    fn fresh_insert_then_search_returns_landing_index(
        size in 1usize..=64,
        strategy in any_strategy(),
        key in any::<i64>(),
    ) {
        let mut table = ready_table(size, strategy);
        let landed = table.insert(key).unwrap();
        prop_assert_eq!(table.search(key), Ok(landed));
    }

    #[test]
    fn remove_then_search_never_finds_the_same_index(
        size in 1usize..=16,
        strategy in any_strategy(),
        keys in proptest::collection::vec(-40i64..40, 1..24),
        victim_pick in any::<prop::sample::Index>(),
    ) {
        let mut table = ready_table(size, strategy);
        for &key in &keys {
            let _ = table.insert(key);
        }
        let victim = keys[victim_pick.index(keys.len())];
        if let Ok(removed) = table.remove(victim) {
            prop_assert_eq!(table.slots()[removed], Slot::Tombstone);
            match table.search(victim) {
                // A duplicate further along the path may still match, but
                // never at the tombstoned index.
                Ok(found) => prop_assert_ne!(found, removed),
                Err(SearchError::NotFound) => {}
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn linear_fill_exhausts_in_exactly_size_probes(
        size in 1usize..=32,
        extra in any::<i64>(),
    ) {
        // Linear probing visits every index, so inserting `size` keys always
        // fills the table; one more insert walks all `size` attempts.
        let mut table = ready_table(size, ProbeStrategy::Linear);
        for key in 0..size as i64 {
            prop_assert!(table.insert(key).is_ok());
        }
        prop_assert!(table.slots().iter().all(|s| matches!(s, Slot::Occupied(_))));
        prop_assert_eq!(table.insert(extra), Err(InsertError::TableFull));
        prop_assert_eq!(table.last_probe_path().len(), size);
    }

    #[test]
    fn strategy_switch_always_clears(
        size in 1usize..=16,
        keys in proptest::collection::vec(-40i64..40, 0..24),
    ) {
        let mut table = ready_table(size, ProbeStrategy::Linear);
        for key in keys {
            let _ = table.insert(key);
        }
        table.set_strategy(ProbeStrategy::Quadratic);
        prop_assert!(table.slots().iter().all(|s| *s == Slot::Empty));
        prop_assert!(table.last_probe_path().is_empty());
    }
}
