//! Fixed-size open-addressing hash table with an observable probe sequence.
//!
//! The table is deliberately transparent: slots are plain enum values and
//! every operation records the full list of indices it visited, so a shell
//! can render the array and highlight the walk. There is no resizing, no
//! rehashing, and no key deduplication.
//!
//! # Key invariants
//! - A walk visits at most `size` slots; beyond that the table is full (for
//!   insert) or the key is conclusively absent (for search/remove).
//! - Removal leaves a tombstone, never an empty slot. An empty slot is the
//!   only early terminator for search/remove, because insertion would have
//!   landed there.
//! - The probe record belongs to the most recent operation only; it is not
//!   table state and does not survive `initialize` or `set_strategy`.

use serde::{Deserialize, Serialize};

use crate::errors::{InitError, InsertError, RemoveError, SearchError};
use crate::input::InputViolation;
use crate::strategy::ProbeStrategy;

/// One slot of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Never occupied since the last clear. Terminates search/remove walks.
    Empty,
    /// Holds a key.
    Occupied(i64),
    /// Previously occupied. Insert may reuse it; search/remove walk past it,
    /// since the key they want may have been displaced further along the
    /// same path when it was inserted.
    Tombstone,
}

/// Owned point-in-time view of the table for rendering.
///
/// The probe path covers the most recent operation; auto-expiring the
/// highlight is a presentation concern, not table state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub ready: bool,
    pub size: usize,
    pub strategy: Option<ProbeStrategy>,
    pub slots: Vec<Slot>,
    pub probe_path: Vec<usize>,
}

/// Fixed-size probing hash table.
///
/// Lifecycle: [`initialize`](Self::initialize) allocates the slot array and
/// marks the table ready; [`reset`](Self::reset) returns it to the
/// uninitialized state. Operations that probe fail fast with `NotReady` or
/// `StrategyUnset` until both a size and a strategy have been chosen.
#[derive(Clone, Debug, Default)]
pub struct ProbeTable {
    /// Empty vector means uninitialized; `initialize` enforces `size >= 1`.
    slots: Vec<Slot>,
    strategy: Option<ProbeStrategy>,
    /// Indices visited by the most recent operation, in order.
    probe_path: Vec<usize>,
}

impl ProbeTable {
    /// Creates an uninitialized table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Home slot for a key: `((key mod size) + size) mod size`.
    ///
    /// Always in `[0, size)`, negative keys included; the remainder is
    /// normalized into the non-negative range, not truncated toward zero.
    pub fn hash(key: i64, size: usize) -> usize {
        debug_assert!(size >= 1);
        (key as i128).rem_euclid(size as i128) as usize
    }

    /// Slot index probed on the given attempt.
    ///
    /// Total for `attempt` in `0..size`; the engine never evaluates
    /// `attempt >= size`.
    pub fn probe(key: i64, size: usize, strategy: ProbeStrategy, attempt: usize) -> usize {
        debug_assert!(attempt < size);
        let home = Self::hash(key, size) as u128;
        ((home + strategy.offset(attempt)) % size as u128) as usize
    }

    /// Allocates `size` empty slots and marks the table ready.
    ///
    /// Re-initializing an already-initialized table is permitted and fully
    /// replaces prior contents. The chosen strategy is kept; only
    /// strategy-driven placements are discarded.
    pub fn initialize(&mut self, size: usize) -> Result<(), InitError> {
        if size == 0 {
            return Err(InitError::InvalidSize(InputViolation::Zero));
        }
        self.slots.clear();
        self.slots.resize(size, Slot::Empty);
        self.probe_path.clear();
        Ok(())
    }

    /// Selects the collision-resolution strategy.
    ///
    /// Entries placed under the old probe rule are not guaranteed reachable
    /// under the new one, so an initialized table is cleared back to empty
    /// slots rather than migrated.
    pub fn set_strategy(&mut self, strategy: ProbeStrategy) {
        self.strategy = Some(strategy);
        self.slots.fill(Slot::Empty);
        self.probe_path.clear();
    }

    /// Inserts a key, landing in the first empty or tombstone slot on its
    /// probe path. Returns the landing index.
    ///
    /// Duplicate keys may occupy multiple distinct slots; the engine does
    /// not deduplicate. Fails with `TableFull` after exactly `size` probe
    /// attempts, which can happen even when tombstones exist elsewhere if
    /// none lie on this key's path.
    pub fn insert(&mut self, key: i64) -> Result<usize, InsertError> {
        if !self.is_ready() {
            return Err(InsertError::NotReady);
        }
        let strategy = self.strategy.ok_or(InsertError::StrategyUnset)?;
        let size = self.slots.len();
        self.probe_path.clear();
        for attempt in 0..size {
            let idx = Self::probe(key, size, strategy, attempt);
            self.probe_path.push(idx);
            match self.slots[idx] {
                Slot::Empty | Slot::Tombstone => {
                    self.slots[idx] = Slot::Occupied(key);
                    return Ok(idx);
                }
                Slot::Occupied(_) => {}
            }
        }
        Err(InsertError::TableFull)
    }

    /// Finds the index holding `key`.
    ///
    /// Tombstones do not terminate the walk; an empty slot does, because
    /// insertion would have placed the key there.
    pub fn search(&mut self, key: i64) -> Result<usize, SearchError> {
        if !self.is_ready() {
            return Err(SearchError::NotReady);
        }
        let strategy = self.strategy.ok_or(SearchError::StrategyUnset)?;
        let size = self.slots.len();
        self.probe_path.clear();
        for attempt in 0..size {
            let idx = Self::probe(key, size, strategy, attempt);
            self.probe_path.push(idx);
            match self.slots[idx] {
                Slot::Occupied(found) if found == key => return Ok(idx),
                Slot::Empty => return Err(SearchError::NotFound),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        Err(SearchError::NotFound)
    }

    /// Removes `key`, overwriting its slot with a tombstone.
    ///
    /// Writing `Empty` instead would break the probe continuation for other
    /// keys whose path crosses this slot.
    pub fn remove(&mut self, key: i64) -> Result<usize, RemoveError> {
        if !self.is_ready() {
            return Err(RemoveError::NotReady);
        }
        let strategy = self.strategy.ok_or(RemoveError::StrategyUnset)?;
        let size = self.slots.len();
        self.probe_path.clear();
        for attempt in 0..size {
            let idx = Self::probe(key, size, strategy, attempt);
            self.probe_path.push(idx);
            match self.slots[idx] {
                Slot::Occupied(found) if found == key => {
                    self.slots[idx] = Slot::Tombstone;
                    return Ok(idx);
                }
                Slot::Empty => return Err(RemoveError::NotFound),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        Err(RemoveError::NotFound)
    }

    /// Discards size, slots, strategy, and probe record; the table returns
    /// to the pre-initialization state.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.strategy = None;
        self.probe_path.clear();
    }

    /// Whether the table has been initialized.
    pub fn is_ready(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Table size; 0 when uninitialized.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// The active strategy, if one has been chosen.
    pub fn strategy(&self) -> Option<ProbeStrategy> {
        self.strategy
    }

    /// Read-only view of the slot array.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Indices visited by the most recent operation, in order.
    pub fn last_probe_path(&self) -> &[usize] {
        &self.probe_path
    }

    /// Owned snapshot for rendering or serialization.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            ready: self.is_ready(),
            size: self.size(),
            strategy: self.strategy,
            slots: self.slots.clone(),
            probe_path: self.probe_path.clone(),
        }
    }
}
