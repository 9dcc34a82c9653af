//! Single-caller session: one table plus the input policy guarding it.
//!
//! This is the narrow surface a UI shell talks to. Raw user strings come in,
//! discriminated results and an observable snapshot go out; the shell turns
//! `Display` text into user-facing messages. One mutable session per logical
//! caller; the session holds no synchronization of its own.

use crate::errors::{InitError, InsertError, RemoveError, SearchError};
use crate::input::InputPolicy;
use crate::strategy::ProbeStrategy;
use crate::table::{ProbeTable, TableSnapshot};

/// A teaching session over one probing table.
#[derive(Clone, Debug)]
pub struct Session {
    policy: InputPolicy,
    table: ProbeTable,
}

impl Session {
    /// Creates a session with the given input policy and an uninitialized
    /// table.
    pub fn new(policy: InputPolicy) -> Self {
        policy.validate();
        Self {
            policy,
            table: ProbeTable::new(),
        }
    }

    /// Parses and applies a table size. Returns the accepted size.
    pub fn initialize(&mut self, raw_size: &str) -> Result<usize, InitError> {
        let size = self
            .policy
            .parse_size(raw_size)
            .map_err(InitError::InvalidSize)?;
        self.table.initialize(size)?;
        Ok(size)
    }

    /// Selects the strategy; clears an initialized table (see
    /// [`ProbeTable::set_strategy`]).
    pub fn set_strategy(&mut self, strategy: ProbeStrategy) {
        self.table.set_strategy(strategy);
    }

    /// Parses a key and inserts it. Returns the landing index.
    pub fn insert(&mut self, raw_key: &str) -> Result<usize, InsertError> {
        let key = self
            .policy
            .parse_key(raw_key)
            .map_err(InsertError::InvalidKey)?;
        self.table.insert(key)
    }

    /// Parses a key and searches for it. Returns the match index.
    pub fn search(&mut self, raw_key: &str) -> Result<usize, SearchError> {
        let key = self
            .policy
            .parse_key(raw_key)
            .map_err(SearchError::InvalidKey)?;
        self.table.search(key)
    }

    /// Parses a key and removes it. Returns the tombstoned index.
    pub fn remove(&mut self, raw_key: &str) -> Result<usize, RemoveError> {
        let key = self
            .policy
            .parse_key(raw_key)
            .map_err(RemoveError::InvalidKey)?;
        self.table.remove(key)
    }

    /// Discards the table wholesale; the session survives for a fresh start.
    pub fn reset(&mut self) {
        self.table.reset();
    }

    /// The underlying table, for read-only observation.
    pub fn table(&self) -> &ProbeTable {
        &self.table
    }

    /// Owned snapshot for rendering.
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(InputPolicy::DEFAULT)
    }
}
