//! Fixed-size open-addressing hash table engine for teaching collision
//! resolution.
//!
//! ## Scope
//! This crate implements the probing table behind an interactive visualizer:
//! a fixed-size slot array, a selectable collision-resolution strategy
//! (linear or quadratic probing), and insert/search/remove operations that
//! record the full probe sequence they walked so a shell can highlight it.
//!
//! ## Key invariants
//! - The home slot is always `((key mod size) + size) mod size`, normalized
//!   into `[0, size)` for negative keys.
//! - No operation visits more than `size` probe offsets; every walk
//!   terminates.
//! - Deleted slots become tombstones, never empties, so probe chains for
//!   other keys stay intact.
//! - Switching strategy clears the table: entries placed under the old probe
//!   rule are not guaranteed reachable under the new one.
//!
//! ## Notable entry points
//! - [`ProbeTable`]: the typed engine (keys are `i64`, sizes are `usize`).
//! - [`Session`] / [`InputPolicy`]: raw-string boundary for UI shells, with
//!   configurable magnitude and formatting rules.
//! - [`TableSnapshot`]: owned, serializable view for rendering.
//!
//! ## Design trade-offs
//! The engine favors transparency over throughput: probe paths are recorded
//! on every operation and slots are plain enum values. Duplicate keys are
//! allowed by design; the engine does not deduplicate on insert.

pub mod input;

mod errors;
mod session;
mod strategy;
mod table;

pub use errors::{InitError, InsertError, RemoveError, SearchError};
pub use input::{InputPolicy, InputViolation};
pub use session::Session;
pub use strategy::{ProbeStrategy, UnknownStrategy};
pub use table::{ProbeTable, Slot, TableSnapshot};
