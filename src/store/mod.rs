//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence port for the roster: one durable
//! entry holding the entire collection, written through on every mutation.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (incremental writes, a database) without
//!   touching the store's mutation logic
//!
//! The whole-collection write is a deliberate simplicity choice: every save
//! serializes all records, which is fine at the intended scale of hundreds of
//! records. A backend targeting larger collections can keep the same trait and
//! persist deltas internally.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production backend. A single `employees.json`
//!   file holding a JSON array of records.
//! - [`memory::InMemoryStore`]: in-memory backend for tests. Holds the
//!   serialized form so round trips exercise real serialization.
//!
//! ## Failure contract
//!
//! `load` distinguishes "nothing stored yet" (empty collection, not an error)
//! from "stored but unreadable" (an error the caller may downgrade — the
//! facade falls back to an empty collection on hydrate rather than refusing to
//! start). `save` failures leave the in-memory collection untouched and are
//! surfaced to the caller as recoverable.

use crate::error::Result;
use crate::model::Employee;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait DataStore {
    /// Read the full collection. Absent storage yields an empty collection;
    /// unreadable storage yields an error.
    fn load(&self) -> Result<Vec<Employee>>;

    /// Write the full collection, replacing whatever was stored before.
    fn save(&mut self, employees: &[Employee]) -> Result<()>;
}
