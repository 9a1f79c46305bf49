//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee record core**. It owns the authoritative
//! collection of records, derives the currently visible page from it, and
//! persists the whole collection through a pluggable storage port. Any
//! presentation layer (a web page, a TUI, a test harness) drives it through
//! the same facade.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation layer (external, not in this crate)           │
//! │  - Renders forms and tables, collects validated field input │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Facade (api.rs)                                            │
//! │  - Roster<S>: mutations, view-state setters, derived reads  │
//! │  - Re-derives the visible page synchronously on any change  │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                        │
//!                    ▼                        ▼
//! ┌──────────────────────────┐  ┌─────────────────────────────┐
//! │  View pipeline (view.rs) │  │  Storage layer (store/)     │
//! │  - filter → sort → page  │  │  - DataStore trait          │
//! │  - pure, no state        │  │  - JsonFileStore, InMemory  │
//! └──────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Writer, Whole-Collection Writes
//!
//! Exactly one `Roster` owns the collection; there is no shared or concurrent
//! access. Every mutation writes the entire collection through the storage
//! port before returning. That makes each create/update/delete atomic to any
//! observer and keeps the storage format trivial: a single JSON array.
//!
//! ## Key Principle: Derived State Is Recomputed, Never Patched
//!
//! The visible page is a pure function of (collection, filter, sort, page,
//! page size). The facade re-runs [`view::derive`] after every change instead
//! of incrementally editing the derived list, so the view can never drift
//! from the authoritative data.
//!
//! ## Failure Posture
//!
//! Nothing here is fatal. A corrupt storage file degrades to an empty
//! collection at hydrate (logged, not raised). A failed persist is returned
//! to the caller while the in-memory collection keeps the mutation; the next
//! successful persist writes everything.
//!
//! ## Module Overview
//!
//! - [`api`]: the `Roster` facade, entry point for all operations
//! - [`view`]: the filter/sort/paginate pipeline
//! - [`store`]: storage port and its file/memory backends
//! - [`model`]: record and view-state types, date normalization
//! - [`id`]: opaque id generation
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod id;
pub mod model;
pub mod store;
pub mod view;

pub use api::Roster;
pub use error::{Result, RosterError};
pub use model::{
    Employee, EmployeeDraft, FilterSpec, Pagination, SortDirection, SortField, SortSpec,
};
pub use store::{fs::JsonFileStore, memory::InMemoryStore, DataStore};
pub use view::ViewPage;
