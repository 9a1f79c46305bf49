//! # Roster Facade
//!
//! [`Roster`] is the single entry point a presentation layer talks to. It owns
//! the authoritative collection, applies mutations, writes the whole
//! collection through its [`DataStore`] after each one, and keeps a derived
//! page current by re-running the view pipeline synchronously whenever the
//! collection or the view state changes.
//!
//! The data flow is unidirectional: mutation or setter → collection/view-state
//! change → [`view::derive`] → refreshed [`Roster::visible`] page. Nothing
//! here performs I/O beyond the storage port, and nothing assumes a particular
//! UI.
//!
//! Generic over `DataStore`:
//! - Production: `Roster<JsonFileStore>`
//! - Testing: `Roster<InMemoryStore>`

use chrono::Utc;

use crate::error::{Result, RosterError};
use crate::id;
use crate::model::{
    parse_joining_date, Employee, EmployeeDraft, FilterSpec, Pagination, SortSpec,
};
use crate::store::DataStore;
use crate::view::{self, ViewPage};

pub struct Roster<S: DataStore> {
    store: S,
    employees: Vec<Employee>,
    sort: SortSpec,
    filter: FilterSpec,
    pagination: Pagination,
    visible: Vec<Employee>,
}

impl<S: DataStore> Roster<S> {
    /// Load the collection from the backend. Absent storage starts empty;
    /// unreadable storage is logged and also starts empty, so a corrupt file
    /// never blocks startup.
    pub fn hydrate(store: S) -> Self {
        let employees = match store.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("failed to read stored employees, starting empty: {err}");
                Vec::new()
            }
        };

        let mut roster = Self {
            store,
            employees,
            sort: SortSpec::default(),
            filter: FilterSpec::default(),
            pagination: Pagination::default(),
            visible: Vec::new(),
        };
        roster.refresh();
        roster
    }

    // --- mutations -------------------------------------------------------

    /// Add a record. The id and both timestamps are assigned here, never by
    /// the caller; `joining_date` is normalized to a canonical UTC instant.
    pub fn create(&mut self, draft: EmployeeDraft) -> Result<Employee> {
        let joining_date = parse_joining_date(&draft.joining_date)?;
        let now = Utc::now();
        let employee = Employee {
            id: id::generate(),
            name: draft.name,
            department: draft.department,
            position: draft.position,
            joining_date,
            created_at: now,
            updated_at: now,
        };

        self.employees.push(employee.clone());
        self.commit()?;
        Ok(employee)
    }

    /// Replace every mutable field of an existing record. `id` and
    /// `created_at` are preserved, `updated_at` refreshed. Unknown ids are a
    /// reportable [`RosterError::NotFound`], not a silent no-op.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<Employee> {
        let joining_date = parse_joining_date(&draft.joining_date)?;
        let record = self
            .employees
            .iter_mut()
            .find(|emp| emp.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        record.name = draft.name;
        record.department = draft.department;
        record.position = draft.position;
        record.joining_date = joining_date;
        record.updated_at = Utc::now();
        let updated = record.clone();

        self.commit()?;
        Ok(updated)
    }

    /// Remove a record if present. An absent id is not an error; the return
    /// value says whether anything was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.employees.len();
        self.employees.retain(|emp| emp.id != id);
        if self.employees.len() == before {
            tracing::debug!(id, "delete of unknown id ignored");
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    // --- view state ------------------------------------------------------

    /// Change the sort order. Resets to page 1 so a re-sort never strands the
    /// view on a page past the end.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.pagination.page = 1;
        self.refresh();
    }

    /// Change the filter. Resets to page 1, same rationale as [`set_sort`].
    ///
    /// [`set_sort`]: Roster::set_sort
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.pagination.page = 1;
        self.refresh();
    }

    /// Jump to a page. Clamped to at least 1; a page past the end is allowed
    /// and derives an empty visible set.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = std::cmp::max(1, page);
        self.refresh();
    }

    /// Change the page size. Resets to page 1 since prior offsets no longer
    /// line up.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size;
        self.pagination.page = 1;
        self.refresh();
    }

    // --- reads -----------------------------------------------------------

    /// The full authoritative collection, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The current derived page: filtered, sorted, paginated.
    pub fn visible(&self) -> &[Employee] {
        &self.visible
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Distinct department values across the whole collection, sorted, for
    /// populating a filter picker.
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = self
            .employees
            .iter()
            .map(|emp| emp.department.clone())
            .collect();
        departments.sort();
        departments.dedup();
        departments
    }

    // --- internals -------------------------------------------------------

    /// Persist the whole collection, then re-derive the visible page. The
    /// in-memory collection keeps the mutation even when the write fails, so
    /// the session stays usable and a retry can re-persist.
    fn commit(&mut self) -> Result<()> {
        let outcome = self.store.save(&self.employees);
        self.refresh();
        outcome
    }

    fn refresh(&mut self) {
        let ViewPage { items, total } = view::derive(
            &self.employees,
            &self.filter,
            &self.sort,
            self.pagination.page,
            self.pagination.page_size,
        );
        self.pagination.total = total;
        self.visible = items;
    }
}
