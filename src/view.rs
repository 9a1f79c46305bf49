//! The derived-view pipeline: filter, then sort, then paginate.
//!
//! [`derive`] is a pure function of a collection snapshot and the current view
//! state. It never mutates the collection and holds no state of its own; the
//! facade re-runs it after every mutation or view-state change.

use std::cmp::Ordering;

use crate::model::{Employee, FilterSpec, SortDirection, SortField, SortSpec, ALL_DEPARTMENTS};

/// One derived page plus the total count of records matching the filter
/// (independent of which page was requested).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPage {
    pub items: Vec<Employee>,
    pub total: usize,
}

/// Run the full pipeline. An out-of-range `page` (including 0) yields empty
/// `items` with `total` still reflecting the filtered count; clamping the page
/// is the caller's job.
pub fn derive(
    employees: &[Employee],
    filter: &FilterSpec,
    sort: &SortSpec,
    page: usize,
    page_size: usize,
) -> ViewPage {
    let mut matched: Vec<Employee> = employees
        .iter()
        .filter(|emp| matches_filter(emp, filter))
        .cloned()
        .collect();

    sort_records(&mut matched, sort);

    let total = matched.len();
    let items = paginate(matched, page, page_size);
    ViewPage { items, total }
}

fn matches_filter(emp: &Employee, filter: &FilterSpec) -> bool {
    if !filter.search.is_empty() {
        let term = filter.search.to_lowercase();
        let hit = emp.name.to_lowercase().contains(&term)
            || emp.department.to_lowercase().contains(&term)
            || emp.position.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    match filter.department.as_deref() {
        None | Some(ALL_DEPARTMENTS) => true,
        // department equality is case-sensitive, unlike the search term
        Some(dept) => emp.department == dept,
    }
}

/// Stable sort by the selected field; equal keys keep their relative input
/// order so pagination stays reproducible across re-sorts.
fn sort_records(records: &mut [Employee], sort: &SortSpec) {
    records.sort_by(|a, b| {
        let ord = match sort.field {
            SortField::Name => text_cmp(&a.name, &b.name),
            SortField::Department => text_cmp(&a.department, &b.department),
            SortField::Position => text_cmp(&a.position, &b.position),
            SortField::JoiningDate => a.joining_date.cmp(&b.joining_date),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Case-insensitive ordering with a byte-order tiebreak, a deterministic
/// stand-in for locale collation. Fully equal strings compare Equal so sort
/// stability is preserved.
fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn paginate(records: Vec<Employee>, page: usize, page_size: usize) -> Vec<Employee> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    records
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect()
}
