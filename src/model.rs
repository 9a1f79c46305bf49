use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Departments offered by the record form's picker. `department` itself is
/// free-form; this list only seeds the UI.
pub const SUGGESTED_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "Finance",
    "HR",
    "Operations",
    "Other",
];

/// Department filter value meaning "no constraint".
pub const ALL_DEPARTMENTS: &str = "all";

/// One employee record. `id` and `created_at` are fixed at creation; every
/// other field is replaced wholesale on update, which also refreshes
/// `updated_at`.
///
/// Serialized with camelCase keys to stay compatible with the persisted
/// layout: a flat JSON array of objects with string-valued fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub joining_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The field tuple a form submits for create/update. `joining_date` arrives as
/// the raw input string and is normalized to an instant by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub name: String,
    pub department: String,
    pub position: String,
    pub joining_date: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        joining_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            position: position.into(),
            joining_date: joining_date.into(),
        }
    }

    /// Pre-submit validation for presentation layers: non-empty checks plus a
    /// date parse. The store itself only re-checks the date.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::MissingField { field: "Name" });
        }
        if self.department.trim().is_empty() {
            return Err(RosterError::MissingField { field: "Department" });
        }
        if self.position.trim().is_empty() {
            return Err(RosterError::MissingField { field: "Position" });
        }
        parse_joining_date(&self.joining_date)?;
        Ok(())
    }
}

/// Parse a joining date from form input and normalize it to a UTC instant.
/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` calendar date
/// (taken as midnight UTC).
pub fn parse_joining_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        // midnight UTC is always representable for a valid calendar date
        if let Some(instant) = date.and_hms_opt(0, 0, 0) {
            return Ok(instant.and_utc());
        }
    }
    Err(RosterError::InvalidDate(input.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Department,
    Position,
    JoiningDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Which field to order by and in which direction. Process state only, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Free-text search plus an optional department constraint. `None` and the
/// [`ALL_DEPARTMENTS`] sentinel both mean "any department".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: String,
    pub department: Option<String>,
}

impl FilterSpec {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Current page (1-based), page size, and the total count of records matching
/// the active filter. `total` is derived by the view pipeline; callers never
/// set it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            total: 0,
        }
    }
}

impl Pagination {
    /// Number of pages for the current total, never less than one.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        std::cmp::max(1, self.total.div_ceil(self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_bare_calendar_date_as_midnight_utc() {
        let instant = parse_joining_date("2023-06-15").unwrap();
        assert_eq!(instant.year(), 2023);
        assert_eq!(instant.month(), 6);
        assert_eq!(instant.day(), 15);
        assert_eq!(instant.to_rfc3339(), "2023-06-15T00:00:00+00:00");
    }

    #[test]
    fn parses_full_timestamp_and_normalizes_to_utc() {
        let instant = parse_joining_date("2023-06-15T10:30:00+02:00").unwrap();
        assert_eq!(instant.to_rfc3339(), "2023-06-15T08:30:00+00:00");
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(matches!(
            parse_joining_date("next tuesday"),
            Err(RosterError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_joining_date("2023-13-40"),
            Err(RosterError::InvalidDate(_))
        ));
    }

    #[test]
    fn draft_validation_reports_first_missing_field() {
        let draft = EmployeeDraft::new("", "Sales", "Rep", "2023-01-01");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let draft = EmployeeDraft::new("Ann", "  ", "Rep", "2023-01-01");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Department is required");
    }

    #[test]
    fn draft_validation_accepts_complete_input() {
        let draft = EmployeeDraft::new("Ann", "Engineering", "Engineer", "2023-01-01");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let mut p = Pagination::default();
        assert_eq!(p.total_pages(), 1);
        p.total = 21;
        assert_eq!(p.total_pages(), 3);
        p.total = 20;
        assert_eq!(p.total_pages(), 2);
    }

    #[test]
    fn employee_serializes_with_camel_case_keys() {
        let now = Utc::now();
        let emp = Employee {
            id: "abc".into(),
            name: "Ann".into(),
            department: "Engineering".into(),
            position: "Engineer".into(),
            joining_date: now,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert!(json.get("joiningDate").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("joining_date").is_none());
    }
}
