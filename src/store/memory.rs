use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;

/// In-memory storage for testing and development. Holds the serialized JSON
/// so loads exercise the same parse path as the file backend. Does NOT
/// persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    serialized: Option<String>,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw content, valid JSON or not. Used to test
    /// hydrate fallback on corrupt storage.
    pub fn with_raw(content: impl Into<String>) -> Self {
        Self {
            serialized: Some(content.into()),
            fail_next_save: false,
        }
    }

    /// Make the next `save` fail, simulating a quota-exceeded write.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }

    pub fn raw(&self) -> Option<&str> {
        self.serialized.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        match &self.serialized {
            None => Ok(Vec::new()),
            Some(content) => {
                let employees: Vec<Employee> =
                    serde_json::from_str(content).map_err(RosterError::Serialization)?;
                Ok(employees)
            }
        }
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(RosterError::Store("storage quota exceeded".to_string()));
        }
        let content = serde_json::to_string(employees).map_err(RosterError::Serialization)?;
        self.serialized = Some(content);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::id;
    use chrono::{TimeZone, Utc};

    /// Build an employee with deterministic timestamps, offset by `day` so
    /// ordering by joining date is predictable in tests.
    pub fn employee(name: &str, department: &str, position: &str, day: u32) -> Employee {
        let joined = Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap();
        let now = Utc::now();
        Employee {
            id: id::generate(),
            name: name.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            joining_date: joined,
            created_at: now,
            updated_at: now,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, records: &[(&str, &str, &str)]) -> Self {
            let employees: Vec<Employee> = records
                .iter()
                .enumerate()
                .map(|(i, (name, dept, pos))| employee(name, dept, pos, i as u32 + 1))
                .collect();
            self.store.save(&employees).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::employee;
    use super::*;

    #[test]
    fn empty_store_loads_empty_collection() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let employees = vec![employee("Ann", "Engineering", "Engineer", 1)];
        store.save(&employees).unwrap();
        assert_eq!(store.load().unwrap(), employees);
    }

    #[test]
    fn corrupt_content_fails_to_load() {
        let store = InMemoryStore::with_raw("][");
        assert!(store.load().is_err());
    }

    #[test]
    fn failing_save_reports_and_recovers() {
        let mut store = InMemoryStore::new();
        store.fail_next_save();
        let employees = vec![employee("Ann", "Sales", "Rep", 1)];
        assert!(matches!(
            store.save(&employees),
            Err(RosterError::Store(_))
        ));
        // the failure is one-shot; the retry goes through
        store.save(&employees).unwrap();
        assert_eq!(store.load().unwrap(), employees);
    }
}
