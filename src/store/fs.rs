use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the durable entry, matching the browser-storage key the
/// persisted layout was defined against.
const DATA_FILENAME: &str = "employees.json";

/// File-backed store: the whole collection as one pretty-printed JSON array.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(RosterError::Io)?;
        let employees: Vec<Employee> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(employees).map_err(RosterError::Serialization)?;
        fs::write(self.data_path(), content).map_err(RosterError::Io)?;
        tracing::debug!(count = employees.len(), "persisted collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id;
    use chrono::Utc;

    fn sample(name: &str) -> Employee {
        let now = Utc::now();
        Employee {
            id: id::generate(),
            name: name.to_string(),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            joining_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn load_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("never-created"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("data"));
        let employees = vec![sample("Ann"), sample("Bob")];

        store.save(&employees).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, employees);
    }

    #[test]
    fn load_on_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.data_path(), "not json {{").unwrap();
        assert!(matches!(
            store.load(),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        store.save(&[sample("Ann"), sample("Bob")]).unwrap();
        store.save(&[sample("Cleo")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Cleo");
    }
}
