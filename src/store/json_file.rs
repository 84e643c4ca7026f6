//! JSON file employee store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::EmployeeStore;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// The document written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// Every employee, in registry order.
    pub employees: Vec<Employee>,
}

/// Stores employees as a single JSON snapshot file.
///
/// A missing file loads as an empty collection. Saving writes to a sibling
/// temporary file and renames it over the target, creating parent
/// directories as needed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is read until [`load`](EmployeeStore::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl ToString) -> EngineError {
        EngineError::Persistence {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl EmployeeStore for JsonFileStore {
    fn load(&self) -> EngineResult<Vec<Employee>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No employee data file, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.error(err)),
        };

        let snapshot: EmployeeSnapshot =
            serde_json::from_str(&content).map_err(|e| self.error(e))?;

        debug!(
            path = %self.path.display(),
            employees = snapshot.employees.len(),
            saved_at = %snapshot.saved_at,
            "Loaded employee snapshot"
        );
        Ok(snapshot.employees)
    }

    fn save(&self, employees: &[Employee]) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }

        let snapshot = EmployeeSnapshot {
            saved_at: Utc::now(),
            employees: employees.to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| self.error(e))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| self.error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.error(e))?;

        info!(
            path = %self.path.display(),
            employees = employees.len(),
            "Saved employee snapshot"
        );
        Ok(())
    }
}
