//! In-process employee store.

use std::sync::{Arc, Mutex};

use super::EmployeeStore;
use crate::error::EngineResult;
use crate::models::Employee;

/// Keeps the saved collection in memory.
///
/// Clones share the same contents, so a test can hand one clone to a
/// registry and inspect what it saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Arc<Mutex<Vec<Employee>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that will load `employees`.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(Mutex::new(employees)),
            saves: Arc::default(),
        }
    }

    /// The currently saved collection.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.employees
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EmployeeStore for MemoryStore {
    fn load(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.snapshot())
    }

    fn save(&self, employees: &[Employee]) -> EngineResult<()> {
        *self
            .employees
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = employees.to_vec();
        *self.saves.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
        Ok(())
    }
}
