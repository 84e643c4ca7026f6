//! Persistence collaborators for the registry.
//!
//! The registry only knows the [`EmployeeStore`] contract: load every record
//! at start-up, save every record on request. How and where records are kept
//! is up to the implementation.

mod json_file;
mod memory;

pub use json_file::{EmployeeSnapshot, JsonFileStore};
pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::Employee;

/// Loads and saves the full employee collection.
pub trait EmployeeStore: Send + Sync {
    /// Returns all stored employees in their saved order.
    ///
    /// Returns an empty collection when nothing has been saved yet.
    fn load(&self) -> EngineResult<Vec<Employee>>;

    /// Replaces the stored collection with `employees`.
    fn save(&self, employees: &[Employee]) -> EngineResult<()>;
}
