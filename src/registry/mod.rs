//! The employee registry.
//!
//! [`Registry`] owns the master employee collection and the fixed set of
//! department buckets. Add, edit, delete and bonus changes are its only
//! mutation entry points; each one validates everything it needs before
//! touching either structure, so a failed call leaves the registry exactly
//! as it was.
//!
//! # Example
//!
//! ```
//! use hr_payroll::models::EmployeeDraft;
//! use hr_payroll::registry::Registry;
//! use hr_payroll::store::MemoryStore;
//! use rust_decimal::Decimal;
//!
//! let mut registry = Registry::initialize(MemoryStore::new()).unwrap();
//! let draft = EmployeeDraft::new("Jane", "Doe", "Sales", Decimal::new(20, 0), Decimal::new(100, 0));
//! let jane = registry.add_employee(draft).unwrap();
//!
//! assert_eq!(jane.id, 1);
//! assert!(registry.department("Sales").unwrap().contains(jane.id));
//! ```

mod ids;

pub use ids::IdGenerator;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::UnknownDepartmentPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Bonus, Department, Employee, EmployeeDraft};
use crate::store::EmployeeStore;

/// The departments every registry is created with, in display order.
pub const DEFAULT_DEPARTMENTS: [&str; 9] = [
    "Development Team",
    "Accounting",
    "Human Resources (HR)",
    "Marketing",
    "Sales",
    "Information Technology (IT)",
    "Quality Assurance (QA)",
    "Project Management",
    "Research and Development (R&D)",
];

/// Employee records plus their department membership.
pub struct Registry {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    ids: IdGenerator,
    store: Arc<dyn EmployeeStore>,
}

impl Registry {
    /// Creates the department buckets and loads stored employees, rejecting
    /// any record whose department is unknown.
    pub fn initialize(store: impl EmployeeStore + 'static) -> EngineResult<Self> {
        Self::initialize_with_policy(store, UnknownDepartmentPolicy::Reject)
    }

    /// Creates the department buckets and loads stored employees.
    ///
    /// The id generator resumes after the highest loaded id. Stored records
    /// with duplicate ids fail the load. Records naming an unknown
    /// department either fail the load or are kept without a bucket,
    /// depending on `policy`.
    pub fn initialize_with_policy(
        store: impl EmployeeStore + 'static,
        policy: UnknownDepartmentPolicy,
    ) -> EngineResult<Self> {
        let mut departments: Vec<Department> =
            DEFAULT_DEPARTMENTS.iter().map(|name| Department::new(*name)).collect();

        let employees = store.load()?;

        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(EngineError::validation(
                    "id",
                    format!("stored data contains employee id {} more than once", employee.id),
                ));
            }

            employee.check_payable()?;

            match departments
                .iter_mut()
                .find(|d| d.name() == employee.department)
            {
                Some(department) => {
                    department.insert(employee.id);
                }
                None => match policy {
                    UnknownDepartmentPolicy::Reject => {
                        return Err(EngineError::UnknownDepartment {
                            name: employee.department.clone(),
                        });
                    }
                    UnknownDepartmentPolicy::KeepUngrouped => {
                        warn!(
                            employee_id = employee.id,
                            department = %employee.department,
                            "Stored employee names an unknown department, keeping it ungrouped"
                        );
                    }
                },
            }
        }

        let ids = IdGenerator::after(employees.iter().map(|e| e.id));
        info!(
            employees = employees.len(),
            departments = departments.len(),
            next_id = ids.peek(),
            "Registry initialized"
        );

        Ok(Self {
            employees,
            departments,
            ids,
            store: Arc::new(store),
        })
    }

    /// All employees in insertion order.
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All departments in their fixed order.
    pub fn list_departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up an employee by id.
    pub fn get_employee(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up a department by name.
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name() == name)
    }

    /// Employees in the named department, in bucket order.
    pub fn employees_in(&self, department: &str) -> EngineResult<Vec<&Employee>> {
        let bucket = self
            .department(department)
            .ok_or_else(|| EngineError::UnknownDepartment {
                name: department.to_string(),
            })?;

        Ok(bucket
            .members()
            .iter()
            .filter_map(|id| self.get_employee(*id))
            .collect())
    }

    /// Employees that belong to no bucket.
    ///
    /// Only non-empty when stored data was loaded with
    /// [`UnknownDepartmentPolicy::KeepUngrouped`].
    pub fn ungrouped_employees(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| !self.departments.iter().any(|d| d.contains(e.id)))
            .collect()
    }

    /// The id the next added employee will receive.
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Validates `draft`, assigns the next id and adds the employee to its
    /// department. The new employee has no bonus.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> EngineResult<Employee> {
        let department = draft.validate()?.to_string();
        let bucket = self.department_index(&department)?;

        let id = self.ids.allocate()?;
        let employee = Employee::from_draft(id, draft, department);

        self.departments[bucket].insert(id);
        self.employees.push(employee.clone());

        info!(
            employee_id = id,
            department = %employee.department,
            "Employee added"
        );
        Ok(employee)
    }

    /// Replaces every field except id and bonus, then re-buckets the
    /// employee under the (possibly unchanged) department.
    pub fn edit_employee(&mut self, id: u64, draft: EmployeeDraft) -> EngineResult<Employee> {
        let department = draft.validate()?.to_string();
        let bucket = self.department_index(&department)?;
        let position = self.position(id)?;

        self.remove_from_buckets(id);
        self.employees[position].apply_draft(draft, department);
        self.departments[bucket].insert(id);

        let employee = self.employees[position].clone();
        info!(
            employee_id = id,
            department = %employee.department,
            "Employee edited"
        );
        Ok(employee)
    }

    /// Removes an employee from the master collection and its bucket.
    pub fn delete_employee(&mut self, id: u64) -> EngineResult<Employee> {
        let position = self.position(id)?;

        let employee = self.employees.remove(position);
        self.remove_from_buckets(id);

        info!(
            employee_id = id,
            department = %employee.department,
            "Employee deleted"
        );
        Ok(employee)
    }

    /// Attaches a bonus to an employee.
    pub fn set_bonus(&mut self, id: u64, bonus: Bonus) -> EngineResult<Employee> {
        let position = self.position(id)?;
        self.employees[position].bonus = bonus;

        debug!(employee_id = id, bonus = %bonus, "Bonus updated");
        Ok(self.employees[position].clone())
    }

    /// A shared handle to the store, for saving a snapshot after the
    /// registry has been released.
    pub fn store(&self) -> Arc<dyn EmployeeStore> {
        Arc::clone(&self.store)
    }

    /// Hands the current employee collection to the store.
    pub fn persist(&self) -> EngineResult<()> {
        self.store.save(&self.employees)?;
        info!(employees = self.employees.len(), "Registry persisted");
        Ok(())
    }

    /// Verifies that every employee sits in exactly the bucket named by its
    /// department and that no bucket references a missing employee.
    ///
    /// Employees whose department is unknown must be in no bucket at all.
    pub fn check_consistency(&self) -> EngineResult<()> {
        for employee in &self.employees {
            let holders: Vec<&str> = self
                .departments
                .iter()
                .filter(|d| d.contains(employee.id))
                .map(Department::name)
                .collect();

            let known = self.department(&employee.department).is_some();
            let consistent = if known {
                holders == [employee.department.as_str()]
            } else {
                holders.is_empty()
            };

            if !consistent {
                return Err(EngineError::RegistryInconsistent {
                    message: format!(
                        "employee {} has department '{}' but is held by {:?}",
                        employee.id, employee.department, holders
                    ),
                });
            }
        }

        for department in &self.departments {
            if let Some(orphan) = department
                .members()
                .iter()
                .find(|id| self.get_employee(**id).is_none())
            {
                return Err(EngineError::RegistryInconsistent {
                    message: format!(
                        "department '{}' references missing employee {}",
                        department.name(),
                        orphan
                    ),
                });
            }
        }

        Ok(())
    }

    fn department_index(&self, name: &str) -> EngineResult<usize> {
        self.departments
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| EngineError::UnknownDepartment {
                name: name.to_string(),
            })
    }

    fn position(&self, id: u64) -> EngineResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    fn remove_from_buckets(&mut self, id: u64) {
        for department in &mut self.departments {
            department.remove(id);
        }
    }
}
