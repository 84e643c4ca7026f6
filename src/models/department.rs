//! Department buckets.

use serde::Serialize;

/// A named group of employees.
///
/// Membership is stored as employee ids in insertion order. Only the
/// registry mutates it, which is how bucket consistency stays structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    name: String,
    members: Vec<u64>,
}

impl Department {
    /// Creates an empty department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// The department's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the employees in this department.
    pub fn members(&self) -> &[u64] {
        &self.members
    }

    /// Returns true if the employee is a member.
    pub fn contains(&self, employee_id: u64) -> bool {
        self.members.contains(&employee_id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the department has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds a member; returns false if it was already present.
    pub(crate) fn insert(&mut self, employee_id: u64) -> bool {
        if self.contains(employee_id) {
            return false;
        }
        self.members.push(employee_id);
        true
    }

    /// Removes a member; returns false if it was not present.
    pub(crate) fn remove(&mut self, employee_id: u64) -> bool {
        let before = self.members.len();
        self.members.retain(|id| *id != employee_id);
        self.members.len() != before
    }
}
