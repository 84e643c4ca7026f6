//! Core data models for the payroll engine.
//!
//! This module contains the employee, department, bonus and payroll result
//! types shared by the registry, calculator and HTTP layer.

mod bonus;
mod department;
mod employee;
mod payroll;

pub use bonus::Bonus;
pub use department::Department;
pub use employee::{Employee, EmployeeDraft};
pub use payroll::{DistributionSlice, PayDistribution, PayrollSummary};
