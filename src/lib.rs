//! Employee registry and payroll computation engine.
//!
//! This crate keeps employee records grouped into a fixed set of department
//! buckets and derives payroll figures (gross salary, tiered tax, flat
//! deductions, bonus and net pay) from a record on demand.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod store;
