//! Configuration module for the payroll engine.
//!
//! This module provides functionality for loading the payroll configuration
//! from a YAML file: where employee data is stored, where the HTTP server
//! listens, and how stored records in unknown departments are treated.
//!
//! # Example
//!
//! ```no_run
//! use hr_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load_or_default("./payroll.yaml").unwrap();
//! println!("Listening on {}", loader.config().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, UnknownDepartmentPolicy};
