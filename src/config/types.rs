//! Configuration types for the payroll engine.
//!
//! These structures are deserialized from `payroll.yaml`. Every field has a
//! default so a partial file is valid.

use std::path::PathBuf;

use serde::Deserialize;

/// What the registry does with a stored employee whose department matches no
/// bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDepartmentPolicy {
    /// Fail the load with `UnknownDepartment`.
    #[default]
    Reject,
    /// Keep the record without a bucket and log a warning.
    KeepUngrouped,
}

/// Top-level payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Where the JSON employee store lives.
    pub data_file: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Handling of stored employees in unknown departments.
    pub unknown_department_policy: UnknownDepartmentPolicy,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/employees.json"),
            bind_address: "127.0.0.1:3000".to_string(),
            unknown_department_policy: UnknownDepartmentPolicy::default(),
        }
    }
}
