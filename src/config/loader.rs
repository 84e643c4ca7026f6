//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, UnknownDepartmentPolicy};

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```text
/// data_file: data/employees.json
/// bind_address: 127.0.0.1:3000
/// unknown_department_policy: reject   # or keep_ungrouped
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./payroll.yaml")?;
/// println!("Employee data lives in {}", loader.config().data_file.display());
/// # Ok::<(), hr_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads the file at `path` if it exists, falling back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Err(EngineError::ConfigNotFound { path }) => {
                tracing::info!(path = %path, "No configuration file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty document deserializes as null, which serde(default) does not cover.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str::<PayrollConfig>(content).map_err(|e| e.to_string())?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured handling of unknown departments.
    pub fn unknown_department_policy(&self) -> UnknownDepartmentPolicy {
        self.config.unknown_department_policy
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
