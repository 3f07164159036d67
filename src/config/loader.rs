//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a deduction
//! schedule from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::statutory::statutory_schedule;
use super::types::{
    ContributionConfig, ExemptionConfig, ScheduleMetadata, TaxSchedule, WithholdingConfig,
};

/// Loads and provides access to a deduction schedule.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/es2020/
/// ├── schedule.yaml      # Schedule metadata
/// ├── contribution.yaml  # Contribution bases and rates
/// ├── exemptions.yaml    # Exempt thresholds
/// └── withholding.yaml   # Withholding brackets and age reductions
/// ```
///
/// # Example
///
/// ```no_run
/// use net_salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/es2020").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: TaxSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tables are inconsistent (see [`TaxSchedule::new`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let contribution = Self::load_yaml::<ContributionConfig>(&path.join("contribution.yaml"))?;
        let exemptions = Self::load_yaml::<ExemptionConfig>(&path.join("exemptions.yaml"))?;
        let withholding = Self::load_yaml::<WithholdingConfig>(&path.join("withholding.yaml"))?;

        let schedule = TaxSchedule::new(metadata, contribution, exemptions, withholding)?;
        info!(
            code = %schedule.metadata().code,
            version = %schedule.metadata().version,
            path = %path.display(),
            "Loaded deduction schedule"
        );

        Ok(Self { schedule })
    }

    /// Creates a loader holding the built-in statutory schedule.
    pub fn statutory() -> Self {
        Self {
            schedule: statutory_schedule().clone(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}
