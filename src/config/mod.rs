//! Configuration loading and management for the Net Salary Engine.
//!
//! This module holds the deduction schedule: contribution bases and rates,
//! exempt thresholds, withholding brackets and age reductions. The schedule
//! is either the built-in statutory one or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use net_salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/es2020").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod statutory;
mod types;

pub use loader::ConfigLoader;
pub use statutory::statutory_schedule;
pub use types::{
    AgeReduction, ContributionConfig, ContributionRates, DisabilityBand, ExemptionConfig,
    GroupBase, MaritalThresholds, ScheduleMetadata, TaxSchedule, WithholdingBracket,
    WithholdingConfig,
};
