//! Core data models for the Net Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod inputs;
mod salary_result;

pub use inputs::{MINIMUM_AGE, MaritalStatus, PAYMENT_COUNTS, SalaryInputs};
pub use salary_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, SalaryResult};
