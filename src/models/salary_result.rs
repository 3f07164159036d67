//! Calculation result models for the Net Salary Engine.
//!
//! This module contains the [`SalaryResult`] record produced by every
//! calculation, and the [`CalculationResult`] envelope that wraps it with an
//! audit trace for API consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SalaryInputs;

/// The four figures of a net salary calculation, all annual.
///
/// `net_salary` is always `gross_salary - social_security - income_tax`.
///
/// # Example
///
/// ```
/// use net_salary_engine::models::SalaryResult;
///
/// let result = SalaryResult::new(30000.0, 1906.833, 9000.0);
/// assert!((result.net_salary - 19093.167).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Annual gross salary, echoed from the inputs.
    pub gross_salary: f64,
    /// Annual social-security contribution.
    pub social_security: f64,
    /// Annual income-tax withholding.
    pub income_tax: f64,
    /// Gross salary minus both deductions.
    pub net_salary: f64,
}

impl SalaryResult {
    /// Builds a result, deriving the net salary from the deductions.
    pub fn new(gross_salary: f64, social_security: f64, income_tax: f64) -> Self {
        Self {
            gross_salary,
            social_security,
            income_tax,
            net_salary: gross_salary - social_security - income_tax,
        }
    }

    /// Returns the sum of both deductions.
    pub fn total_deductions(&self) -> f64 {
        self.social_security + self.income_tax
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs the schedule handles by fallback rather than by
/// rule, such as an unrecognized marital status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use net_salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a calculation as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the schedule the figures were computed under.
    pub schedule_code: String,
    /// The inputs the calculation was run with.
    pub inputs: SalaryInputs,
    /// The computed figures.
    pub results: SalaryResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
