//! Calculation logic for the Net Salary Engine.
//!
//! This module contains the deduction calculators: the social-security
//! contribution, the withholding exemption check, the income-tax withholding,
//! and the aggregator that turns gross salary into net salary.
//!
//! Each calculator comes in two forms. The `compute_*` functions use the
//! built-in statutory schedule and return plain figures. The `calculate_*`
//! functions take an explicit [`crate::config::TaxSchedule`] and also return
//! audit steps.

mod contribution;
mod exemption;
mod net_salary;
mod withholding;

pub use contribution::{ContributionResult, calculate_contribution, compute_contribution};
pub use exemption::{
    ExemptionResult, evaluate_exemption, exempt_threshold, is_withholding_required,
};
pub use net_salary::{NetSalaryCalculation, calculate_net_salary, compute_results};
pub use withholding::{
    WithholdingResult, age_multiplier, bracket_rate, calculate_withholding, compute_withholding,
};
