//! Withholding exemption evaluation.
//!
//! Withholding applies only when the gross salary is strictly above an exempt
//! threshold built from marital status, children, and disability degree.

use crate::config::{TaxSchedule, statutory_schedule};
use crate::models::{AuditStep, MaritalStatus};

/// The result of evaluating the exemption, including the audit step.
#[derive(Debug, Clone)]
pub struct ExemptionResult {
    /// Total exempt threshold.
    pub threshold: f64,
    /// Whether the gross salary exceeds the threshold.
    pub withholding_required: bool,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Returns the exempt threshold under `schedule`.
///
/// The threshold is the marital base, plus a fixed amount per child up to the
/// child cap, plus the amount of the first disability band containing
/// `disability_degree`.
pub fn exempt_threshold(
    disability_degree: u32,
    marital_status: MaritalStatus,
    num_children: u32,
    schedule: &TaxSchedule,
) -> f64 {
    let config = schedule.exemptions();

    let base = config.thresholds.for_status(marital_status);
    let children = f64::from(num_children.min(config.max_children)) * config.per_child;
    let disability = config
        .disability_bands
        .iter()
        .find(|band| band.covers(disability_degree))
        .map_or(0.0, |band| band.amount);

    base + children + disability
}

/// Decides whether income tax must be withheld, under the statutory schedule.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::is_withholding_required;
/// use net_salary_engine::models::MaritalStatus;
///
/// // 11000 + 2 x 1000 = 13000 is above 10000
/// assert!(!is_withholding_required(10000.0, 0, MaritalStatus::Married, 2));
/// assert!(is_withholding_required(30000.0, 0, MaritalStatus::Single, 0));
/// ```
pub fn is_withholding_required(
    gross_salary: f64,
    disability_degree: u32,
    marital_status: MaritalStatus,
    num_children: u32,
) -> bool {
    gross_salary > exempt_threshold(
        disability_degree,
        marital_status,
        num_children,
        statutory_schedule(),
    )
}

/// Evaluates the exemption under `schedule` and records an audit step.
pub fn evaluate_exemption(
    gross_salary: f64,
    disability_degree: u32,
    marital_status: MaritalStatus,
    num_children: u32,
    schedule: &TaxSchedule,
    step_number: u32,
) -> ExemptionResult {
    let threshold = exempt_threshold(disability_degree, marital_status, num_children, schedule);
    let withholding_required = gross_salary > threshold;

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_exemption".to_string(),
        rule_name: "Withholding Exemption".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "disability_degree": disability_degree,
            "marital_status": marital_status.as_str(),
            "num_children": num_children
        }),
        output: serde_json::json!({
            "threshold": threshold,
            "withholding_required": withholding_required
        }),
        reasoning: if withholding_required {
            format!(
                "Gross salary {:.2} € exceeds exempt threshold {:.2} €",
                gross_salary, threshold
            )
        } else {
            format!(
                "Gross salary {:.2} € does not exceed exempt threshold {:.2} €, no withholding",
                gross_salary, threshold
            )
        },
    };

    ExemptionResult {
        threshold,
        withholding_required,
        audit_step,
    }
}
