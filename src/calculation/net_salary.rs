//! Net salary aggregation.
//!
//! Runs the contribution and withholding calculators over one set of inputs
//! and subtracts both deductions from the gross salary.

use tracing::debug;

use crate::config::{TaxSchedule, statutory_schedule};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, MaritalStatus, SalaryInputs, SalaryResult};

use super::contribution::calculate_contribution;
use super::withholding::calculate_withholding;

/// A net salary calculation together with its audit steps and warnings.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculation {
    /// The computed figures.
    pub result: SalaryResult,
    /// Audit steps in evaluation order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about inputs handled by fallback.
    pub warnings: Vec<AuditWarning>,
}

/// Computes gross, both deductions, and net salary under the statutory schedule.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidArgument`] when the
/// professional group is outside 1 to 11. Other fields are not re-validated;
/// see [`SalaryInputs::validate`].
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::compute_results;
/// use net_salary_engine::models::{MaritalStatus, SalaryInputs};
///
/// let inputs = SalaryInputs {
///     gross_salary: 30000.0,
///     payment_count: 14,
///     age: 30,
///     professional_group: 5,
///     disability_degree: 0,
///     marital_status: MaritalStatus::parse("soltero"),
///     num_children: 0,
/// };
///
/// let result = compute_results(&inputs).unwrap();
/// assert!((result.income_tax - 9000.0).abs() < 1e-6);
/// assert!((result.net_salary - (30000.0 - result.social_security - 9000.0)).abs() < 1e-9);
/// ```
pub fn compute_results(inputs: &SalaryInputs) -> EngineResult<SalaryResult> {
    calculate_net_salary(inputs, statutory_schedule()).map(|calculation| calculation.result)
}

/// Computes gross, both deductions, and net salary under `schedule`.
pub fn calculate_net_salary(
    inputs: &SalaryInputs,
    schedule: &TaxSchedule,
) -> EngineResult<NetSalaryCalculation> {
    let mut warnings = Vec::new();
    if inputs.marital_status == MaritalStatus::Unrecognized {
        warnings.push(AuditWarning {
            code: "UNRECOGNIZED_MARITAL_STATUS".to_string(),
            message: "Marital status not recognized; no exempt threshold applied".to_string(),
            severity: "medium".to_string(),
        });
    }

    let contribution = calculate_contribution(
        inputs.gross_salary,
        inputs.payment_count,
        inputs.professional_group,
        schedule,
        1,
    )?;
    if contribution.capped_at_gross {
        warnings.push(AuditWarning {
            code: "CONTRIBUTION_CAPPED_AT_GROSS".to_string(),
            message: "Contribution on the minimum base exceeds gross salary; capped at gross"
                .to_string(),
            severity: "low".to_string(),
        });
    }

    let withholding = calculate_withholding(
        inputs.gross_salary,
        inputs.age,
        inputs.disability_degree,
        inputs.marital_status,
        inputs.num_children,
        schedule,
        2,
    );

    let result = SalaryResult::new(inputs.gross_salary, contribution.amount, withholding.amount);
    debug!(
        gross_salary = result.gross_salary,
        social_security = result.social_security,
        income_tax = result.income_tax,
        net_salary = result.net_salary,
        "Computed net salary"
    );

    if result.net_salary < 0.0 {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: format!("Deductions exceed gross salary by {:.2} €", -result.net_salary),
            severity: "high".to_string(),
        });
    }

    let mut audit_steps = Vec::with_capacity(3);
    audit_steps.push(contribution.audit_step);
    audit_steps.extend(withholding.audit_steps);

    Ok(NetSalaryCalculation {
        result,
        audit_steps,
        warnings,
    })
}
