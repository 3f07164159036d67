//! Social-security contribution calculation.
//!
//! The monthly contribution base is the gross salary per installment,
//! clamped to the minimum base of the worker's professional group and to the
//! shared maximum base. The annual contribution is never allowed to exceed
//! the gross salary.

use crate::config::{TaxSchedule, statutory_schedule};
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a contribution calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ContributionResult {
    /// Annual contribution.
    pub amount: f64,
    /// Monthly contribution base after clamping.
    pub monthly_base: f64,
    /// Combined contribution rate.
    pub rate: f64,
    /// True when the gross salary ceiling replaced the computed amount.
    pub capped_at_gross: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the annual social-security contribution under the statutory schedule.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] when `professional_group` is not
/// between 1 and 11.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::compute_contribution;
///
/// let amount = compute_contribution(30000.0, 14, 5).unwrap();
/// assert!((amount - 30000.0 * 0.0635611).abs() < 1e-6);
///
/// assert!(compute_contribution(30000.0, 14, 12).is_err());
/// ```
pub fn compute_contribution(
    gross_salary: f64,
    payment_count: u32,
    professional_group: u32,
) -> EngineResult<f64> {
    calculate_contribution(
        gross_salary,
        payment_count,
        professional_group,
        statutory_schedule(),
        1,
    )
    .map(|result| result.amount)
}

/// Computes the annual social-security contribution under `schedule`.
///
/// # Arguments
///
/// * `gross_salary` - Annual gross salary
/// * `payment_count` - Number of annual installments
/// * `professional_group` - Contribution group selecting the minimum base
/// * `schedule` - The schedule supplying bases and rates
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_contribution(
    gross_salary: f64,
    payment_count: u32,
    professional_group: u32,
    schedule: &TaxSchedule,
    step_number: u32,
) -> EngineResult<ContributionResult> {
    let config = schedule.contribution();

    let minimum_base = config.minimum_base(professional_group).ok_or_else(|| {
        let message = match config.group_range() {
            Some((first, last)) => format!(
                "must be between {} and {}, got {}",
                first, last, professional_group
            ),
            None => format!("unknown professional group {}", professional_group),
        };
        EngineError::invalid_argument("professional_group", message)
    })?;
    let maximum_base = config.maximum_base;

    let installments = f64::from(payment_count);
    let monthly_salary = gross_salary / installments;
    // max then min rather than clamp: clamp panics when min > max
    let monthly_base = monthly_salary.max(minimum_base).min(maximum_base);

    let rate = config.rates.total();
    let uncapped = monthly_base * rate * installments;
    let capped_at_gross = uncapped > gross_salary;
    let amount = uncapped.min(gross_salary);

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security_contribution".to_string(),
        rule_name: "Social Security Contribution".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "payment_count": payment_count,
            "professional_group": professional_group,
            "minimum_base": minimum_base,
            "maximum_base": maximum_base
        }),
        output: serde_json::json!({
            "monthly_base": monthly_base,
            "rate": rate,
            "amount": amount,
            "capped_at_gross": capped_at_gross
        }),
        reasoning: if capped_at_gross {
            format!(
                "{:.2} € x {} x {} = {:.2} € exceeds gross salary, capped at {:.2} €",
                monthly_base, rate, payment_count, uncapped, amount
            )
        } else {
            format!(
                "{:.2} € x {} x {} = {:.2} €",
                monthly_base, rate, payment_count, amount
            )
        },
    };

    Ok(ContributionResult {
        amount,
        monthly_base,
        rate,
        capped_at_gross,
        audit_step,
    })
}
