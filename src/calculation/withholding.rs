//! Income-tax withholding calculation.
//!
//! When withholding applies, a single bracket rate chosen by gross salary is
//! applied to the whole gross salary, reduced for older workers. This is a
//! flat rate on the total, not a sum over bracket slices.

use crate::config::{TaxSchedule, statutory_schedule};
use crate::models::{AuditStep, MaritalStatus};

use super::exemption::evaluate_exemption;

/// The result of a withholding calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct WithholdingResult {
    /// Annual withholding.
    pub amount: f64,
    /// Whether the worker was above the exempt threshold.
    pub withholding_required: bool,
    /// Exempt threshold that was compared against.
    pub exempt_threshold: f64,
    /// Bracket rate before the age reduction. Zero when exempt.
    pub bracket_rate: f64,
    /// Age multiplier applied to the bracket rate. One when exempt.
    pub age_multiplier: f64,
    /// Audit steps: the exemption check, then the bracket when withholding applies.
    pub audit_steps: Vec<AuditStep>,
}

/// Returns the rate of the first bracket whose upper bound is at or above `gross_salary`.
pub fn bracket_rate(gross_salary: f64, schedule: &TaxSchedule) -> f64 {
    schedule
        .withholding()
        .brackets
        .iter()
        .find(|bracket| bracket.up_to.is_none_or(|up_to| gross_salary <= up_to))
        .map_or(0.0, |bracket| bracket.rate)
}

/// Returns the multiplier applied to the bracket rate for `age`.
///
/// Ages outside every reduction band keep the full rate.
pub fn age_multiplier(age: u32, schedule: &TaxSchedule) -> f64 {
    schedule
        .withholding()
        .age_reductions
        .iter()
        .find(|band| band.covers(age))
        .map_or(1.0, |band| band.multiplier)
}

/// Computes the annual income-tax withholding under the statutory schedule.
///
/// # Examples
///
/// ```
/// use net_salary_engine::calculation::compute_withholding;
/// use net_salary_engine::models::MaritalStatus;
///
/// let tax = compute_withholding(30000.0, 30, 0, MaritalStatus::Single, 0);
/// assert!((tax - 9000.0).abs() < 1e-6);
/// ```
pub fn compute_withholding(
    gross_salary: f64,
    age: u32,
    disability_degree: u32,
    marital_status: MaritalStatus,
    num_children: u32,
) -> f64 {
    calculate_withholding(
        gross_salary,
        age,
        disability_degree,
        marital_status,
        num_children,
        statutory_schedule(),
        1,
    )
    .amount
}

/// Computes the annual income-tax withholding under `schedule`.
///
/// # Arguments
///
/// * `step_number` - Step number of the exemption check; the bracket step follows it
pub fn calculate_withholding(
    gross_salary: f64,
    age: u32,
    disability_degree: u32,
    marital_status: MaritalStatus,
    num_children: u32,
    schedule: &TaxSchedule,
    step_number: u32,
) -> WithholdingResult {
    let exemption = evaluate_exemption(
        gross_salary,
        disability_degree,
        marital_status,
        num_children,
        schedule,
        step_number,
    );

    if !exemption.withholding_required {
        return WithholdingResult {
            amount: 0.0,
            withholding_required: false,
            exempt_threshold: exemption.threshold,
            bracket_rate: 0.0,
            age_multiplier: 1.0,
            audit_steps: vec![exemption.audit_step],
        };
    }

    let rate = bracket_rate(gross_salary, schedule);
    let multiplier = age_multiplier(age, schedule);
    let adjusted_rate = rate * multiplier;
    let amount = gross_salary * adjusted_rate;

    let bracket_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "income_tax_withholding".to_string(),
        rule_name: "Income Tax Withholding".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary,
            "age": age
        }),
        output: serde_json::json!({
            "bracket_rate": rate,
            "age_multiplier": multiplier,
            "adjusted_rate": adjusted_rate,
            "amount": amount
        }),
        reasoning: if multiplier < 1.0 {
            format!(
                "{:.2} € x {} (bracket) x {} (age {}) = {:.2} €",
                gross_salary, rate, multiplier, age, amount
            )
        } else {
            format!("{:.2} € x {} (bracket) = {:.2} €", gross_salary, rate, amount)
        },
    };

    WithholdingResult {
        amount,
        withholding_required: true,
        exempt_threshold: exemption.threshold,
        bracket_rate: rate,
        age_multiplier: multiplier,
        audit_steps: vec![exemption.audit_step, bracket_step],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::is_withholding_required;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_bracket_boundaries_are_inclusive() {
        let schedule = statutory_schedule();
        let cases = [
            (-5.0, 0.0),
            (0.0, 0.0),
            (0.01, 0.19),
            (12450.0, 0.19),
            (12450.5, 0.24),
            (20199.0, 0.24),
            (20200.0, 0.30),
            (35199.0, 0.30),
            (35200.0, 0.37),
            (59999.0, 0.37),
            (60000.0, 0.45),
            (299999.0, 0.45),
            (300000.0, 0.47),
            (1_000_000.0, 0.47),
        ];
        for (gross, rate) in cases {
            assert_eq!(bracket_rate(gross, schedule), rate, "gross {}", gross);
        }
    }

    #[test]
    fn test_age_multiplier_bands() {
        let schedule = statutory_schedule();
        assert_eq!(age_multiplier(16, schedule), 1.0);
        assert_eq!(age_multiplier(59, schedule), 1.0);
        assert_eq!(age_multiplier(60, schedule), 0.24);
        assert_eq!(age_multiplier(65, schedule), 0.24);
        assert_eq!(age_multiplier(66, schedule), 0.20);
        assert_eq!(age_multiplier(69, schedule), 0.20);
        assert_eq!(age_multiplier(70, schedule), 0.08);
        assert_eq!(age_multiplier(99, schedule), 0.08);
    }

    #[test]
    fn test_age_bands_are_exclusive_and_exhaustive_from_60() {
        let bands = &statutory_schedule().withholding().age_reductions;
        for age in 60..=150 {
            let matching = bands.iter().filter(|band| band.covers(age)).count();
            assert_eq!(matching, 1, "age {}", age);
        }
        for age in 0..60 {
            assert!(!bands.iter().any(|band| band.covers(age)), "age {}", age);
        }
    }

    #[test]
    fn test_single_30_year_old_on_30000() {
        approx(
            compute_withholding(30000.0, 30, 0, MaritalStatus::Single, 0),
            9000.0,
        );
    }

    #[test]
    fn test_exempt_worker_pays_nothing() {
        let result = calculate_withholding(
            10000.0,
            30,
            0,
            MaritalStatus::Married,
            2,
            statutory_schedule(),
            1,
        );

        assert_eq!(result.amount, 0.0);
        assert!(!result.withholding_required);
        assert_eq!(result.exempt_threshold, 13000.0);
        assert_eq!(result.audit_steps.len(), 1);
    }

    #[test]
    fn test_age_70_reduces_rate_to_8_percent() {
        for gross in [20000.0, 50000.0, 400000.0] {
            let rate = bracket_rate(gross, statutory_schedule());
            approx(
                compute_withholding(gross, 70, 0, MaritalStatus::Single, 0),
                gross * rate * 0.08,
            );
        }
    }

    #[test]
    fn test_rate_applies_to_whole_salary_not_slices() {
        // 40000 sits in the 37% bracket; the whole amount is taxed at 37%
        approx(
            compute_withholding(40000.0, 40, 0, MaritalStatus::Single, 0),
            14800.0,
        );
    }

    #[test]
    fn test_withholding_zero_iff_not_required() {
        let cases = [
            (5000.0, MaritalStatus::Unrecognized, 0, 0),
            (16000.0, MaritalStatus::Widowed, 1, 0),
            (18000.0, MaritalStatus::Single, 0, 40),
            (25000.0, MaritalStatus::Single, 3, 70),
        ];
        for (gross, status, children, degree) in cases {
            let required = is_withholding_required(gross, degree, status, children);
            let tax = compute_withholding(gross, 45, degree, status, children);
            assert_eq!(tax == 0.0, !required, "gross {}", gross);
            if required {
                assert!(tax > 0.0);
            }
        }
    }

    #[test]
    fn test_audit_steps_are_sequenced() {
        let result = calculate_withholding(
            30000.0,
            62,
            0,
            MaritalStatus::Single,
            0,
            statutory_schedule(),
            4,
        );

        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].step_number, 4);
        assert_eq!(result.audit_steps[1].step_number, 5);
        assert_eq!(result.audit_steps[1].output["age_multiplier"], 0.24);
        assert!(result.audit_steps[1].reasoning.contains("age 62"));
    }
}
