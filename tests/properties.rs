//! Property tests for the deduction calculators.

use proptest::prelude::*;

use net_salary_engine::calculation::{
    age_multiplier, compute_contribution, compute_results, compute_withholding,
    is_withholding_required,
};
use net_salary_engine::config::statutory_schedule;
use net_salary_engine::models::{MaritalStatus, SalaryInputs};

const RATE: f64 = 0.047 + 0.0155 + 0.001 + 0.047 * 0.0013;
const MAX_BASE: f64 = 4909.5;

fn minimum_base(group: u32) -> f64 {
    match group {
        1 => 1929.0,
        2 => 1599.6,
        3 => 1391.7,
        _ => 1381.2,
    }
}

fn marital_status() -> impl Strategy<Value = MaritalStatus> {
    prop_oneof![
        Just(MaritalStatus::Single),
        Just(MaritalStatus::Married),
        Just(MaritalStatus::Separated),
        Just(MaritalStatus::Divorced),
        Just(MaritalStatus::Widowed),
        Just(MaritalStatus::Unrecognized),
    ]
}

fn payment_count() -> impl Strategy<Value = u32> {
    prop_oneof![Just(12u32), Just(14u32)]
}

proptest! {
    #[test]
    fn contribution_never_exceeds_gross(
        gross in 0.0f64..1_000_000.0,
        payments in payment_count(),
        group in 1u32..=11,
    ) {
        let amount = compute_contribution(gross, payments, group).unwrap();
        prop_assert!(amount <= gross);
        prop_assert!(amount >= 0.0);
    }

    #[test]
    fn uncapped_contribution_stays_within_base_bounds(
        gross in 0.0f64..1_000_000.0,
        payments in payment_count(),
        group in 1u32..=11,
    ) {
        let amount = compute_contribution(gross, payments, group).unwrap();
        let installments = f64::from(payments);
        let floor = minimum_base(group) * RATE * installments;
        let ceiling = MAX_BASE * RATE * installments;
        if amount < gross {
            prop_assert!(amount >= floor - 1e-9);
            prop_assert!(amount <= ceiling + 1e-9);
        }
    }

    #[test]
    fn groups_outside_1_to_11_are_rejected(
        gross in 0.0f64..1_000_000.0,
        group in prop_oneof![Just(0u32), 12u32..1000],
    ) {
        prop_assert!(compute_contribution(gross, 14, group).is_err());
    }

    #[test]
    fn withholding_requirement_is_monotonic_in_gross(
        low in 0.0f64..500_000.0,
        delta in 0.0f64..500_000.0,
        degree in 0u32..=100,
        status in marital_status(),
        children in 0u32..10,
    ) {
        let high = low + delta;
        if is_withholding_required(low, degree, status, children) {
            prop_assert!(is_withholding_required(high, degree, status, children));
        }
    }

    #[test]
    fn withholding_is_zero_exactly_when_not_required(
        gross in 0.01f64..1_000_000.0,
        age in 16u32..110,
        degree in 0u32..=100,
        status in marital_status(),
        children in 0u32..10,
    ) {
        let tax = compute_withholding(gross, age, degree, status, children);
        if is_withholding_required(gross, degree, status, children) {
            prop_assert!(tax > 0.0);
        } else {
            prop_assert_eq!(tax, 0.0);
        }
    }

    #[test]
    fn ages_below_60_keep_full_rate(age in 0u32..60) {
        prop_assert_eq!(age_multiplier(age, statutory_schedule()), 1.0);
    }

    #[test]
    fn net_salary_is_gross_minus_deductions(
        gross in 0.0f64..1_000_000.0,
        payments in payment_count(),
        age in 16u32..110,
        group in 1u32..=11,
        degree in 0u32..=100,
        status in marital_status(),
        children in 0u32..10,
    ) {
        let inputs = SalaryInputs {
            gross_salary: gross,
            payment_count: payments,
            age,
            professional_group: group,
            disability_degree: degree,
            marital_status: status,
            num_children: children,
        };
        let result = compute_results(&inputs).unwrap();
        prop_assert_eq!(result.gross_salary, gross);
        prop_assert_eq!(
            result.net_salary,
            gross - result.social_security - result.income_tax
        );
        prop_assert!(result.income_tax >= 0.0);
        prop_assert!(result.social_security <= gross);
    }
}
