//! Built-in statutory schedule.
//!
//! These are the 2020 general-regime contribution bases and rates together
//! with the simplified withholding table. The same values ship as YAML under
//! `config/es2020` for deployments that prefer to load them from disk.

use std::sync::LazyLock;

use super::types::{
    AgeReduction, ContributionConfig, ContributionRates, DisabilityBand, ExemptionConfig,
    GroupBase, MaritalThresholds, ScheduleMetadata, TaxSchedule, WithholdingBracket,
    WithholdingConfig,
};

static STATUTORY: LazyLock<TaxSchedule> = LazyLock::new(build);

/// Returns the built-in statutory schedule.
///
/// # Example
///
/// ```
/// use net_salary_engine::config::statutory_schedule;
///
/// let schedule = statutory_schedule();
/// assert_eq!(schedule.contribution().maximum_base, 4909.5);
/// ```
pub fn statutory_schedule() -> &'static TaxSchedule {
    &STATUTORY
}

fn build() -> TaxSchedule {
    let metadata = ScheduleMetadata {
        code: "ES2020".to_string(),
        name: "General regime contributions and IRPF withholding".to_string(),
        version: "2020-01-01".to_string(),
        source_url: "https://www.grupo2000.es/que-seguros-sociales-debo-aplicar-en-2020-bases-y-tipos-de-cotizacion/".to_string(),
    };

    let contribution = ContributionConfig {
        minimum_bases: vec![
            group_base(1, 1, 1929.0),
            group_base(2, 2, 1599.6),
            group_base(3, 3, 1391.7),
            group_base(4, 11, 1381.2),
        ],
        maximum_base: 4909.5,
        rates: ContributionRates {
            common: 0.047,
            unemployment: 0.0155,
            training: 0.001,
            intergenerational_equity: 0.0013,
        },
    };

    let exemptions = ExemptionConfig {
        thresholds: MaritalThresholds {
            single: 17000.0,
            married: 11000.0,
            separated: 17000.0,
            divorced: 17000.0,
            widowed: 15000.0,
        },
        per_child: 1000.0,
        max_children: 3,
        // 55..=64 intentionally falls between the two bands
        disability_bands: vec![
            DisabilityBand {
                min_degree: 33,
                max_degree: Some(54),
                amount: 3000.0,
            },
            DisabilityBand {
                min_degree: 65,
                max_degree: None,
                amount: 9000.0,
            },
        ],
    };

    let withholding = WithholdingConfig {
        brackets: vec![
            bracket(Some(0.0), 0.0),
            bracket(Some(12450.0), 0.19),
            bracket(Some(20199.0), 0.24),
            bracket(Some(35199.0), 0.30),
            bracket(Some(59999.0), 0.37),
            bracket(Some(299999.0), 0.45),
            bracket(None, 0.47),
        ],
        age_reductions: vec![
            AgeReduction {
                min_age: 60,
                max_age: Some(65),
                multiplier: 0.24,
            },
            AgeReduction {
                min_age: 66,
                max_age: Some(69),
                multiplier: 0.20,
            },
            AgeReduction {
                min_age: 70,
                max_age: None,
                multiplier: 0.08,
            },
        ],
    };

    TaxSchedule::from_parts(metadata, contribution, exemptions, withholding)
}

fn group_base(first_group: u32, last_group: u32, monthly_base: f64) -> GroupBase {
    GroupBase {
        first_group,
        last_group,
        monthly_base,
    }
}

fn bracket(up_to: Option<f64>, rate: f64) -> WithholdingBracket {
    WithholdingBracket { up_to, rate }
}
