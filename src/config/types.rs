//! Configuration types for the deduction schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the aggregated
//! [`TaxSchedule`] the calculators read from.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::MaritalStatus;

/// Metadata about the schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier of the schedule (e.g., "ES2020").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the published contribution bases and rates.
    pub source_url: String,
}

/// Minimum monthly contribution base for a contiguous range of professional groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupBase {
    /// First professional group covered (inclusive).
    pub first_group: u32,
    /// Last professional group covered (inclusive).
    pub last_group: u32,
    /// The minimum monthly contribution base for these groups.
    pub monthly_base: f64,
}

impl GroupBase {
    /// Returns true if `group` falls inside this range.
    pub fn covers(&self, group: u32) -> bool {
        (self.first_group..=self.last_group).contains(&group)
    }
}

/// Worker-side social-security sub-rates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionRates {
    /// Common contingencies.
    pub common: f64,
    /// Unemployment.
    pub unemployment: f64,
    /// Professional training.
    pub training: f64,
    /// Intergenerational-equity surcharge, expressed as a factor of the common rate.
    pub intergenerational_equity: f64,
}

impl ContributionRates {
    /// Returns the combined contribution rate.
    ///
    /// The surcharge is applied to the common rate and the terms are summed
    /// in declaration order.
    pub fn total(&self) -> f64 {
        let surcharge = self.common * self.intergenerational_equity;
        self.common + self.unemployment + self.training + surcharge
    }
}

/// Contribution configuration from contribution.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionConfig {
    /// Minimum monthly bases by professional group range.
    pub minimum_bases: Vec<GroupBase>,
    /// Maximum monthly base, shared by every group.
    pub maximum_base: f64,
    /// Contribution sub-rates.
    pub rates: ContributionRates,
}

impl ContributionConfig {
    /// Returns the minimum monthly base for a professional group, if the group is known.
    pub fn minimum_base(&self, group: u32) -> Option<f64> {
        self.minimum_bases
            .iter()
            .find(|band| band.covers(group))
            .map(|band| band.monthly_base)
    }

    /// Returns the lowest and highest professional group covered by the table.
    pub fn group_range(&self) -> Option<(u32, u32)> {
        let first = self.minimum_bases.iter().map(|b| b.first_group).min()?;
        let last = self.minimum_bases.iter().map(|b| b.last_group).max()?;
        Some((first, last))
    }
}

/// Base exempt thresholds by marital status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaritalThresholds {
    /// Threshold for single workers.
    pub single: f64,
    /// Threshold for married workers.
    pub married: f64,
    /// Threshold for separated workers.
    pub separated: f64,
    /// Threshold for divorced workers.
    pub divorced: f64,
    /// Threshold for widowed workers.
    pub widowed: f64,
}

impl MaritalThresholds {
    /// Returns the base threshold for a marital status.
    ///
    /// Unrecognized statuses get no exemption at all.
    pub fn for_status(&self, status: MaritalStatus) -> f64 {
        match status {
            MaritalStatus::Single => self.single,
            MaritalStatus::Married => self.married,
            MaritalStatus::Separated => self.separated,
            MaritalStatus::Divorced => self.divorced,
            MaritalStatus::Widowed => self.widowed,
            MaritalStatus::Unrecognized => 0.0,
        }
    }
}

/// Threshold increase for a band of disability degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisabilityBand {
    /// Lowest degree in the band (inclusive).
    pub min_degree: u32,
    /// Highest degree in the band (inclusive), or `None` for open-ended.
    #[serde(default)]
    pub max_degree: Option<u32>,
    /// Amount added to the exempt threshold.
    pub amount: f64,
}

impl DisabilityBand {
    /// Returns true if `degree` falls inside this band.
    pub fn covers(&self, degree: u32) -> bool {
        degree >= self.min_degree && self.max_degree.is_none_or(|max| degree <= max)
    }
}

/// Exemption configuration from exemptions.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExemptionConfig {
    /// Base thresholds by marital status.
    pub thresholds: MaritalThresholds,
    /// Amount added per child.
    pub per_child: f64,
    /// Number of children beyond which no further amount is added.
    pub max_children: u32,
    /// Disability adjustments. Degrees outside every band add nothing.
    pub disability_bands: Vec<DisabilityBand>,
}

/// A withholding bracket. Brackets are evaluated in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithholdingBracket {
    /// Inclusive upper bound of gross salary, or `None` for the top bracket.
    #[serde(default)]
    pub up_to: Option<f64>,
    /// Flat rate applied to the whole gross salary.
    pub rate: f64,
}

/// Age-based reduction of the bracket rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgeReduction {
    /// Lowest age in the band (inclusive).
    pub min_age: u32,
    /// Highest age in the band (inclusive), or `None` for open-ended.
    #[serde(default)]
    pub max_age: Option<u32>,
    /// Multiplier applied to the bracket rate.
    pub multiplier: f64,
}

impl AgeReduction {
    /// Returns true if `age` falls inside this band.
    pub fn covers(&self, age: u32) -> bool {
        age >= self.min_age && self.max_age.is_none_or(|max| age <= max)
    }
}

/// Withholding configuration from withholding.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithholdingConfig {
    /// Brackets in ascending order, ending with an open-ended bracket.
    pub brackets: Vec<WithholdingBracket>,
    /// Age reductions. Ages outside every band keep the full rate.
    pub age_reductions: Vec<AgeReduction>,
}

/// The complete deduction schedule.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a schedule directory, or the built-in statutory values.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSchedule {
    metadata: ScheduleMetadata,
    contribution: ContributionConfig,
    exemptions: ExemptionConfig,
    withholding: WithholdingConfig,
}

impl TaxSchedule {
    /// Creates a new schedule from its component parts, checking that the tables are usable.
    pub fn new(
        metadata: ScheduleMetadata,
        contribution: ContributionConfig,
        exemptions: ExemptionConfig,
        withholding: WithholdingConfig,
    ) -> EngineResult<Self> {
        let schedule = Self {
            metadata,
            contribution,
            exemptions,
            withholding,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Builds a schedule without validation. Only used for the built-in tables.
    pub(super) fn from_parts(
        metadata: ScheduleMetadata,
        contribution: ContributionConfig,
        exemptions: ExemptionConfig,
        withholding: WithholdingConfig,
    ) -> Self {
        Self {
            metadata,
            contribution,
            exemptions,
            withholding,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the contribution configuration.
    pub fn contribution(&self) -> &ContributionConfig {
        &self.contribution
    }

    /// Returns the exemption configuration.
    pub fn exemptions(&self) -> &ExemptionConfig {
        &self.exemptions
    }

    /// Returns the withholding configuration.
    pub fn withholding(&self) -> &WithholdingConfig {
        &self.withholding
    }

    fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidSchedule { message };

        if self.contribution.minimum_bases.is_empty() {
            return Err(invalid("contribution table has no minimum bases".into()));
        }
        for band in &self.contribution.minimum_bases {
            if band.first_group > band.last_group {
                return Err(invalid(format!(
                    "group range {}..{} is reversed",
                    band.first_group, band.last_group
                )));
            }
            if band.monthly_base > self.contribution.maximum_base {
                return Err(invalid(format!(
                    "minimum base {} for groups {}..{} exceeds maximum base {}",
                    band.monthly_base,
                    band.first_group,
                    band.last_group,
                    self.contribution.maximum_base
                )));
            }
        }

        let brackets = &self.withholding.brackets;
        match brackets.last() {
            None => return Err(invalid("withholding table has no brackets".into())),
            Some(last) if last.up_to.is_some() => {
                return Err(invalid("last withholding bracket must be open-ended".into()));
            }
            Some(_) => {}
        }
        let mut previous: Option<f64> = None;
        for bracket in &brackets[..brackets.len() - 1] {
            let Some(up_to) = bracket.up_to else {
                return Err(invalid(
                    "only the last withholding bracket may be open-ended".into(),
                ));
            };
            if previous.is_some_and(|prev| up_to <= prev) {
                return Err(invalid(format!(
                    "withholding brackets must be ascending, found {} after {:?}",
                    up_to, previous
                )));
            }
            previous = Some(up_to);
        }

        for band in &self.withholding.age_reductions {
            if band.max_age.is_some_and(|max| max < band.min_age) {
                return Err(invalid(format!(
                    "age reduction starting at {} ends before it starts",
                    band.min_age
                )));
            }
        }

        Ok(())
    }
}
