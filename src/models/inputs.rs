//! Calculation inputs and related types.
//!
//! This module defines the [`SalaryInputs`] record handed to the engine and
//! the [`MaritalStatus`] enum used by the exemption rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The worker's marital status for exemption purposes.
///
/// Parsing is case-insensitive and accepts both Spanish and English words.
/// Anything else becomes [`MaritalStatus::Unrecognized`], which carries no
/// exemption rather than failing the calculation.
///
/// # Examples
///
/// ```
/// use net_salary_engine::models::MaritalStatus;
///
/// assert_eq!(MaritalStatus::parse("Soltero"), MaritalStatus::Single);
/// assert_eq!(MaritalStatus::parse("MARRIED"), MaritalStatus::Married);
/// assert_eq!(MaritalStatus::parse("pareja de hecho"), MaritalStatus::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaritalStatus {
    /// Single (soltero).
    Single,
    /// Married (casado).
    Married,
    /// Separated (separado).
    Separated,
    /// Divorced (divorciado).
    Divorced,
    /// Widowed (viudo).
    Widowed,
    /// Any value outside the known vocabulary.
    Unrecognized,
}

impl MaritalStatus {
    /// Parses a marital status, falling back to `Unrecognized`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "soltero" | "soltera" | "single" => Self::Single,
            "casado" | "casada" | "married" => Self::Married,
            "separado" | "separada" | "separated" => Self::Separated,
            "divorciado" | "divorciada" | "divorced" => Self::Divorced,
            "viudo" | "viuda" | "widowed" => Self::Widowed,
            _ => Self::Unrecognized,
        }
    }

    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Separated => "separated",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MaritalStatus {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for MaritalStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<MaritalStatus> for String {
    fn from(status: MaritalStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Accepted numbers of annual pay installments.
pub const PAYMENT_COUNTS: [u32; 2] = [12, 14];

/// Minimum legal working age.
pub const MINIMUM_AGE: u32 = 16;

/// Everything the engine needs to compute a net salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInputs {
    /// Annual gross salary.
    pub gross_salary: f64,
    /// Number of annual pay installments (12 or 14).
    pub payment_count: u32,
    /// Age in years.
    pub age: u32,
    /// Contribution group (1 to 11).
    pub professional_group: u32,
    /// Disability degree as a percentage.
    pub disability_degree: u32,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Number of children.
    pub num_children: u32,
}

impl SalaryInputs {
    /// Checks every field against its documented domain.
    ///
    /// The calculation functions do not call this themselves; callers that
    /// receive untrusted input (such as the HTTP API) are expected to.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_salary_engine::models::{MaritalStatus, SalaryInputs};
    ///
    /// let inputs = SalaryInputs {
    ///     gross_salary: 30000.0,
    ///     payment_count: 14,
    ///     age: 15,
    ///     professional_group: 5,
    ///     disability_degree: 0,
    ///     marital_status: MaritalStatus::Single,
    ///     num_children: 0,
    /// };
    /// assert!(inputs.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if !self.gross_salary.is_finite() || self.gross_salary < 0.0 {
            return Err(EngineError::invalid_argument(
                "gross_salary",
                format!("must be a non-negative amount, got {}", self.gross_salary),
            ));
        }
        if !PAYMENT_COUNTS.contains(&self.payment_count) {
            return Err(EngineError::invalid_argument(
                "payment_count",
                format!("must be 12 or 14, got {}", self.payment_count),
            ));
        }
        if self.age < MINIMUM_AGE {
            return Err(EngineError::invalid_argument(
                "age",
                format!("must be at least {}, got {}", MINIMUM_AGE, self.age),
            ));
        }
        if !(1..=11).contains(&self.professional_group) {
            return Err(EngineError::invalid_argument(
                "professional_group",
                format!("must be between 1 and 11, got {}", self.professional_group),
            ));
        }
        if self.disability_degree > 100 {
            return Err(EngineError::invalid_argument(
                "disability_degree",
                format!("must be between 0 and 100, got {}", self.disability_degree),
            ));
        }
        Ok(())
    }
}
