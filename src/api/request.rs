//! Request types for the Net Salary Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{MaritalStatus, SalaryInputs};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Annual gross salary.
    pub gross_salary: f64,
    /// Number of annual pay installments (12 or 14).
    pub payment_count: u32,
    /// Age in years.
    pub age: u32,
    /// Contribution group (1 to 11).
    pub professional_group: u32,
    /// Disability degree as a percentage.
    #[serde(default)]
    pub disability_degree: u32,
    /// Marital status, in Spanish or English, any case.
    pub marital_status: String,
    /// Number of children.
    #[serde(default)]
    pub num_children: u32,
}

impl From<CalculationRequest> for SalaryInputs {
    fn from(req: CalculationRequest) -> Self {
        SalaryInputs {
            gross_salary: req.gross_salary,
            payment_count: req.payment_count,
            age: req.age,
            professional_group: req.professional_group,
            disability_degree: req.disability_degree,
            marital_status: MaritalStatus::parse(&req.marital_status),
            num_children: req.num_children,
        }
    }
}
