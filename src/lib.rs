//! Net Salary Engine
//!
//! This crate computes a worker's annual net salary from gross salary and
//! personal attributes by deriving the social-security contribution and the
//! income-tax withholding under a fixed national schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
