//! HTTP API module for the Net Salary Engine.
//!
//! This module provides the REST API endpoint for computing a net salary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
