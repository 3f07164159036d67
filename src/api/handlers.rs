//! HTTP request handlers for the Net Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_net_salary;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, CalculationResult, SalaryInputs};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Validates the request, computes the deductions under the configured
/// schedule, and returns the figures with an audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let inputs: SalaryInputs = request.into();

    if let Err(err) = inputs.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request failed validation"
        );
        let error = match err {
            EngineError::InvalidArgument { field, message } => ApiError::with_details(
                "VALIDATION_ERROR",
                format!("Invalid field '{}': {}", field, message),
                field,
            ),
            other => ApiErrorResponse::from(other).error,
        };
        return json_response(StatusCode::BAD_REQUEST, error);
    }

    match perform_calculation(&inputs, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = result.results.gross_salary,
                net_salary = result.results.net_salary,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Runs the calculation and wraps it in the response envelope.
fn perform_calculation(
    inputs: &SalaryInputs,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let calculation = calculate_net_salary(inputs, config.schedule())?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_code: config.metadata().code.clone(),
        inputs: inputs.clone(),
        results: calculation.result,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            warnings: calculation.warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn valid_request() -> CalculationRequest {
        CalculationRequest {
            gross_salary: 30000.0,
            payment_count: 14,
            age: 30,
            professional_group: 5,
            disability_degree: 0,
            marital_status: "soltero".to_string(),
            num_children: 0,
        }
    }

    async fn post_calculate(body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&valid_request()).unwrap();
        let (status, bytes) = post_calculate(body).await;

        assert_eq!(status, StatusCode::OK);
        let result: CalculationResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result.schedule_code, "ES2020");
        assert!((result.results.income_tax - 9000.0).abs() < 1e-6);
        assert_eq!(result.audit_trace.steps.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, bytes) = post_calculate("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_age_below_minimum_returns_validation_error() {
        let mut request = valid_request();
        request.age = 15;
        let (status, bytes) = post_calculate(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.details.as_deref(), Some("age"));
    }

    #[test]
    fn test_perform_calculation_uses_loader_schedule() {
        let inputs: SalaryInputs = valid_request().into();
        let result = perform_calculation(&inputs, &ConfigLoader::statutory()).unwrap();

        assert_eq!(result.inputs, inputs);
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_perform_calculation_propagates_invalid_group() {
        let mut inputs: SalaryInputs = valid_request().into();
        inputs.professional_group = 12;

        let result = perform_calculation(&inputs, &ConfigLoader::statutory());
        assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
    }
}
