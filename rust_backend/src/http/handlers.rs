//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing parsing and service layers for business logic.

use axum::Json;

use super::dto::HealthResponse;
use super::error::AppError;
use crate::api::Plan;
use crate::parsing::parse_plan_json_str;
use crate::routes::flow::FlowGraphData;
use crate::routes::utilization::UtilizationData;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse the request body into a plan snapshot, mapping any parse or
/// validation failure to a 400 response.
fn plan_from_body(body: &serde_json::Value) -> Result<Plan, AppError> {
    let plan_json_str = serde_json::to_string(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid plan JSON: {}", e)))?;
    parse_plan_json_str(&plan_json_str)
        .map_err(|e| AppError::BadRequest(format!("Invalid plan snapshot: {:#}", e)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

// =============================================================================
// Dataset Endpoints
// =============================================================================

/// POST /v1/flow-graph
///
/// Compute the resource flow graph for the plan snapshot in the request body.
pub async fn get_flow_graph(
    Json(body): Json<serde_json::Value>,
) -> HandlerResult<FlowGraphData> {
    let plan = plan_from_body(&body)?;

    let data = services::compute_flow_graph(
        &plan.teams,
        &plan.projects,
        &plan.time_points,
        &plan.allocations,
    );

    Ok(Json(data))
}

/// POST /v1/utilization
///
/// Compute the team utilization table for the plan snapshot in the request body.
pub async fn get_utilization(
    Json(body): Json<serde_json::Value>,
) -> HandlerResult<UtilizationData> {
    let plan = plan_from_body(&body)?;

    let data = services::compute_utilization_data(
        &plan.teams,
        &plan.projects,
        &plan.time_points,
        &plan.allocations,
    );

    Ok(Json(data))
}
