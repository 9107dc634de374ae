// ============================================================================
// Plan Snapshot Parsing
// ============================================================================
//
// String-based parsing of a full plan snapshot (catalogs + allocation
// matrix) as handed over by the configuration/editing layer. Catalog id
// uniqueness is enforced here; allocation cells referencing unknown ids are
// permitted (they contribute nothing downstream) and only logged.

use anyhow::{Context, Result};
use std::collections::HashSet;
use thiserror::Error;

use crate::api::Plan;
use crate::models::{AllocationMatrix, Project, Team, TimePoint};

/// Catalog-level validation failures for an incoming plan snapshot.
#[derive(Debug, Error)]
pub enum PlanValidationError {
    #[error("duplicate team id '{0}' in catalog")]
    DuplicateTeamId(String),
    #[error("duplicate project id '{0}' in catalog")]
    DuplicateProjectId(String),
    #[error("duplicate time point id '{0}' in catalog")]
    DuplicateTimePointId(String),
}

#[derive(serde::Deserialize)]
struct PlanInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub time_points: Vec<TimePoint>,
    #[serde(default)]
    pub allocations: AllocationMatrix,
}

fn validate_catalogs(plan: &Plan) -> Result<(), PlanValidationError> {
    let mut team_ids = HashSet::new();
    for team in &plan.teams {
        if !team_ids.insert(&team.id) {
            return Err(PlanValidationError::DuplicateTeamId(
                team.id.value().to_string(),
            ));
        }
    }

    let mut project_ids = HashSet::new();
    for project in &plan.projects {
        if !project_ids.insert(&project.id) {
            return Err(PlanValidationError::DuplicateProjectId(
                project.id.value().to_string(),
            ));
        }
    }

    let mut time_point_ids = HashSet::new();
    for time_point in &plan.time_points {
        if !time_point_ids.insert(&time_point.id) {
            return Err(PlanValidationError::DuplicateTimePointId(
                time_point.id.value().to_string(),
            ));
        }
    }

    Ok(())
}

/// Leave suspect cells untouched (the engine treats them permissively) but
/// give operators a breadcrumb.
fn warn_on_suspect_cells(plan: &Plan) {
    let team_ids: HashSet<_> = plan.teams.iter().map(|t| &t.id).collect();
    let project_ids: HashSet<_> = plan.projects.iter().map(|p| &p.id).collect();
    let time_point_ids: HashSet<_> = plan.time_points.iter().map(|tp| &tp.id).collect();

    for (time_point, project, team, entry) in plan.allocations.cells() {
        if !team_ids.contains(team) || !project_ids.contains(project) || !time_point_ids.contains(time_point)
        {
            log::warn!(
                "allocation cell ({}, {}, {}) references ids missing from the catalogs",
                time_point,
                project,
                team
            );
        }
        if entry.occupied < 0.0 || entry.prerelease < 0.0 {
            log::warn!(
                "allocation cell ({}, {}, {}) carries negative headcount (occupied={}, prerelease={})",
                time_point,
                project,
                team,
                entry.occupied,
                entry.prerelease
            );
        }
    }
}

/// Parse a plan snapshot from a JSON string.
///
/// Missing collections default to empty; a missing checksum is computed
/// from the raw input. Catalog ids must be unique; everything else follows
/// the permissive policy of the engine (absence = zero, unknown references
/// ignored, negative values passed through).
pub fn parse_plan_json_str(plan_json: &str) -> Result<Plan> {
    let mut deserializer = serde_json::Deserializer::from_str(plan_json);
    // serde_path_to_error keeps the failing field path in the message.
    let input: PlanInput = serde_path_to_error::deserialize(&mut deserializer)
        .context("Failed to deserialize plan JSON")?;

    let mut plan = Plan {
        name: input.name,
        checksum: input.checksum,
        teams: input.teams,
        projects: input.projects,
        time_points: input.time_points,
        allocations: input.allocations,
    };

    validate_catalogs(&plan)?;
    warn_on_suspect_cells(&plan);

    // Compute checksum if not provided
    if plan.checksum.is_empty() {
        plan.checksum = compute_plan_checksum(plan_json);
    }

    Ok(plan)
}

/// Compute a checksum for the plan JSON
fn compute_plan_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================
