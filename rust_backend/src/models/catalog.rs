use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, TeamId, TimePointId};
use crate::models::PlanDate;

/// A team supplying headcount capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Client-generated identifier
    pub id: TeamId,
    /// Display name (also the team's node identity in the flow graph)
    pub name: String,
    /// Declared headcount capacity; rendering context, not enforced
    pub capacity: f64,
    /// Display color (e.g. "#1f77b4")
    #[serde(default)]
    pub color: String,
}

impl Team {
    pub fn new(id: TeamId, name: String, capacity: f64, color: String) -> Self {
        Self {
            id,
            name,
            capacity,
            color,
        }
    }
}

/// A project consuming headcount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Client-generated identifier
    pub id: ProjectId,
    /// Display name (project nodes are keyed `{name}_{column}`)
    pub name: String,
    /// Teams allowed to staff this project; `None` means all teams.
    /// Consumed by the editing layer only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_teams: Option<Vec<TeamId>>,
}

impl Project {
    pub fn new(id: ProjectId, name: String) -> Self {
        Self {
            id,
            name,
            eligible_teams: None,
        }
    }

    pub fn with_eligible_teams(id: ProjectId, name: String, eligible_teams: Vec<TeamId>) -> Self {
        Self {
            id,
            name,
            eligible_teams: Some(eligible_teams),
        }
    }
}

/// A planning time point (a column candidate in the flow window).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePoint {
    /// Client-generated identifier
    pub id: TimePointId,
    /// Display name (e.g. "Q3 2025")
    pub name: String,
    /// Sortable period label; window ordering is by this field
    pub date: PlanDate,
}

impl TimePoint {
    pub fn new(id: TimePointId, name: String, date: PlanDate) -> Self {
        Self { id, name, date }
    }
}
