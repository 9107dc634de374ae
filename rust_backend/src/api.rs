//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types shared with the frontend.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::flow::FlowGraphData;
pub use crate::routes::flow::FlowLink;
pub use crate::routes::flow::FlowNode;
pub use crate::routes::flow::FlowNodeKind;
pub use crate::routes::flow::TeamFlowEntry;
pub use crate::routes::utilization::TeamUtilizationCell;
pub use crate::routes::utilization::TeamUtilizationRow;
pub use crate::routes::utilization::UtilizationData;

use serde::{Deserialize, Serialize};

/// Team identifier (client-generated string key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

/// Project identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Time point identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimePointId(pub String);

impl TeamId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        TeamId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ProjectId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        ProjectId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TimePointId {
    pub fn new<S: Into<String>>(value: S) -> Self {
        TimePointId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TimePointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        TeamId::new(value)
    }
}
impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        ProjectId::new(value)
    }
}
impl From<&str> for TimePointId {
    fn from(value: &str) -> Self {
        TimePointId::new(value)
    }
}

pub use crate::models::{AllocationEntry, AllocationMatrix, PlanDate, Project, Team, TimePoint};

/// Top-level plan snapshot: the catalogs plus the allocation matrix, as
/// supplied by the configuration/editing layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name
    #[serde(default)]
    pub name: String,
    /// SHA256 checksum of the snapshot data
    #[serde(default)]
    pub checksum: String,
    /// Team catalog, in declaration order
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Project catalog, in declaration order (order is significant for the
    /// flow engine's transfer and spillover scans)
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Time point catalog (unsorted; consumers sort by date)
    #[serde(default)]
    pub time_points: Vec<TimePoint>,
    /// Per-cell headcount allocations
    #[serde(default)]
    pub allocations: AllocationMatrix,
}

impl Plan {
    pub fn new(
        name: String,
        teams: Vec<Team>,
        projects: Vec<Project>,
        time_points: Vec<TimePoint>,
        allocations: AllocationMatrix,
    ) -> Self {
        Self {
            name,
            checksum: String::new(),
            teams,
            projects,
            time_points,
            allocations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Plan, ProjectId, TeamId, TimePointId};

    #[test]
    fn test_team_id_new() {
        let id = TeamId::new("team-42");
        assert_eq!(id.value(), "team-42");
    }

    #[test]
    fn test_team_id_equality() {
        let id1 = TeamId::new("a");
        let id2 = TeamId::new("a");
        let id3 = TeamId::new("b");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_team_id_ordering() {
        let id1 = TeamId::new("a");
        let id2 = TeamId::new("b");

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_project_id_new() {
        let id = ProjectId::new("atlas");
        assert_eq!(id.value(), "atlas");
    }

    #[test]
    fn test_project_id_display() {
        let id = ProjectId::new("atlas");
        assert_eq!(format!("{}", id), "atlas");
    }

    #[test]
    fn test_time_point_id_from_str() {
        let id: TimePointId = "tp-1".into();
        assert_eq!(id.value(), "tp-1");
    }

    #[test]
    fn test_all_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(TeamId::new("a"));
        set.insert(TeamId::new("b"));
        set.insert(TeamId::new("a")); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TeamId::new("t1")).unwrap();
        assert_eq!(json, "\"t1\"");
    }

    #[test]
    fn test_plan_deserialize_defaults() {
        let plan: Plan = serde_json::from_str("{}").unwrap();
        assert!(plan.name.is_empty());
        assert!(plan.teams.is_empty());
        assert!(plan.projects.is_empty());
        assert!(plan.time_points.is_empty());
        assert!(plan.allocations.is_empty());
    }
}
