use serde::{Deserialize, Serialize};

use crate::api::{TeamId, TimePointId};

// =========================================================
// Team utilization table types
// =========================================================

/// Per-team figures at one time point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamUtilizationCell {
    pub time_point_id: TimePointId,
    /// Total occupied headcount across projects
    pub occupied: f64,
    /// Total prerelease headcount across projects
    pub prerelease: f64,
    /// Capacity minus occupied; negative when overbooked
    pub free: f64,
}

/// One table row: a team across all time points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamUtilizationRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub capacity: f64,
    pub color: String,
    /// One cell per time point, in ascending date order
    pub cells: Vec<TeamUtilizationCell>,
}

/// Utilization dataset for the capacity table view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilizationData {
    pub rows: Vec<TeamUtilizationRow>,
    /// Display names of the time points, ascending by date
    pub time_points: Vec<String>,
    pub total_capacity: f64,
}

/// Route function name constant for the utilization table
pub const GET_UTILIZATION_DATA: &str = "get_utilization_data";
