//! Team utilization summary for the capacity table view.

use crate::models::{AllocationMatrix, Project, Team, TimePoint};
use crate::routes::utilization::{TeamUtilizationCell, TeamUtilizationRow, UtilizationData};

/// Compute per-team utilization rows across all time points.
///
/// Time points are sorted ascending by date; for each team and time point
/// the occupied and prerelease headcount are summed over every project, and
/// free capacity is the declared capacity minus occupied (negative when the
/// team is overbooked — values pass through unclamped).
pub fn compute_utilization_data(
    teams: &[Team],
    projects: &[Project],
    time_points: &[TimePoint],
    allocations: &AllocationMatrix,
) -> UtilizationData {
    let mut sorted_points: Vec<TimePoint> = time_points.to_vec();
    sorted_points.sort_by(|a, b| a.date.cmp(&b.date));

    let rows: Vec<TeamUtilizationRow> = teams
        .iter()
        .map(|team| {
            let cells = sorted_points
                .iter()
                .map(|time_point| {
                    let mut occupied = 0.0;
                    let mut prerelease = 0.0;
                    for project in projects {
                        occupied += allocations.occupied(&time_point.id, &project.id, &team.id);
                        prerelease += allocations.prerelease(&time_point.id, &project.id, &team.id);
                    }
                    TeamUtilizationCell {
                        time_point_id: time_point.id.clone(),
                        occupied,
                        prerelease,
                        free: team.capacity - occupied,
                    }
                })
                .collect();

            TeamUtilizationRow {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                capacity: team.capacity,
                color: team.color.clone(),
                cells,
            }
        })
        .collect();

    let total_capacity = teams.iter().map(|t| t.capacity).sum();

    UtilizationData {
        rows,
        time_points: sorted_points.iter().map(|tp| tp.name.clone()).collect(),
        total_capacity,
    }
}
