use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::{ProjectId, TeamId, TimePointId};
use crate::models::Team;

/// Per-cell headcount allocation for a (time point, project, team) triple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Headcount committed to the project at this time point
    #[serde(default)]
    pub occupied: f64,
    /// Sub-portion of `occupied` flagged as soon-to-be-released
    #[serde(default)]
    pub prerelease: f64,
}

impl AllocationEntry {
    pub fn new(occupied: f64, prerelease: f64) -> Self {
        Self {
            occupied,
            prerelease,
        }
    }
}

/// Sparse allocation matrix: time point -> project -> team -> entry.
///
/// Absence of a cell reads as zero. Values are multiples of 0.5 by the
/// editing layer's convention, but nothing here assumes it; arithmetic is
/// generic floating point and negative values pass through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationMatrix {
    #[serde(flatten)]
    cells: HashMap<TimePointId, HashMap<ProjectId, HashMap<TeamId, AllocationEntry>>>,
}

impl AllocationMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a single cell.
    pub fn set(
        &mut self,
        time_point: TimePointId,
        project: ProjectId,
        team: TeamId,
        entry: AllocationEntry,
    ) {
        self.cells
            .entry(time_point)
            .or_default()
            .entry(project)
            .or_default()
            .insert(team, entry);
    }

    /// Look up a cell; `None` when no allocation was entered.
    pub fn entry(
        &self,
        time_point: &TimePointId,
        project: &ProjectId,
        team: &TeamId,
    ) -> Option<&AllocationEntry> {
        self.cells.get(time_point)?.get(project)?.get(team)
    }

    /// Occupied headcount for a cell, zero when absent.
    pub fn occupied(&self, time_point: &TimePointId, project: &ProjectId, team: &TeamId) -> f64 {
        self.entry(time_point, project, team)
            .map(|e| e.occupied)
            .unwrap_or(0.0)
    }

    /// Prerelease headcount for a cell, zero when absent.
    pub fn prerelease(&self, time_point: &TimePointId, project: &ProjectId, team: &TeamId) -> f64 {
        self.entry(time_point, project, team)
            .map(|e| e.prerelease)
            .unwrap_or(0.0)
    }

    /// Aggregate occupied headcount for a project at a time point, summed
    /// over the given team catalog. Cells referencing teams outside the
    /// catalog do not contribute.
    pub fn project_total(&self, time_point: &TimePointId, project: &ProjectId, teams: &[Team]) -> f64 {
        teams
            .iter()
            .map(|team| self.occupied(time_point, project, &team.id))
            .sum()
    }

    /// Iterate over every entered cell. Iteration order is unspecified;
    /// callers producing output must not depend on it.
    pub fn cells(
        &self,
    ) -> impl Iterator<Item = (&TimePointId, &ProjectId, &TeamId, &AllocationEntry)> {
        self.cells.iter().flat_map(|(time_point, per_project)| {
            per_project.iter().flat_map(move |(project, per_team)| {
                per_team
                    .iter()
                    .map(move |(team, entry)| (time_point, project, team, entry))
            })
        })
    }

    /// True when no cells have been entered at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AllocationEntry, AllocationMatrix};
    use crate::api::{ProjectId, TeamId, TimePointId};
    use crate::models::Team;

    fn ids() -> (TimePointId, ProjectId, TeamId) {
        (
            TimePointId::new("tp1"),
            ProjectId::new("p1"),
            TeamId::new("t1"),
        )
    }

    #[test]
    fn test_missing_cell_reads_zero() {
        let matrix = AllocationMatrix::new();
        let (tp, project, team) = ids();

        assert!(matrix.entry(&tp, &project, &team).is_none());
        assert_eq!(matrix.occupied(&tp, &project, &team), 0.0);
        assert_eq!(matrix.prerelease(&tp, &project, &team), 0.0);
    }

    #[test]
    fn test_set_and_read_cell() {
        let mut matrix = AllocationMatrix::new();
        let (tp, project, team) = ids();

        matrix.set(
            tp.clone(),
            project.clone(),
            team.clone(),
            AllocationEntry::new(2.5, 0.5),
        );

        assert_eq!(matrix.occupied(&tp, &project, &team), 2.5);
        assert_eq!(matrix.prerelease(&tp, &project, &team), 0.5);
    }

    #[test]
    fn test_set_replaces_existing_cell() {
        let mut matrix = AllocationMatrix::new();
        let (tp, project, team) = ids();

        matrix.set(
            tp.clone(),
            project.clone(),
            team.clone(),
            AllocationEntry::new(1.0, 0.0),
        );
        matrix.set(
            tp.clone(),
            project.clone(),
            team.clone(),
            AllocationEntry::new(3.0, 1.0),
        );

        assert_eq!(matrix.occupied(&tp, &project, &team), 3.0);
    }

    #[test]
    fn test_project_total_sums_over_catalog() {
        let mut matrix = AllocationMatrix::new();
        let tp = TimePointId::new("tp1");
        let project = ProjectId::new("p1");
        let teams = vec![
            Team::new(TeamId::new("t1"), "A".to_string(), 5.0, String::new()),
            Team::new(TeamId::new("t2"), "B".to_string(), 5.0, String::new()),
        ];

        matrix.set(
            tp.clone(),
            project.clone(),
            TeamId::new("t1"),
            AllocationEntry::new(2.0, 0.0),
        );
        matrix.set(
            tp.clone(),
            project.clone(),
            TeamId::new("t2"),
            AllocationEntry::new(1.5, 0.0),
        );

        assert_eq!(matrix.project_total(&tp, &project, &teams), 3.5);
    }

    #[test]
    fn test_project_total_skips_unknown_teams() {
        let mut matrix = AllocationMatrix::new();
        let tp = TimePointId::new("tp1");
        let project = ProjectId::new("p1");
        let teams = vec![Team::new(
            TeamId::new("t1"),
            "A".to_string(),
            5.0,
            String::new(),
        )];

        matrix.set(
            tp.clone(),
            project.clone(),
            TeamId::new("t1"),
            AllocationEntry::new(2.0, 0.0),
        );
        // Entered against a team that has since been removed from the catalog.
        matrix.set(
            tp.clone(),
            project.clone(),
            TeamId::new("ghost"),
            AllocationEntry::new(4.0, 0.0),
        );

        assert_eq!(matrix.project_total(&tp, &project, &teams), 2.0);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let mut matrix = AllocationMatrix::new();
        let (tp, project, team) = ids();

        matrix.set(
            tp.clone(),
            project.clone(),
            team.clone(),
            AllocationEntry::new(-1.0, 0.0),
        );

        assert_eq!(matrix.occupied(&tp, &project, &team), -1.0);
    }

    #[test]
    fn test_is_empty() {
        let mut matrix = AllocationMatrix::new();
        assert!(matrix.is_empty());

        let (tp, project, team) = ids();
        matrix.set(tp, project, team, AllocationEntry::default());
        assert!(!matrix.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut matrix = AllocationMatrix::new();
        let (tp, project, team) = ids();
        matrix.set(tp.clone(), project.clone(), team.clone(), AllocationEntry::new(2.0, 0.5));

        let json = serde_json::to_string(&matrix).unwrap();
        let back: AllocationMatrix = serde_json::from_str(&json).unwrap();

        assert_eq!(back.occupied(&tp, &project, &team), 2.0);
        assert_eq!(back.prerelease(&tp, &project, &team), 0.5);
    }
}
