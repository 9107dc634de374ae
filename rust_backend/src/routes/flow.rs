use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::TeamId;

// =========================================================
// Resource flow graph types
// =========================================================

/// What a flow node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowNodeKind {
    /// A team's total capacity (leftmost column)
    Team,
    /// A project at one time point
    Project,
}

/// A node in the flow graph.
///
/// Team nodes are keyed by team name with `value` = declared capacity.
/// Project nodes are keyed `{project_name}_{column_index}` with `value` =
/// total occupied headcount at that time point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub kind: FlowNodeKind,
    pub value: f64,
    pub column_index: usize,
}

/// Per-team slice of a flow link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFlowEntry {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// A directed capacity flow between two nodes.
///
/// `team_breakdown` is keyed by team id; a BTreeMap keeps the serialized
/// form stable between identical runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: String,
    pub target: String,
    pub value: f64,
    pub team_breakdown: BTreeMap<TeamId, TeamFlowEntry>,
}

/// Flow graph dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowGraphData {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
    /// Display names of the selected time points, one per column
    pub columns: Vec<String>,
}

/// Route function name constant for the flow graph
pub const GET_FLOW_GRAPH_DATA: &str = "get_flow_graph_data";
