//! Service layer: the flow reconciliation engine and derived datasets.
//!
//! Services are pure functions over an immutable snapshot of the catalogs
//! and the allocation matrix; every invocation recomputes from scratch.

pub mod flow;

pub mod utilization;


pub use flow::{compute_flow_graph, merge_links, select_time_window};
pub use utilization::compute_utilization_data;
