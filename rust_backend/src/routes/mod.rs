pub mod flow;
pub mod utilization;
