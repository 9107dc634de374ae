pub mod plan;

pub use plan::{parse_plan_json_str, PlanValidationError};
