pub mod planner;

pub use planner::{GetPlanRequest, GetPlanResponse};
