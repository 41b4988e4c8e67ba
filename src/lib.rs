pub mod error;
pub mod message;
pub mod models;
pub mod planner;
pub mod shared;

pub use error::{Error, Result};
pub use models::{Plan, PlanItem};
pub use planner::{HttpPlannerService, PlannerClient, PlannerClientConfig, PlannerService};
pub use shared::{Lifecycle, LifecycleHandle};
