use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_SERVICE_NAME: &str = "planner/get_plan";

/// Settings for [`PlannerClient`](crate::planner::PlannerClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerClientConfig {
    /// Name of the planning endpoint.
    pub service_name: String,
    /// Length of one availability wait, in milliseconds.
    pub wait_interval_ms: u64,
    /// Availability waits before giving up. `None` waits forever.
    pub max_wait_attempts: Option<u32>,
    /// Reply timeout, in milliseconds.
    pub call_timeout_ms: u64,
    /// Pause between health probes, in milliseconds.
    pub probe_interval_ms: u64,
}

impl Default for PlannerClientConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            wait_interval_ms: 5_000,
            max_wait_attempts: Some(12),
            call_timeout_ms: 5_000,
            probe_interval_ms: 250,
        }
    }
}

impl PlannerClientConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn wait_interval(&self) -> Duration {
        Duration::from_millis(self.wait_interval_ms)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub fn probe_interval(&self) -> Duration {
        Duration::from_millis(self.probe_interval_ms)
    }
}
