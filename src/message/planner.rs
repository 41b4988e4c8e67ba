use serde::{Deserialize, Serialize};

/// Body of a plan request. Both fields are forwarded to the planner untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPlanRequest {
    pub domain: String,
    pub problem: String,
}

impl GetPlanRequest {
    pub fn new(domain: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            problem: problem.into(),
        }
    }
}

/// Planner reply. On success `times`, `actions` and `durations` are parallel
/// sequences; on failure only `error_info` is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPlanResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub times: Vec<f64>,

    #[serde(default)]
    pub actions: Vec<String>,

    #[serde(default)]
    pub durations: Vec<f64>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_info: String,
}

impl GetPlanResponse {
    pub fn failure(error_info: impl Into<String>) -> Self {
        Self {
            success: false,
            error_info: error_info.into(),
            ..Default::default()
        }
    }
}
