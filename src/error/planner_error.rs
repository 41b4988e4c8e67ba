use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("service {0} did not become available")]
    ServiceUnavailable(String),

    #[error("shutdown requested while waiting for the planner")]
    Shutdown,

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Rejected(String),

    #[error(
        "malformed response: {times} times, {actions} actions, {durations} durations"
    )]
    MalformedResponse {
        times: usize,
        actions: usize,
        durations: usize,
    },

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
}
