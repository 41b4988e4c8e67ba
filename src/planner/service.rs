use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    error::Result,
    message::planner::{GetPlanRequest, GetPlanResponse},
};

/// Handle to a remote planning endpoint.
#[async_trait]
pub trait PlannerService: Send + Sync {
    /// Name the endpoint is reachable under, used in log lines.
    fn service_name(&self) -> &str;

    /// Wait up to `timeout` for the endpoint to become reachable.
    async fn wait_for_service(&self, timeout: Duration) -> bool;

    /// Submit one request and return the raw reply.
    async fn send_request(&self, request: GetPlanRequest) -> Result<GetPlanResponse>;
}

#[async_trait]
impl<S> PlannerService for Arc<S>
where
    S: PlannerService + ?Sized,
{
    fn service_name(&self) -> &str {
        (**self).service_name()
    }

    async fn wait_for_service(&self, timeout: Duration) -> bool {
        (**self).wait_for_service(timeout).await
    }

    async fn send_request(&self, request: GetPlanRequest) -> Result<GetPlanResponse> {
        (**self).send_request(request).await
    }
}

#[async_trait]
impl<S> PlannerService for Box<S>
where
    S: PlannerService + ?Sized,
{
    fn service_name(&self) -> &str {
        (**self).service_name()
    }

    async fn wait_for_service(&self, timeout: Duration) -> bool {
        (**self).wait_for_service(timeout).await
    }

    async fn send_request(&self, request: GetPlanRequest) -> Result<GetPlanResponse> {
        (**self).send_request(request).await
    }
}
