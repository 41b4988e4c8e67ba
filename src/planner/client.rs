use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::{Error, Result, planner_error::PlannerError},
    message::planner::GetPlanRequest,
    models::plan::Plan,
    planner::{PlannerClientConfig, PlannerService},
    shared::lifecycle::LifecycleHandle,
};

/// Requests plans from a remote planning endpoint.
pub struct PlannerClient<S> {
    service: S,
    config: PlannerClientConfig,
    lifecycle: LifecycleHandle,
}

impl<S> PlannerClient<S>
where
    S: PlannerService,
{
    pub fn new(service: S) -> Self {
        Self::with_config(service, PlannerClientConfig::default())
    }

    pub fn with_config(service: S, config: PlannerClientConfig) -> Self {
        Self {
            service,
            config,
            lifecycle: LifecycleHandle::detached(),
        }
    }

    /// Abort the availability wait once `lifecycle` stops.
    pub fn with_lifecycle(mut self, lifecycle: LifecycleHandle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn config(&self) -> &PlannerClientConfig {
        &self.config
    }

    /// Ask the endpoint for a plan. Every failure is logged and yields `None`.
    pub async fn get_plan(&self, domain: &str, problem: &str, node_namespace: &str) -> Option<Plan> {
        match self.try_get_plan(domain, problem, node_namespace).await {
            Ok(plan) => Some(plan),
            Err(e) => {
                self.log_failure(&e);
                None
            }
        }
    }

    /// Same as [`get_plan`](Self::get_plan) but hands the failure back to the caller.
    pub async fn try_get_plan(
        &self,
        domain: &str,
        problem: &str,
        node_namespace: &str,
    ) -> Result<Plan> {
        let span = info_span!(
            "get_plan",
            request_id = %Uuid::new_v4(),
            service = self.service.service_name(),
            namespace = node_namespace,
        );

        async move {
            self.wait_for_service().await?;

            let request = GetPlanRequest::new(domain, problem);
            debug!(
                domain_len = request.domain.len(),
                problem_len = request.problem.len(),
                "sending plan request"
            );

            let timeout = self.config.call_timeout();
            let response = tokio::time::timeout(timeout, self.service.send_request(request))
                .await
                .map_err(|_| PlannerError::Timeout(timeout))??;

            let plan = Plan::try_from(response)?;
            info!(items = plan.len(), end_time = plan.end_time(), "plan received");
            Ok(plan)
        }
        .instrument(span)
        .await
    }

    async fn wait_for_service(&self) -> Result<()> {
        let name = self.service.service_name();
        let mut attempts: u32 = 0;

        loop {
            if !self.lifecycle.is_running() {
                return Err(PlannerError::Shutdown.into());
            }

            let available = tokio::select! {
                available = self.service.wait_for_service(self.config.wait_interval()) => available,
                _ = self.lifecycle.stopped() => return Err(PlannerError::Shutdown.into()),
            };
            if available {
                return Ok(());
            }

            attempts += 1;
            error!("{} service client: waiting for service to appear...", name);

            if let Some(max) = self.config.max_wait_attempts
                && attempts >= max
            {
                return Err(PlannerError::ServiceUnavailable(name.to_string()).into());
            }
            tokio::task::yield_now().await;
        }
    }

    fn log_failure(&self, e: &Error) {
        let name = self.service.service_name();
        match e {
            Error::PlannerError(PlannerError::Rejected(info)) => error!("{}: {}", name, info),
            Error::PlannerError(PlannerError::Shutdown) => {
                warn!("{}: shutdown requested, no plan requested", name)
            }
            _ => error!("{}: {}", name, e),
        }
    }
}
