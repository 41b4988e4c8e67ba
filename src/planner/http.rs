use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::debug;

use crate::{
    error::{Result, planner_error::PlannerError},
    message::planner::{GetPlanRequest, GetPlanResponse},
    planner::{PlannerClientConfig, PlannerService},
};

const MIN_PROBE_TIMEOUT: Duration = Duration::from_millis(100);

/// Planning endpoint reached over HTTP with JSON bodies.
///
/// Availability is probed with `GET {base}/health`, requests go to
/// `POST {base}/{service_name}`.
#[derive(Debug, Clone)]
pub struct HttpPlannerService {
    client: reqwest::Client,
    base_url: String,
    service_name: String,
    probe_interval: Duration,
}

impl HttpPlannerService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, &PlannerClientConfig::default())
    }

    pub fn with_config(base_url: impl Into<String>, config: &PlannerClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base_url, config))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        config: &PlannerClientConfig,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            service_name: config.service_name.trim_matches('/').to_string(),
            probe_interval: config.probe_interval(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    fn call_url(&self) -> String {
        format!("{}/{}", self.base_url, self.service_name)
    }

    async fn probe(&self, timeout: Duration) -> bool {
        match self.client.get(self.health_url()).timeout(timeout).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    debug!(status = %response.status(), "health probe rejected");
                }
                ok
            }
            Err(e) => {
                debug!(error = %e, "health probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl PlannerService for HttpPlannerService {
    fn service_name(&self) -> &str {
        &self.service_name
    }

    async fn wait_for_service(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            // a zero window still gets one probe
            let remaining = deadline.saturating_duration_since(Instant::now());
            if self.probe(remaining.max(MIN_PROBE_TIMEOUT)).await {
                return true;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            tokio::time::sleep(self.probe_interval.min(remaining)).await;
        }
    }

    async fn send_request(&self, request: GetPlanRequest) -> Result<GetPlanResponse> {
        let response = self
            .client
            .post(self.call_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::UnexpectedStatus(status.as_u16()).into());
        }

        Ok(response.json::<GetPlanResponse>().await?)
    }
}
