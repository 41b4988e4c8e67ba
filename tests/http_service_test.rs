#[cfg(test)]
mod http_service_tests {
    use std::time::Duration;

    use axum::{
        Json, Router,
        http::StatusCode,
        routing::{get, post},
    };
    use planner_client::{
        HttpPlannerService, PlanItem, PlannerClient, PlannerClientConfig, PlannerService,
        error::{Error, planner_error::PlannerError},
        message::{GetPlanRequest, GetPlanResponse},
    };

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Planner that answers with one action per request field so the test can
    /// see what arrived on the wire.
    fn echo_planner() -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(
                "/planner/get_plan",
                post(|Json(request): Json<GetPlanRequest>| async move {
                    Json(GetPlanResponse {
                        success: true,
                        times: vec![0.0, 1.5],
                        actions: vec![request.domain, request.problem],
                        durations: vec![1.5, 3.0],
                        error_info: String::new(),
                    })
                }),
            )
    }

    fn fast_config() -> PlannerClientConfig {
        PlannerClientConfig {
            wait_interval_ms: 200,
            max_wait_attempts: Some(2),
            call_timeout_ms: 500,
            probe_interval_ms: 50,
            ..Default::default()
        }
    }

    fn client_for(base_url: &str) -> PlannerClient<HttpPlannerService> {
        let config = fast_config();
        let service = HttpPlannerService::with_config(base_url, &config).unwrap();
        PlannerClient::with_config(service, config)
    }

    #[tokio::test]
    async fn test_plan_over_http() {
        let base_url = serve(echo_planner()).await;
        let client = client_for(&base_url);

        let domain = "(define (domain robots)\n  (:requirements :durative-actions))";
        let plan = client.get_plan(domain, "(define (problem p1))", "").await.unwrap();

        assert_eq!(
            plan.items(),
            &[
                PlanItem::new(0.0, domain, 1.5),
                PlanItem::new(1.5, "(define (problem p1))", 3.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_planner_failure_over_http() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(
                "/planner/get_plan",
                post(|| async { Json(GetPlanResponse::failure("goal unreachable")) }),
            );
        let base_url = serve(app).await;
        let client = client_for(&base_url);

        match client.try_get_plan("D", "P", "").await {
            Err(Error::PlannerError(PlannerError::Rejected(info))) => {
                assert_eq!(info, "goal unreachable")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(client.get_plan("D", "P", "").await.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_plan() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(
                "/planner/get_plan",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
        let base_url = serve(app).await;
        let client = client_for(&base_url);

        assert!(matches!(
            client.try_get_plan("D", "P", "").await,
            Err(Error::PlannerError(PlannerError::UnexpectedStatus(500)))
        ));
    }

    #[tokio::test]
    async fn test_slow_planner_times_out() {
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route(
                "/planner/get_plan",
                post(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(GetPlanResponse::default())
                }),
            );
        let base_url = serve(app).await;
        let client = client_for(&base_url);

        assert!(matches!(
            client.try_get_plan("D", "P", "").await,
            Err(Error::PlannerError(PlannerError::Timeout(_)))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base_url = format!("http://{}", addr);
        let client = client_for(&base_url);

        assert!(!client.service().wait_for_service(Duration::from_millis(100)).await);
        assert!(matches!(
            client.try_get_plan("D", "P", "").await,
            Err(Error::PlannerError(PlannerError::ServiceUnavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_unhealthy_service_is_unavailable() {
        let app = Router::new().route(
            "/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base_url = serve(app).await;
        let service = HttpPlannerService::with_config(&base_url, &fast_config()).unwrap();

        assert!(!service.wait_for_service(Duration::from_millis(150)).await);
    }

    #[tokio::test]
    async fn test_zero_wait_interval_still_checks_once() {
        let base_url = serve(echo_planner()).await;
        let config = PlannerClientConfig {
            wait_interval_ms: 0,
            max_wait_attempts: Some(3),
            ..fast_config()
        };
        let service = HttpPlannerService::with_config(&base_url, &config).unwrap();
        assert!(service.wait_for_service(Duration::ZERO).await);

        let client = PlannerClient::with_config(service, config);
        let plan = client.try_get_plan("D", "P", "").await.unwrap();
        assert_eq!(plan.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_wait_on_unhealthy_service_gives_up() {
        let app = Router::new().route(
            "/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base_url = serve(app).await;
        let config = PlannerClientConfig {
            wait_interval_ms: 0,
            max_wait_attempts: Some(3),
            ..fast_config()
        };
        let service = HttpPlannerService::with_config(&base_url, &config).unwrap();
        assert!(!service.wait_for_service(Duration::ZERO).await);

        let client = PlannerClient::with_config(service, config);
        assert!(matches!(
            client.try_get_plan("D", "P", "").await,
            Err(Error::PlannerError(PlannerError::ServiceUnavailable(_)))
        ));
    }
}
