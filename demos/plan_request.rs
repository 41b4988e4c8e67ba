use planner_client::{HttpPlannerService, Lifecycle, PlannerClient, PlannerClientConfig};
use tracing::{error, info};

// cargo run --example plan_request -- <domain.pddl> <problem.pddl> [base_url]
#[tokio::main]
async fn main() -> planner_client::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(domain_path), Some(problem_path)) = (args.next(), args.next()) else {
        error!("usage: plan_request <domain.pddl> <problem.pddl> [base_url]");
        std::process::exit(2);
    };
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());

    let domain = tokio::fs::read_to_string(&domain_path).await?;
    let problem = tokio::fs::read_to_string(&problem_path).await?;

    let lifecycle = Lifecycle::new();
    lifecycle.shutdown_on_ctrl_c();

    let config = PlannerClientConfig::default();
    let service = HttpPlannerService::with_config(&base_url, &config)?;
    let client = PlannerClient::with_config(service, config).with_lifecycle(lifecycle.handle());

    match client.get_plan(&domain, &problem, "").await {
        Some(plan) => {
            info!(items = plan.len(), "plan found");
            print!("{}", plan);
        }
        None => {
            error!("no plan produced");
            std::process::exit(1);
        }
    }

    Ok(())
}
