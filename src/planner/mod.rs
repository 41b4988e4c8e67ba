pub mod client;
pub mod config;
pub mod http;
pub mod service;

pub use client::PlannerClient;
pub use config::PlannerClientConfig;
pub use http::HttpPlannerService;
pub use service::PlannerService;
