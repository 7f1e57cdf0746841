pub mod dashboard_queries;
pub mod health_queries;
