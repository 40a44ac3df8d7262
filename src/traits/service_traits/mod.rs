pub mod chart_service;
pub mod export_service;
pub mod forecast_service;
pub mod query_service;
