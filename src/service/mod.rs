pub mod chart_service_impl;
pub mod export_service_impl;
pub mod forecast_service_impl;
pub mod query_service_impl;
