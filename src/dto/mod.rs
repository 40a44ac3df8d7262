pub mod api_response;
pub mod built_query;
pub mod forecast_point;
pub mod result_set;
pub mod series_point;
