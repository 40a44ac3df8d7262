pub use axum::{
    Json, Router,
    extract::{Path as AxumPath, Query as AxumQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::Client;
pub use thiserror::Error;
pub use tower_http::services::ServeDir;
