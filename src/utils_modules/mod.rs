pub mod io_utils;
pub mod logger_utils;
pub mod query_utils;
