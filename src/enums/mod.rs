pub mod chart_kind;
pub mod export_format;
pub mod sort_order;
