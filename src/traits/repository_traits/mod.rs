pub mod artifact_store;
pub mod warehouse_repository;
