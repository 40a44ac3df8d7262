pub mod fs_artifact_store;
#[cfg(test)]
pub mod memory_artifact_store;
pub mod warehouse_repository_impl;
