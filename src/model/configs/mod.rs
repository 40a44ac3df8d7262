pub mod server_config;
pub mod system_config;
pub mod total_config;
pub mod warehouse_config;
