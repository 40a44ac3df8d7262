use crate::common::*;

#[doc = "Warehouse 쿼리 엔드포인트 접속 정보"]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct WarehouseConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub query_timeout_sec: u64,
}
