use crate::common::*;

#[doc = "HTTP 서버 바인딩 정보"]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ServerConfig {
    pub listen_host: String,
    pub listen_port: u16,
}
