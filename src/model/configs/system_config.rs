use crate::common::*;

#[doc = "산출물 디렉토리 설정 - 차트 이미지/내보내기 파일이 저장되는 경로"]
#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub graph_dir: String,
    pub export_dir: String,
}
