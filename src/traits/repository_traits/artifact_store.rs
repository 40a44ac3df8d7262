use crate::common::*;

#[doc = r#"
    생성된 산출물(차트 이미지, 내보내기 파일)의 저장 seam.

    파일명이 요청 파라미터에서 결정적으로 유도되므로 동일 파라미터의 동시 요청은
    같은 경로를 덮어쓸 수 있다. (last writer wins - 알려진 제약)
"#]
pub trait ArtifactStore: Send + Sync {
    fn put(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, anyhow::Error>;
}
