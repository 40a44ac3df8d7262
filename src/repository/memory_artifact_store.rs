use crate::common::*;

use crate::traits::repository_traits::artifact_store::*;

use std::sync::Mutex;

#[doc = "테스트 전용 인메모리 구현체 - 파일시스템 부작용 없이 put 호출을 기록한다"]
#[derive(Debug, Default, new)]
pub struct MemoryArtifactStore {
    #[new(default)]
    pub artifacts: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryArtifactStore {
    pub fn stored_names(&self) -> Vec<String> {
        self.artifacts
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn bytes_of(&self, file_name: &str) -> Option<Vec<u8>> {
        self.artifacts
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, bytes)| bytes.clone())
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn put(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, anyhow::Error> {
        self.artifacts
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));

        Ok(PathBuf::from("memory").join(file_name))
    }
}
