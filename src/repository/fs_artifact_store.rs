use crate::common::*;

use crate::traits::repository_traits::artifact_store::*;

#[doc = "고정 디렉토리 하위에 산출물을 저장하는 파일시스템 구현체"]
#[derive(Debug, Clone, new)]
pub struct FsArtifactStore {
    base_dir: PathBuf,
}

impl ArtifactStore for FsArtifactStore {
    fn put(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, anyhow::Error> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            anyhow!(
                "[FsArtifactStore->put] Failed to create artifact directory {:?}: {:?}",
                self.base_dir,
                e
            )
        })?;

        let file_path: PathBuf = self.base_dir.join(file_name);

        fs::write(&file_path, bytes).map_err(|e| {
            anyhow!(
                "[FsArtifactStore->put] Failed to write artifact {:?}: {:?}",
                file_path,
                e
            )
        })?;

        Ok(file_path)
    }
}
