//! Filesystem implementation of AttachmentStore

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use shelvia_core::entities::AttachmentKey;
use shelvia_core::error::DomainError;
use shelvia_core::traits::{AttachmentStore, RepoResult};
use shelvia_core::value_objects::DefectId;

fn storage_error(context: &str, path: &Path, e: &std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{context} {}: {e}", path.display()))
}

/// Attachment store backed by a flat directory
#[derive(Debug, Clone)]
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &AttachmentKey) -> PathBuf {
        self.root.join(key.storage_name())
    }
}

#[async_trait]
impl AttachmentStore for FsAttachmentStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, key: &AttachmentKey, bytes: &[u8]) -> RepoResult<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| storage_error("create directory", &self.root, &e))?;

        let path = self.path_for(key);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| storage_error("write", &path, &e))?;

        let name = key.storage_name();
        info!(filename = %name, "Attachment stored");
        Ok(name)
    }

    #[instrument(skip(self))]
    async fn list(&self, defect_id: DefectId) -> RepoResult<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "Upload directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(storage_error("read directory", &self.root, &e)),
        };

        let prefix = AttachmentKey::prefix(defect_id);
        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error("read directory", &self.root, &e))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.starts_with(&prefix) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &AttachmentKey) -> RepoResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, &e)),
        }
    }
}
