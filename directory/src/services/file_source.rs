//! Static JSON file directory source

use std::path::{Path, PathBuf};
use async_trait::async_trait;

use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::DirectorySource;

/// Reads the directory payload from a file on disk, re-read on every fetch
pub struct RealFileDirectorySource {
    path: PathBuf,
}

impl RealFileDirectorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectorySource for RealFileDirectorySource {
    async fn fetch(&self) -> DirectoryResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DirectoryError::transport(format!("Failed to read {}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
