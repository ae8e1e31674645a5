use crate::{AppError, Config, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Local directory that uploaded resumes are written into.
///
/// Files are kept after the request finishes. With `unique_names` off, an
/// upload overwrites any earlier file of the same name.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    unique_names: bool,
}

/// A file written to disk together with its base64 encoding.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub path: PathBuf,
    pub base64: String,
}

fn short_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Last path component of a client-supplied filename, if it names a file.
fn base_name(filename: &str) -> Option<&str> {
    let name = filename.rsplit(['/', '\\']).next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, unique_names: bool) -> Self {
        Self {
            dir: dir.into(),
            unique_names,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.uploads_dir, config.unique_upload_names)
    }

    fn stored_name(&self, filename: &str) -> String {
        match (base_name(filename), self.unique_names) {
            (Some(name), false) => name.to_string(),
            (Some(name), true) => format!("{}-{}", short_id(), name),
            (None, _) => short_id(),
        }
    }

    /// Writes `data` into the uploads directory, creating it if needed.
    pub async fn persist(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::FilePersist(e.to_string()))?;

        let path = self.dir.join(self.stored_name(filename));
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::FilePersist(e.to_string()))?;

        tracing::debug!("Stored {} ({} bytes) at {}", filename, data.len(), path.display());
        Ok(path)
    }

    /// Reads a stored file back and returns its base64 text.
    pub async fn encode(path: &Path) -> Result<String> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::FileEncode(e.to_string()))?;
        Ok(STANDARD.encode(data))
    }

    pub async fn ingest(&self, filename: &str, data: &[u8]) -> Result<StoredFile> {
        let path = self.persist(filename, data).await?;
        let base64 = Self::encode(&path).await?;
        Ok(StoredFile { path, base64 })
    }
}
