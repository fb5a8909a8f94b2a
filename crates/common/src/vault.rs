//! Blob storage for uploaded bytes.
//!
//! The vault is a flat local directory of uuid-named files. It knows
//! nothing about passwords or drop identifiers; the registry maps those
//! onto [`VaultPath`]s. The size cap is enforced here, before anything
//! touches the disk.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Default upper bound on stored payloads (1 MiB).
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 1024 * 1024;

/// Errors that can occur when working with the vault.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// Payload exceeds the configured cap. Raised before any write.
    #[error("payload of {size} bytes exceeds the {max} byte limit")]
    TooLarge { size: u64, max: u64 },

    /// No blob at the given path.
    #[error("no blob at {0}")]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Location of one stored blob, exclusively owned by a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPath(pub(crate) PathBuf);

impl VaultPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// A local directory of opaque blobs with a hard size cap.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    max_size: u64,
}

impl Vault {
    /// Open a vault rooted at `root`, creating the directory if absent.
    pub async fn new(root: impl Into<PathBuf>, max_size: u64) -> Result<Self, VaultError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root, max_size })
    }

    /// The configured payload cap in bytes.
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Persist a payload under a fresh uuid-named path.
    ///
    /// Oversized payloads are rejected before any write, so a failed save
    /// never leaves a partial blob behind.
    pub async fn save(&self, bytes: &[u8]) -> Result<VaultPath, VaultError> {
        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(VaultError::TooLarge {
                size,
                max: self.max_size,
            });
        }

        let path = self.root.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), size, "blob persisted");
        Ok(VaultPath(path))
    }

    /// Read a stored blob back in full.
    pub async fn open(&self, path: &VaultPath) -> Result<Vec<u8>, VaultError> {
        match tokio::fs::read(&path.0).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(VaultError::NotFound(path.0.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a stored blob.
    ///
    /// Callers on the claim path treat failure as log-and-continue; the
    /// download has already succeeded from the user's perspective.
    pub async fn delete(&self, path: &VaultPath) -> Result<(), VaultError> {
        match tokio::fs::remove_file(&path.0).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(VaultError::NotFound(path.0.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
