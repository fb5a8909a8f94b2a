//! The claim protocol: issue, check, redeem.
//!
//! [`DropStore`] composes the vault and the registry into the three
//! operations the transport layer consumes. The ordering inside
//! [`DropStore::redeem`] is load-bearing: the record is retired before
//! any byte leaves the vault, so a disconnecting or racing client can
//! never resurrect a claimed drop.

use crate::credentials::DropId;
use crate::registry::{ClaimError, DropTicket, Registry};
use crate::vault::{Vault, VaultError, VaultPath};

/// A successfully claimed drop, ready to stream back to the recipient.
#[derive(Debug)]
pub struct ClaimedFile {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// Payload over the configured cap. Nothing was written and no
    /// record was created.
    #[error("file too large: {size} bytes (limit {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("storage error: {0}")]
    Storage(VaultError),
}

#[derive(Debug, thiserror::Error)]
pub enum RedeemError {
    /// Unknown or already-claimed drop. The two are indistinguishable.
    #[error("no such drop")]
    NotFound,

    /// The record remains pending and can be retried.
    #[error("incorrect password")]
    WrongPassword,

    /// The record was retired but the bytes could not be read back.
    #[error("storage error: {0}")]
    Storage(VaultError),
}

/// The full lifecycle of one-time drops, from upload to destruction.
#[derive(Debug)]
pub struct DropStore {
    vault: Vault,
    registry: Registry,
}

impl DropStore {
    pub fn new(vault: Vault) -> Self {
        Self {
            vault,
            registry: Registry::new(),
        }
    }

    /// The configured payload cap in bytes.
    pub fn max_size(&self) -> u64 {
        self.vault.max_size()
    }

    /// Persist an upload and register it as a pending drop.
    ///
    /// The vault enforces the size cap before writing, so an oversized
    /// upload leaves neither an orphaned blob nor a registry entry.
    pub async fn issue(
        &self,
        bytes: &[u8],
        declared_name: String,
    ) -> Result<DropTicket, IssueError> {
        let storage_path = self.vault.save(bytes).await.map_err(|e| match e {
            VaultError::TooLarge { size, max } => IssueError::TooLarge { size, max },
            other => IssueError::Storage(other),
        })?;

        let ticket = self
            .registry
            .create(storage_path, declared_name, bytes.len() as u64);
        tracing::info!(id = %ticket.id, "drop issued");
        Ok(ticket)
    }

    /// Whether a drop is still pending.
    pub fn exists(&self, id: &DropId) -> bool {
        self.registry.peek_exists(id)
    }

    /// Claim a drop: verify the password, retire the record, read the
    /// bytes, and destroy the blob.
    ///
    /// The blob delete is attempted exactly once per record, whether or
    /// not the read succeeded, and its failure is logged rather than
    /// surfaced: by that point the claim has already been won.
    pub async fn redeem(
        &self,
        id: &DropId,
        attempt: &str,
    ) -> Result<ClaimedFile, RedeemError> {
        let record = self
            .registry
            .verify_and_retire(id, attempt)
            .map_err(|e| match e {
                ClaimError::NotFound => RedeemError::NotFound,
                ClaimError::WrongPassword => RedeemError::WrongPassword,
            })?;

        let opened = self.vault.open(&record.storage_path).await;
        self.destroy_blob(id, &record.storage_path).await;

        let bytes = opened.map_err(RedeemError::Storage)?;
        tracing::info!(id = %id, name = %record.original_name, "drop claimed and destroyed");
        Ok(ClaimedFile {
            original_name: record.original_name,
            bytes,
        })
    }

    async fn destroy_blob(&self, id: &DropId, path: &VaultPath) {
        if let Err(e) = self.vault.delete(path).await {
            tracing::warn!(id = %id, error = %e, "failed to delete claimed blob");
        }
    }
}
