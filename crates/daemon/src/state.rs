use std::sync::Arc;

use common::drops::DropStore;
use common::vault::Vault;

use crate::service_config::Config;

/// Main service state - the drop store shared across request handlers.
#[derive(Clone)]
pub struct State {
    drops: Arc<DropStore>,
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        tracing::info!(
            path = %config.storage_dir.display(),
            max_upload_size = config.max_upload_size,
            "opening blob vault"
        );
        let vault = Vault::new(&config.storage_dir, config.max_upload_size)
            .await
            .map_err(|e| StateSetupError::VaultSetup(e.to_string()))?;

        Ok(Self {
            drops: Arc::new(DropStore::new(vault)),
        })
    }

    pub fn drops(&self) -> &DropStore {
        &self.drops
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("failed to set up the blob vault: {0}")]
    VaultSetup(String),
}
