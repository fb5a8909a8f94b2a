//! Shared test utilities for drop store integration tests
#![allow(dead_code)]

use ::common::drops::DropStore;
use ::common::vault::{Vault, DEFAULT_MAX_SIZE_BYTES};
use tempfile::TempDir;

/// Set up a drop store backed by a throwaway storage directory
pub async fn setup_store() -> (DropStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let vault = Vault::new(temp_dir.path().join("blobs"), DEFAULT_MAX_SIZE_BYTES)
        .await
        .unwrap();
    (DropStore::new(vault), temp_dir)
}

/// Set up a store with a custom payload cap
pub async fn setup_store_with_cap(max_size: u64) -> (DropStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let vault = Vault::new(temp_dir.path().join("blobs"), max_size)
        .await
        .unwrap();
    (DropStore::new(vault), temp_dir)
}

/// Number of blob files currently in the store's vault directory
pub fn blob_count(temp_dir: &TempDir) -> usize {
    std::fs::read_dir(temp_dir.path().join("blobs"))
        .map(|entries| entries.count())
        .unwrap_or(0)
}
