//! The authoritative table of pending drops.
//!
//! Every correctness guarantee in the system lives here: at most one
//! successful claim per drop, no re-reading of retired state, and no
//! window in which two racing attempts can both observe a pending record.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::credentials::{DropId, Password};
use crate::record::FileRecord;
use crate::vault::VaultPath;

/// What the uploader gets back: the link token and the one-time password.
#[derive(Debug, Clone)]
pub struct DropTicket {
    pub id: DropId,
    pub password: Password,
}

/// Why a claim attempt was refused.
///
/// Unknown and already-claimed identifiers collapse into the same
/// `NotFound` on purpose: a caller must not be able to distinguish a drop
/// that never existed from one that was already downloaded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("no such drop")]
    NotFound,
    #[error("incorrect password")]
    WrongPassword,
}

/// In-memory keyed table of pending records.
///
/// A single table-wide mutex serializes all mutations. The lock is held
/// only for map operations, never across file I/O, so a slow download
/// cannot stall other users' claims. Record counts are small; per-key
/// locking would buy nothing here.
#[derive(Debug, Default)]
pub struct Registry {
    records: Mutex<HashMap<DropId, FileRecord>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh pending record and mint its credentials.
    ///
    /// The identifier is redrawn in the (cosmically unlikely) event it
    /// collides with a live record, so a returned id is always unique
    /// among pending drops.
    pub fn create(
        &self,
        storage_path: VaultPath,
        original_name: String,
        size_bytes: u64,
    ) -> DropTicket {
        let password = Password::generate();
        let record = FileRecord {
            storage_path,
            original_name,
            password: password.clone(),
            size_bytes,
        };

        let mut records = self.records.lock();
        let id = loop {
            let candidate = DropId::generate();
            if let Entry::Vacant(slot) = records.entry(candidate) {
                slot.insert(record);
                break candidate;
            }
        };

        DropTicket { id, password }
    }

    /// Whether a drop is still pending.
    ///
    /// Used only to decide between rendering the password prompt and a
    /// 404. Unknown and already-claimed ids take the identical path, so
    /// the answer leaks nothing beyond the boolean.
    pub fn peek_exists(&self, id: &DropId) -> bool {
        self.records.lock().contains_key(id)
    }

    /// The critical operation: verify the password and retire the record
    /// as one indivisible step.
    ///
    /// Lookup, comparison, and removal all happen under a single lock
    /// hold. A concurrent attempt on the same id either runs first (and
    /// wins) or finds the record gone; there is no interleaving in which
    /// two callers both observe it pending. On a wrong password the
    /// record is left untouched and remains claimable.
    pub fn verify_and_retire(
        &self,
        id: &DropId,
        attempt: &str,
    ) -> Result<FileRecord, ClaimError> {
        let mut records = self.records.lock();
        match records.entry(*id) {
            Entry::Vacant(_) => Err(ClaimError::NotFound),
            Entry::Occupied(entry) => {
                if !entry.get().password.matches(attempt) {
                    return Err(ClaimError::WrongPassword);
                }
                // Removal hands the record's ownership (and with it the
                // exclusive right to the blob) to this caller.
                Ok(entry.remove())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn test_path(name: &str) -> VaultPath {
        VaultPath(PathBuf::from(format!("/tmp/burnbox-test/{name}")))
    }

    #[test]
    fn create_makes_a_pending_record() {
        let registry = Registry::new();
        let ticket = registry.create(test_path("a"), "a.txt".into(), 3);
        assert!(registry.peek_exists(&ticket.id));
    }

    #[test]
    fn unknown_ids_do_not_exist() {
        let registry = Registry::new();
        assert!(!registry.peek_exists(&DropId::generate()));
        assert!(matches!(
            registry.verify_and_retire(&DropId::generate(), "X"),
            Err(ClaimError::NotFound)
        ));
    }

    #[test]
    fn wrong_password_leaves_the_record_pending() {
        let registry = Registry::new();
        let ticket = registry.create(test_path("b"), "b.txt".into(), 1);

        assert!(matches!(
            registry.verify_and_retire(&ticket.id, "NOPE"),
            Err(ClaimError::WrongPassword)
        ));
        assert!(registry.peek_exists(&ticket.id));
    }

    #[test]
    fn successful_claim_retires_the_record() {
        let registry = Registry::new();
        let ticket = registry.create(test_path("c"), "c.txt".into(), 1);

        let record = registry
            .verify_and_retire(&ticket.id, ticket.password.reveal())
            .unwrap();
        assert_eq!(record.original_name, "c.txt");

        // Gone for good, even with the right password.
        assert!(!registry.peek_exists(&ticket.id));
        assert!(matches!(
            registry.verify_and_retire(&ticket.id, ticket.password.reveal()),
            Err(ClaimError::NotFound)
        ));
    }

    #[test]
    fn claims_accept_case_and_whitespace_variants() {
        let registry = Registry::new();
        let ticket = registry.create(test_path("d"), "d.txt".into(), 1);

        let attempt = format!(" {} ", ticket.password.reveal().to_lowercase());
        assert!(registry.verify_and_retire(&ticket.id, &attempt).is_ok());
    }
}
