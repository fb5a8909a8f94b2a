//! The pending file record.

use crate::credentials::Password;
use crate::vault::VaultPath;

/// One pending transfer, as held by the registry.
///
/// There is no stored state field. A record present in the registry is
/// pending and visible to lookups; a successful claim removes it in the
/// same operation that verified the password, so "claimed" is the outcome
/// of removal rather than a flag a retry path could re-read.
#[derive(Debug)]
pub struct FileRecord {
    /// Location of the persisted bytes. Exclusively owned by this record
    /// until the drop is destroyed.
    pub storage_path: VaultPath,
    /// Display name returned to the downloader.
    pub original_name: String,
    /// The one-time secret. Compared successfully exactly once.
    pub password: Password,
    /// Size recorded at creation. The upload path enforces the cap before
    /// the record exists; this field is informational afterwards.
    pub size_bytes: u64,
}
