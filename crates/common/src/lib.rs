/**
 * Identifier and one-time password generation.
 *  Ids double as bearer tokens for reaching the
 *  password prompt, so they carry real entropy;
 *  passwords are the short human-typed second factor.
 */
pub mod credentials;
/**
 * The claim protocol: issue a drop, check it
 *  exists, redeem it exactly once. Composes the
 *  registry and the vault; this is the surface
 *  the HTTP layer consumes.
 */
pub mod drops;
/**
 * The pending file record. A record in the
 *  registry is pending; removal on a successful
 *  claim is the terminal transition.
 */
pub mod record;
/**
 * The authoritative in-memory table of pending
 *  drops. Owns the verify-and-retire operation
 *  and every concurrency guarantee in the system.
 */
pub mod registry;
/**
 * Storage layer implementation.
 *  Just a light wrapper around a local directory
 *  of opaque, uuid-named blobs.
 */
pub mod vault;

pub mod prelude {
    pub use crate::credentials::{DropId, Password};
    pub use crate::drops::{ClaimedFile, DropStore, IssueError, RedeemError};
    pub use crate::record::FileRecord;
    pub use crate::registry::{ClaimError, DropTicket, Registry};
    pub use crate::vault::{Vault, VaultError, VaultPath};
}
