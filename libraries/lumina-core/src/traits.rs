/// Core traits for Lumina
use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;

/// Whole-collection user store
///
/// Implementers persist the complete, ordered list of user records. There are
/// no partial reads or writes: callers load a snapshot, work on it, and save
/// the full sequence back.
///
/// Implementations do not coordinate concurrent writers. Callers that run a
/// load-modify-save cycle must serialize those cycles themselves.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load every stored record, in insertion order
    ///
    /// A store that does not exist yet loads as empty and is created as a
    /// side effect.
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be read or decoded
    async fn load(&self) -> Result<Vec<UserRecord>>;

    /// Replace the stored collection with `records`
    ///
    /// # Errors
    /// Returns an error if the backing medium cannot be written
    async fn save(&self, records: &[UserRecord]) -> Result<()>;
}
