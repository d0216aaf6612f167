//! Lumina Storage
//!
//! Whole-collection user stores for the Lumina authentication backend.
//!
//! Two implementations of [`lumina_core::RecordStore`] live here:
//!
//! - [`JsonFileStore`]: one indent-formatted JSON array on disk, rewritten
//!   atomically on every save
//! - [`MemoryStore`]: a process-local vector, for tests and ephemeral runs
//!
//! # Example
//!
//! ```rust,no_run
//! use lumina_core::RecordStore;
//! use lumina_storage::JsonFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new("./data/users.json");
//!
//! // Creates an empty store on first use
//! let users = store.load().await?;
//! store.save(&users).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod json_file;
mod memory;

pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
