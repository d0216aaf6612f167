//! JSON file backed user store

use crate::error::{Result, StorageError};
use async_trait::async_trait;
use lumina_core::{RecordStore, UserRecord};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Indentation used for the on-disk array
const INDENT: &[u8] = b"    ";

/// Contents of a freshly created store
const EMPTY_STORE: &[u8] = b"[]";

/// User store persisted as a single JSON array
///
/// Every save rewrites the whole file. The new contents go to a uniquely
/// named temporary file in the same directory, which is then renamed over
/// the target, so a reader sees either the old or the new collection, never
/// a partial one. Concurrent savers never share a temporary file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, creating an empty store if the file is missing
    pub async fn read_records(&self) -> Result<Vec<UserRecord>> {
        let contents = match fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => match self.create_empty().await {
                Ok(()) => return Ok(Vec::new()),
                // Another writer got there first; read what it left
                Err(e) if e.kind() == ErrorKind::AlreadyExists => fs::read(&self.path).await?,
                Err(e) => return Err(e.into()),
            },
            Err(e) => return Err(e.into()),
        };

        // A store being created by another caller can briefly be empty
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&contents).map_err(|e| StorageError::corrupt(&self.path, e))
    }

    /// Atomically replace the file with `records`
    pub async fn write_records(&self, records: &[UserRecord]) -> Result<()> {
        let bytes = encode(records)?;
        let dir = self.ensure_parent().await?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| std::io::Error::new(ErrorKind::Other, e))??;

        tracing::debug!("Wrote {} user records to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Create the backing file holding an empty array
    ///
    /// Fails with `AlreadyExists` rather than replacing a file some other
    /// writer created in the meantime.
    async fn create_empty(&self) -> std::io::Result<()> {
        self.ensure_parent().await?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await?;
        file.write_all(EMPTY_STORE).await?;
        file.sync_all().await?;

        tracing::info!("Created empty user store at {:?}", self.path);
        Ok(())
    }

    /// Create the parent directory if needed, returning it
    async fn ensure_parent(&self) -> std::io::Result<PathBuf> {
        match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).await?;
                Ok(parent.to_path_buf())
            }
            None => Ok(PathBuf::from(".")),
        }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> lumina_core::Result<Vec<UserRecord>> {
        Ok(self.read_records().await?)
    }

    async fn save(&self, records: &[UserRecord]) -> lumina_core::Result<()> {
        Ok(self.write_records(records).await?)
    }
}

/// Serialize records as a JSON array indented with four spaces
fn encode(records: &[UserRecord]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(bytes)
}
