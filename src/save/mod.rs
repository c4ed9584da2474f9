//! Metadata save/load
//!
//! Converts an [`ItemMetadata`] snapshot to and from a versioned persisted
//! form, and handles writing it to disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::ItemMetadata;

/// Save format version for compatibility checking
const SAVE_VERSION: u32 = 1;

/// Errors from metadata save/load
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Versioned wrapper around a metadata snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaSaveData {
    pub version: u32,
    pub meta: ItemMetadata,
}

impl MetaSaveData {
    /// Wrap a snapshot at the current save version
    pub fn new(meta: ItemMetadata) -> Self {
        Self {
            version: SAVE_VERSION,
            meta,
        }
    }
}

/// Serialize metadata to a JSON string
pub fn to_json(meta: &ItemMetadata) -> Result<String, SaveError> {
    let data = MetaSaveData::new(meta.clone());
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Deserialize metadata from a JSON string, checking the version
pub fn from_json(json: &str) -> Result<ItemMetadata, SaveError> {
    let data: MetaSaveData = serde_json::from_str(json)?;
    if data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: data.version,
        });
    }
    Ok(data.meta)
}

/// Save metadata to a file
pub fn save_metadata(meta: &ItemMetadata, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, to_json(meta)?)?;
    log::info!("Metadata saved to {}", path.display());
    Ok(())
}

/// Load metadata from a file
pub fn load_metadata(path: impl AsRef<Path>) -> Result<ItemMetadata, SaveError> {
    let json = fs::read_to_string(path.as_ref())?;
    from_json(&json)
}
