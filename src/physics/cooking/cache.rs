//! On-disk cache of cooked collision records
//!
//! One cache file per source asset. A cache file is a plain concatenation
//! of `(u32 length, bytes)` records in submesh iteration order; there is
//! no header, version tag, or checksum. The record order is the only link
//! between a record and its submesh, so writer and reader must both use
//! the submesh sequence position, never a name.

use crate::config::CacheConfig;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

const LEN_PREFIX: usize = std::mem::size_of::<u32>();

/// Errors that can occur reading or writing cache files
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("truncated cache file: record claims {claimed} bytes but only {remaining} remain")]
    Truncated { claimed: usize, remaining: usize },
}

/// Filesystem store mapping a source asset to its cooked records
///
/// Every call touches disk; there is no in-memory layer. Concurrent saves
/// to the same asset path race and must be serialized by the caller.
pub struct MeshCache {
    config: CacheConfig,
}

impl MeshCache {
    /// Create a cache store over the given path configuration
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }

    /// Path configuration this store derives cache paths from
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Check whether a cache file exists for the asset
    pub fn exists(&self, asset_path: &Path) -> bool {
        self.config.cache_path(asset_path).exists()
    }

    /// Delete the asset's cache file if present
    ///
    /// Idempotent; a missing file is not an error.
    pub fn invalidate(&self, asset_path: &Path) -> Result<(), CacheError> {
        let path = self.config.cache_path(asset_path);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = ?path, "Invalidated cooked mesh cache");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read all records of the asset's cache file, in file order
    pub fn load(&self, asset_path: &Path) -> Result<Vec<Vec<u8>>, CacheError> {
        let path = self.config.cache_path(asset_path);
        let data = fs::read(&path)?;

        let mut records = Vec::new();
        let mut offset = 0usize;
        while offset < data.len() {
            let remaining = data.len() - offset;
            if remaining < LEN_PREFIX {
                return Err(CacheError::Truncated {
                    claimed: LEN_PREFIX,
                    remaining,
                });
            }

            let mut prefix = [0u8; LEN_PREFIX];
            prefix.copy_from_slice(&data[offset..offset + LEN_PREFIX]);
            let length = u32::from_ne_bytes(prefix) as usize;
            offset += LEN_PREFIX;

            let remaining = data.len() - offset;
            if length > remaining {
                return Err(CacheError::Truncated {
                    claimed: length,
                    remaining,
                });
            }

            records.push(data[offset..offset + length].to_vec());
            offset += length;
        }

        debug!(path = ?path, records = records.len(), "Loaded cooked mesh cache");
        Ok(records)
    }

    /// Write a fresh cache file containing the records in the given order
    ///
    /// Overwrites any existing file. The write is not transactional; a
    /// crash mid-write leaves a file only the next `load` will reject.
    pub fn save(&self, asset_path: &Path, records: &[Vec<u8>]) -> Result<(), CacheError> {
        let path = self.config.cache_path(asset_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let total: usize = records.iter().map(|r| LEN_PREFIX + r.len()).sum();
        let mut buffer = Vec::with_capacity(total);
        for record in records {
            buffer.extend_from_slice(&(record.len() as u32).to_ne_bytes());
            buffer.extend_from_slice(record);
        }

        fs::write(&path, &buffer)?;
        info!(
            path = ?path,
            records = records.len(),
            bytes = buffer.len(),
            "Saved cooked mesh cache"
        );
        Ok(())
    }
}
