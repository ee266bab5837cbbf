//! Configuration types for the cooking cache

use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for cooked mesh cache paths
///
/// The mapping from a source asset path to its cache file path is a pure
/// function of this config; it is passed explicitly wherever cache files
/// are touched rather than living in process-wide state.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Directory all cache files are written into
    pub cache_root: PathBuf,
    /// File extension for cache files (without the dot)
    pub extension: String,
}

impl CacheConfig {
    /// Create a new CacheConfig rooted at the given directory
    pub fn new(cache_root: PathBuf) -> Self {
        debug!(cache_root = ?cache_root, "Creating new CacheConfig");
        Self {
            cache_root,
            extension: "cooked".to_string(),
        }
    }

    /// Derive the cache file path for a source asset path
    ///
    /// The cache file is keyed by the asset's file stem, mirroring how the
    /// asset itself is addressed on disk.
    pub fn cache_path(&self, asset_path: &Path) -> PathBuf {
        let stem = asset_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed");
        self.cache_root.join(format!("{stem}.{}", self.extension))
    }

    /// Check that the cache root directory exists
    pub fn validate(&self) -> Result<(), std::io::Error> {
        if !self.cache_root.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Cache root directory not found: {:?}", self.cache_root),
            ));
        }

        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_root: PathBuf::from("assets/cache"),
            extension: "cooked".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path_derivation() {
        let config = CacheConfig::new(PathBuf::from("assets/cache"));

        let path = config.cache_path(Path::new("assets/meshes/crate.obj"));
        assert_eq!(path, PathBuf::from("assets/cache/crate.cooked"));
    }

    #[test]
    fn test_cache_path_is_deterministic() {
        let config = CacheConfig::default();

        let a = config.cache_path(Path::new("meshes/rock.obj"));
        let b = config.cache_path(Path::new("meshes/rock.obj"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_path_without_stem() {
        let config = CacheConfig::new(PathBuf::from("cache"));

        let path = config.cache_path(Path::new(""));
        assert_eq!(path, PathBuf::from("cache/unnamed.cooked"));
    }

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.cache_root, PathBuf::from("assets/cache"));
        assert_eq!(config.extension, "cooked");
    }
}
