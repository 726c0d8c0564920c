//! Loader configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::anim::{AnimationClock, DEFAULT_CYCLE_MILLIS};
use crate::util::{Error, Result};

/// Where assets live and how they are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory that relative asset names are resolved against.
    pub asset_dir: PathBuf,
    /// Animation cycle length in milliseconds.
    pub cycle_millis: u64,
    /// Memory-map asset files when the `mmap` feature is enabled.
    pub use_mmap: bool,
    /// Default `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            cycle_millis: DEFAULT_CYCLE_MILLIS,
            use_mmap: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AssetConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            let err = if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            };
            err.in_file(path)
        })?;
        Self::from_json_str(&text).map_err(|e| e.in_file(path))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(?config, "loaded asset config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Path of an asset. Absolute names are returned unchanged.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.asset_dir.join(name)
    }

    /// Clock for the configured cycle length.
    pub fn clock(&self) -> Result<AnimationClock> {
        AnimationClock::new(self.cycle_millis)
    }

    /// Whether loads should memory-map, given the compiled features.
    #[inline]
    pub fn mmap_enabled(&self) -> bool {
        self.use_mmap && cfg!(feature = "mmap")
    }
}
