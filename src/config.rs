//! File-based generator settings.

use crate::error::TilebgError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_SEED: u64 = 1;

/// Settings for one generator run, loadable from JSON:
///
/// ```json
/// { "pattern": "kochflakes3", "seed": 7, "output": "koch.svg" }
/// ```
///
/// Every field is optional; command line flags override what a file sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    pub pattern: Option<String>,
    pub seed: u64,
    pub output: Option<PathBuf>,
    pub stylesheet: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            seed: DEFAULT_SEED,
            output: None,
            stylesheet: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(source: &str) -> Result<Self, TilebgError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TilebgError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            TilebgError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }
}
