use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::core::error::{Error, ErrorKind, Result};
use crate::search::strategy::StrategyKind;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub default_strategy: StrategyKind,

    // Bulk loading
    pub parallel_load: bool,                    // Parse lines on the rayon pool
    pub parallel_threshold: usize,              // Min lines before parallel parsing kicks in
    pub strict_load: bool,                      // Abort on the first malformed record
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("./data/people.txt"),
            default_strategy: StrategyKind::Any,
            parallel_load: true,
            parallel_threshold: 10_000,
            strict_load: false,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            Error::new(
                ErrorKind::InvalidConfig,
                format!("Cannot read config {}: {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}
