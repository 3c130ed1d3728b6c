use crate::error::{Result, StaffError};
use crate::validate::ValidationRules;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_AGE: u32 = 120;
const DEFAULT_MAX_FIELD_LEN: usize = 100;
const DEFAULT_CAPACITY: usize = 200;
const MAX_FIELD_LEN_LIMIT: usize = 64 * 1024;
const CAPACITY_LIMIT: usize = 1_000_000;

/// Which [`crate::store::RecordStore`] backend the session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Kept in name order on every insert, unbounded.
    #[default]
    Sorted,
    /// Arrival order with a fixed capacity, sorted before each listing.
    Array,
}

/// Configuration for staffdb, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffConfig {
    /// Highest accepted age; `null` accepts any positive age
    #[serde(default = "default_max_age")]
    pub max_age: Option<u32>,

    /// Longest name or job kept, in bytes; longer input is truncated
    #[serde(default = "default_max_field_len")]
    pub max_field_len: usize,

    #[serde(default)]
    pub storage: StorageKind,

    /// Number of records the array backend can hold
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_max_age() -> Option<u32> {
    Some(DEFAULT_MAX_AGE)
}

fn default_max_field_len() -> usize {
    DEFAULT_MAX_FIELD_LEN
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            max_age: default_max_age(),
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            storage: StorageKind::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StaffConfig {
    /// Platform config location, e.g. `~/.config/staffdb/config.json`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "staffdb", "staffdb")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(StaffError::Io)?;
        let config: StaffConfig =
            serde_json::from_str(&content).map_err(StaffError::Serialization)?;
        config.check()?;
        Ok(config)
    }

    /// Save config to the given file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StaffError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(StaffError::Serialization)?;
        fs::write(path, content).map_err(StaffError::Io)?;
        Ok(())
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            max_age: self.max_age,
            max_field_len: self.max_field_len,
        }
    }

    fn check(&self) -> Result<()> {
        if !(1..=MAX_FIELD_LEN_LIMIT).contains(&self.max_field_len) {
            return Err(StaffError::Config(format!(
                "max_field_len must be between 1 and {}",
                MAX_FIELD_LEN_LIMIT
            )));
        }
        if !(1..=CAPACITY_LIMIT).contains(&self.capacity) {
            return Err(StaffError::Config(format!(
                "capacity must be between 1 and {}",
                CAPACITY_LIMIT
            )));
        }
        if self.max_age == Some(0) {
            return Err(StaffError::Config(
                "max_age must be positive or null".to_string(),
            ));
        }
        Ok(())
    }
}
