//! Store and logging settings.
//!
//! # Invariants
//! - `StoreConfig::default()` opens an in-memory database with seeding on.
//! - Nothing here reads the environment; front ends map their own inputs.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Where collections are persisted and how empty slots are filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file; `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    /// Fill collections with sample records when their slot is empty.
    pub seed_when_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            seed_when_empty: true,
        }
    }
}

/// Rolling-log settings passed to [`crate::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Absolute log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}
