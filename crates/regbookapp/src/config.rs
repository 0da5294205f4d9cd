//! # Configuration
//!
//! Regbook configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! 1. **Environment variables**: `REGBOOK_STORAGE_KEY`, `REGBOOK_SESSION`,
//!    `REGBOOK_SESSION_DIR`, `REGBOOK_DATA_DIR`.
//! 2. **Config file**: `regbook.toml` in the OS config directory.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `submittedData` | Key the record list is stored under |
//! | `session` | `default` | Session name, used as the session directory name |
//! | `session_dir` | unset | Explicit session directory, bypassing `session` |
//! | `data_dir` | OS data dir | Parent of the `sessions/` directory |

use crate::error::{RegbookError, Result};
use crate::records::DEFAULT_STORAGE_KEY;
use crate::session::{validate_session_name, validate_storage_key};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "regbook.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegbookConfig {
    /// Key the record list is stored under.
    #[config(env = "REGBOOK_STORAGE_KEY", default = "submittedData")]
    pub storage_key: String,

    /// Name of the active session.
    #[config(env = "REGBOOK_SESSION", default = "default")]
    pub session: String,

    /// Session directory. When absent, derived from the data dir and `session`.
    #[config(env = "REGBOOK_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,

    /// Data directory. When absent, the caller's platform default is used.
    #[config(env = "REGBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for RegbookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session: "default".to_string(),
            session_dir: None,
            data_dir: None,
        }
    }
}

impl RegbookConfig {
    /// Load from the environment and, if given, a TOML file. A missing file is
    /// not an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = RegbookConfig::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        let config: Self = builder
            .load()
            .map_err(|e| RegbookError::Config(e.to_string()))?;
        config.check_storage_key()?;
        Ok(config)
    }

    /// The storage key names a file, so it must be a plain name.
    pub fn check_storage_key(&self) -> Result<()> {
        validate_storage_key(&self.storage_key).map_err(|e| {
            RegbookError::Config(format!("invalid storage key '{}': {}", self.storage_key, e))
        })
    }

    /// Replace the session name, e.g. from a command-line flag.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Directory holding this session's stored items. `default_data_dir` is
    /// used only when neither `session_dir` nor `data_dir` is configured.
    pub fn session_path(&self, default_data_dir: &Path) -> Result<PathBuf> {
        if let Some(dir) = &self.session_dir {
            return Ok(dir.clone());
        }
        validate_session_name(&self.session)
            .map_err(|e| RegbookError::InvalidSession(format!("{}: {}", self.session, e)))?;
        let data_dir = self.data_dir.as_deref().unwrap_or(default_data_dir);
        Ok(data_dir.join("sessions").join(&self.session))
    }
}
