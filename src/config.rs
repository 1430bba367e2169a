use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::DEFAULT_DURATION_SECS;

/// Session configuration, chosen by the host before a session is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Total countdown budget in seconds.
    pub duration_secs: u32,
    /// Finish the session the moment the whole paragraph has been typed.
    /// When disabled, typing past the end is tolerated (see `TypedBuffer`).
    pub finish_on_paragraph_complete: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            finish_on_paragraph_complete: true,
        }
    }
}

/// Where a host keeps the user's preferred session settings between runs.
/// The engine itself never reads or writes the store.
pub trait ConfigStore {
    fn load(&self) -> SessionConfig;
    fn save(&self, cfg: &SessionConfig) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "typerate") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("typerate_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> SessionConfig {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<SessionConfig>(&bytes) {
                return cfg;
            }
        }
        SessionConfig::default()
    }

    fn save(&self, cfg: &SessionConfig) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
