use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// MessengerConfig
// ---------------------------------------------------------------------------

/// Binding for the external messaging/scheduling tool. The defaults match the
/// deployment this grew out of; both are overridable in `crm.yaml` so the core
/// never hardcodes a machine- or person-specific value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessengerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

fn default_program() -> String {
    "openclaw".to_string()
}

fn default_recipient() -> String {
    "Tyler".to_string()
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            recipient: default_recipient(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prospect snapshot filename, relative to the workspace root.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Per-company overlay directory, relative to the workspace root.
    #[serde(default = "default_user_data_dir")]
    pub user_data_dir: String,

    #[serde(default)]
    pub messenger: MessengerConfig,

    /// Dashboard link appended to the weekly report, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
}

fn default_data_file() -> String {
    paths::DEFAULT_DATA_FILE.to_string()
}

fn default_user_data_dir() -> String {
    paths::DEFAULT_USER_DATA_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            user_data_dir: default_user_data_dir(),
            messenger: MessengerConfig::default(),
            dashboard_url: None,
        }
    }
}

impl Config {
    /// Load `crm.yaml` from the workspace root. A missing file yields the
    /// defaults; a malformed file is a real error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
