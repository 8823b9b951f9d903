use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use neotx_core::serialize::{from_json, to_json, to_json_pretty};

/// Command line configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,

    /// Asset id coin selection is restricted to when none is given
    pub default_asset: Option<String>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_level: "warn".to_string(),
            default_asset: None,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = from_json(&content)?;
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = to_json_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Render a value as JSON according to `pretty`
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            to_json_pretty(value)?
        } else {
            to_json(value)?
        };
        Ok(json)
    }
}
