//! Viewer configuration stored in `dino-facts.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dino-facts.toml";

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "DINO_FACTS_CONFIG";

/// Viewer configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Dataset opened at startup. The embedded sample is used when unset.
    pub data_path: Option<PathBuf>,

    pub query: QueryDefaults,
}

/// Initial values of the query inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryDefaults {
    pub mya: f64,
    /// Field extracted by the alive-at query; `None` means ids.
    pub key: Option<String>,
    pub dinosaur_id: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            mya: 150.0,
            key: None,
            dinosaur_id: String::new(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.query.mya.is_finite() || self.query.mya < 0.0 {
            return Err(anyhow!(
                "query.mya must be a non-negative number, got {}",
                self.query.mya
            ));
        }
        Ok(())
    }
}

/// Where to look for the config: `$DINO_FACTS_CONFIG`, else `./dino-facts.toml`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ViewerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    if !path.exists() {
        return Ok(ViewerConfig::default());
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ViewerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
