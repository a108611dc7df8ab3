//! Configuration loading
//!
//! An optional `confirmify.toml` next to where the tool is run. Everything
//! has a default; CLI flags override whatever the file says. Unknown keys are
//! collected as warnings rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfirmifyError, ConfirmifyResult};
use crate::models::RuleOrder;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "confirmify.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where to look for migratable files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("Frontend/src/pages/Forms")
}

fn default_extension() -> String {
    "tsx".to_string()
}

/// Rule table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RulesConfig {
    #[serde(default)]
    pub order: RuleOrder,
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl Config {
    /// Load configuration from a file, failing on syntax/type errors
    pub fn load(path: &Path) -> ConfirmifyResult<Self> {
        let (config, _) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> ConfirmifyResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| ConfirmifyError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| ConfigWarning {
                key: path_str,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load `confirmify.toml` from `dir` when present, defaults otherwise
    pub fn load_or_default(dir: &Path) -> ConfirmifyResult<(Self, Vec<ConfigWarning>)> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load_with_warnings(&path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }
}
