//! Configuration file handling.
//!
//! The config lives at `<config dir>/vbscout/config.toml` unless
//! `VBSCOUT_CONFIG` points somewhere else. Every field is optional; missing
//! fields take their defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::notation::codes::ServeType;
use crate::notation::Syntax;
use crate::preprocess::Keybindings;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "VBSCOUT_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Keybinding '{key}' = '{value}' must map one character to one character")]
    InvalidKeybinding { key: String, value: String },

    #[error("Notation characters must be distinct and not a space or '<' (separator '{separator}', action '{action}', return '{ret}')")]
    InvalidNotation {
        separator: char,
        action: char,
        ret: char,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    /// Splits the lineup header from the action tokens.
    pub separator: char,
    pub action_marker: char,
    pub return_marker: char,
    /// Serve type for servers missing from the `>>` table.
    pub default_serve_type: ServeType,
}

impl Default for NotationConfig {
    fn default() -> Self {
        let syntax = Syntax::default();
        Self {
            separator: syntax.separator,
            action_marker: syntax.action_marker,
            return_marker: syntax.return_marker,
            default_serve_type: ServeType::Float,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Abort on the first rally that fails to decode.
    pub strict: bool,
    /// Decode rallies on all cores.
    pub parallel: bool,
    /// Drop partial events of rallies that fail to decode.
    pub roll_back_failed_rallies: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: false,
            roll_back_failed_rallies: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for JSON reports, relative to the working directory.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("analysis"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notation: NotationConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    /// Display key to notation character, used for lines starting with `!`.
    pub keybindings: BTreeMap<String, String>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("vbscout").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file, or the defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Notation characters, checked for clashes.
    pub fn syntax(&self) -> Result<Syntax, ConfigError> {
        let n = &self.notation;
        let chars = [n.separator, n.action_marker, n.return_marker];
        let clash = chars.iter().any(|c| *c == ' ' || *c == '<')
            || n.separator == n.action_marker
            || n.separator == n.return_marker
            || n.action_marker == n.return_marker;
        if clash {
            return Err(ConfigError::InvalidNotation {
                separator: n.separator,
                action: n.action_marker,
                ret: n.return_marker,
            });
        }
        Ok(Syntax {
            separator: n.separator,
            action_marker: n.action_marker,
            return_marker: n.return_marker,
        })
    }

    pub fn analysis_options(&self) -> Result<AnalysisOptions, ConfigError> {
        Ok(AnalysisOptions {
            syntax: self.syntax()?,
            default_serve_type: self.notation.default_serve_type,
            strict: self.analysis.strict,
            parallel: self.analysis.parallel,
            roll_back_failed_rallies: self.analysis.roll_back_failed_rallies,
        })
    }

    /// Keybindings as characters.
    pub fn keybindings(&self) -> Result<Keybindings, ConfigError> {
        self.keybindings
            .iter()
            .map(|(key, value)| match (single_char(key), single_char(value)) {
                (Some(k), Some(v)) => Ok((k, v)),
                _ => Err(ConfigError::InvalidKeybinding {
                    key: key.clone(),
                    value: value.clone(),
                }),
            })
            .collect()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
