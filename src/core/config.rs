//! Builder configuration.
//!
//! Defaults for the scaffolding request are resolved in this order:
//!
//! 1. Explicit arguments (CLI flags or the JSON arguments object)
//! 2. Environment variables (`MCP_SERVER_BUILDER_OUTPUT_DIR`, `MCP_SERVER_BUILDER_AUTHOR`)
//! 3. A TOML file at `$MCP_SERVER_BUILDER_CONFIG` or `<config_dir>/mcp-server-builder/config.toml`
//! 4. Built-in defaults (current directory, no author, tools only)
//!
//! # Example file
//!
//! ```toml
//! output_dir = "/home/me/mcp-servers"
//! author = "Jane Doe"
//! include_resources = false
//! create_subdirectory = true
//! ```

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "MCP_SERVER_BUILDER_CONFIG";
pub const OUTPUT_DIR_VAR: &str = "MCP_SERVER_BUILDER_OUTPUT_DIR";
pub const AUTHOR_VAR: &str = "MCP_SERVER_BUILDER_AUTHOR";

const CONFIG_DIR_NAME: &str = "mcp-server-builder";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Source of environment-style settings
pub trait ConfigReader {
    fn get(&self, key: &str) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvConfigReader;

impl ConfigReader for EnvConfigReader {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Mock implementation for testing with controlled values
#[cfg(test)]
#[derive(Default)]
pub struct MockConfigReader(std::collections::HashMap<String, String>);

#[cfg(test)]
impl MockConfigReader {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl ConfigReader for MockConfigReader {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved builder defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Directory projects are generated into when no output path is given
    pub output_dir: Option<PathBuf>,

    /// Author written into generated package descriptors
    pub author: Option<String>,

    /// Enable the resource capability even without analysis evidence
    pub include_resources: bool,

    /// Generate into `<output_dir>/<project-name>` instead of in place
    pub create_subdirectory: bool,
}

impl BuilderConfig {
    /// Load configuration from the default file location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(&EnvConfigReader)
    }

    /// Load configuration using a custom reader (for testing)
    pub fn load_with(reader: &dyn ConfigReader) -> Result<Self, ConfigError> {
        let mut config = match Self::config_file_path(reader) {
            Some(path) if path.is_file() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(reader);
        Ok(config)
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Reading builder config file");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the output directory: explicit value, then config, then the
    /// current directory. The result is always absolute.
    pub fn resolve_output_dir(&self, explicit: Option<&Path>) -> io::Result<PathBuf> {
        let chosen = explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone());

        let path = match chosen {
            Some(path) if path.is_absolute() => path,
            Some(path) => std::env::current_dir()?.join(path),
            None => std::env::current_dir()
                .map_err(|e| io::Error::other(format!("Failed to get current directory: {e}")))?,
        };

        debug!(path = %path.display(), "Resolved output directory");
        Ok(path)
    }

    fn config_file_path(reader: &dyn ConfigReader) -> Option<PathBuf> {
        reader
            .get(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    fn apply_overrides(&mut self, reader: &dyn ConfigReader) {
        if let Some(dir) = reader.get(OUTPUT_DIR_VAR) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(author) = reader.get(AUTHOR_VAR) {
            self.author = Some(author);
        }
    }
}
