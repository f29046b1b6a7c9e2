use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;
type Result<T> = anyhow::Result<T>;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "FILEHOST_CONFIG";
/// Overrides `root` from the config file.
pub const ROOT_ENV: &str = "FILEHOST_ROOT";
/// Overrides `listen` from the config file.
pub const LISTEN_ENV: &str = "FILEHOST_LISTEN";

const DEFAULT_CONFIG_PATH: &str = "filehost.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            root: default_root(),
            cors: false,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    /// Loads the config file named by `FILEHOST_CONFIG` (default `filehost.toml`)
    /// and applies environment overrides. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            warn!(path = %path, "config file not found, using defaults");
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root) = lookup(ROOT_ENV) {
            self.root = PathBuf::from(root);
        }
        if let Some(listen) = lookup(LISTEN_ENV) {
            self.listen = listen;
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
