/// Application configuration
///
/// Sources, lowest priority first:
/// - built-in defaults (a local image service on port 8080)
/// - `config.toml` in the user's config directory:
///   - Linux: ~/.config/image-uploader/config.toml
///   - macOS: ~/Library/Application Support/image-uploader/config.toml
///   - Windows: %APPDATA%\image-uploader\config.toml
/// - the `IMAGE_UPLOADER_SERVICE_URL` environment variable
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
pub const SERVICE_URL_ENV: &str = "IMAGE_UPLOADER_SERVICE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the image service
    pub service_url: Url,
}

/// On-disk shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    service_url: Option<String>,
}

impl Config {
    /// Load the config from the default file location and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let env_url = std::env::var(SERVICE_URL_ENV).ok();
        match Self::config_path() {
            Some(path) => Self::load_from(&path, env_url),
            None => Self::resolve(None, env_url),
        }
    }

    /// Load the config from an explicit file; a missing file is not an error
    pub fn load_from(path: &Path, env_url: Option<String>) -> Result<Self, ConfigError> {
        let file = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let parsed: FileConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            info!("📁 Loaded config from {}", path.display());
            Some(parsed)
        } else {
            debug!("No config file at {}, using defaults", path.display());
            None
        };

        Self::resolve(file, env_url)
    }

    fn resolve(file: Option<FileConfig>, env_url: Option<String>) -> Result<Self, ConfigError> {
        let raw = env_url
            .filter(|value| !value.trim().is_empty())
            .or_else(|| file.and_then(|f| f.service_url))
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let service_url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: raw.clone(),
            source,
        })?;

        Ok(Config { service_url })
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("image-uploader");
        path.push("config.toml");
        Some(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_url: Url::parse(DEFAULT_SERVICE_URL).expect("default service url is valid"),
        }
    }
}
