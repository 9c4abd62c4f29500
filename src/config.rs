use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppSection,
    pub logging: LoggingSection,
    pub artifacts: ArtifactsSection,
    #[serde(default)]
    pub server: Option<ServerSection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactsSection {
    /// Path to the fitted scaler artifact (JSON).
    pub scaler_path: PathBuf,
    /// Path to the fitted regression model artifact (JSON).
    pub model_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSection {
    /// Port to listen on (default: 8080)
    pub port: Option<u16>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub fn load_default() -> Result<Config, ConfigError> {
    load_from_path(DEFAULT_CONFIG_PATH)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

impl Config {
    /// Returns the scaler and model artifact paths. Both are required;
    /// an empty path is a configuration error, not a fallback.
    pub fn artifact_paths(&self) -> Result<(&Path, &Path), ConfigError> {
        let scaler = non_empty_path(&self.artifacts.scaler_path, "artifacts.scaler_path")?;
        let model = non_empty_path(&self.artifacts.model_path, "artifacts.model_path")?;
        Ok((scaler, model))
    }

    /// Returns the server port (default: 8080)
    pub fn server_port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }
}

fn non_empty_path<'a>(path: &'a Path, key: &str) -> Result<&'a Path, ConfigError> {
    if path.as_os_str().is_empty() {
        Err(ConfigError::Invalid(format!("{key} must not be empty")))
    } else {
        Ok(path)
    }
}
