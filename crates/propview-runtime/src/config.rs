use crate::image::{
    DEFAULT_BREAKPOINTS, DEFAULT_FALLBACK_QUALITY, DEFAULT_MAX_RETRIES, DEFAULT_PLACEHOLDER_URL,
    DEFAULT_PRELOAD_QUALITY, DEFAULT_PROBE_TIMEOUT, DEFAULT_RETRY_DELAY, HostConfig,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PROPVIEW_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/propview/config.toml`
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PROPVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("propview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Image resolution settings (`[image]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub placeholder_url: String,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub preload_quality: u8,
    pub fallback_quality: u8,
    pub breakpoints: Vec<u32>,
    pub probe_timeout_ms: u64,
    pub host: HostConfig,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY.as_millis() as u64,
            preload_quality: DEFAULT_PRELOAD_QUALITY,
            fallback_quality: DEFAULT_FALLBACK_QUALITY,
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT.as_millis() as u64,
            host: HostConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub image: ImageConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn validate(&self) -> Result<()> {
        let image = &self.image;
        for (key, quality) in [
            ("preload_quality", image.preload_quality),
            ("fallback_quality", image.fallback_quality),
        ] {
            if !(1..=100).contains(&quality) {
                return Err(Error::Config(format!(
                    "image.{} must be between 1 and 100, got {}",
                    key, quality
                )));
            }
        }
        if image.breakpoints.is_empty() || image.breakpoints.contains(&0) {
            return Err(Error::Config(
                "image.breakpoints must be a non-empty list of positive widths".to_string(),
            ));
        }
        Ok(())
    }
}
