use serde::Deserialize;
use std::path::{Path, PathBuf};
use stringmanip_engine::{CaseStyle, SortStrategy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User defaults for commands invoked without an explicit strategy or style.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub sort_strategy: Option<SortStrategy>,
    pub case_style: Option<CaseStyle>,
}

impl Config {
    pub const DEFAULT_SORT_STRATEGY: SortStrategy = SortStrategy::CaseSensitiveAZ;
    pub const DEFAULT_CASE_STYLE: CaseStyle = CaseStyle::Dot;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::info!("Loaded config from {}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/stringmanip");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn sort_strategy(&self) -> SortStrategy {
        self.sort_strategy.unwrap_or(Self::DEFAULT_SORT_STRATEGY)
    }

    pub fn case_style(&self) -> CaseStyle {
        self.case_style.unwrap_or(Self::DEFAULT_CASE_STYLE)
    }
}
