// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::tags::TagLimits;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment override for the API endpoint, taking precedence over the
/// configured `api.base_url`.
pub const API_URL_ENV: &str = "COPYDESK_API_URL";

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "Copydesk".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8787".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TagInputConfig {
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_suggestion_debounce_ms")]
    pub suggestion_debounce_ms: u64,
    #[serde(default = "default_suggestion_min_chars")]
    pub suggestion_min_chars: usize,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for TagInputConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            min_length: default_min_length(),
            max_length: default_max_length(),
            suggestion_debounce_ms: default_suggestion_debounce_ms(),
            suggestion_min_chars: default_suggestion_min_chars(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl TagInputConfig {
    pub fn limits(&self) -> TagLimits {
        TagLimits {
            max_tags: self.max_tags,
            min_chars: self.min_length,
            max_chars: self.max_length,
        }
    }
}

fn default_max_tags() -> usize {
    10
}

fn default_min_length() -> usize {
    2
}

fn default_max_length() -> usize {
    30
}

fn default_suggestion_debounce_ms() -> u64 {
    300
}

fn default_suggestion_min_chars() -> usize {
    2
}

fn default_suggestion_limit() -> usize {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tags: TagInputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration that passed validation; the only form handed to the rest
/// of the application.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub tags: TagInputConfig,
    pub logging: LoggingConfig,
}

const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Read `config.yaml` from the runtime root. A missing file yields the
    /// defaults; a present but malformed file is an error.
    pub fn load(root: &Path) -> Result<Config, ConfigError> {
        let config_file = root.join(CONFIG_FILE_NAME);
        if !config_file.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_file).map_err(|err| {
            ConfigError::LoadError(format!(
                "Failed to read {}: {}",
                config_file.display(),
                err
            ))
        })?;
        serde_yaml::from_str(&content).map_err(|err| {
            ConfigError::LoadError(format!(
                "Failed to parse {}: {}",
                config_file.display(),
                err
            ))
        })
    }

    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let mut config = Self::load(root)?;
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api.base_url = url;
        }
        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if let Err(err) = reqwest::Url::parse(&self.api.base_url) {
            return Err(ConfigError::ValidationError(format!(
                "api.base_url is not a valid URL: {}",
                err
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.tags.min_length == 0 {
            return Err(ConfigError::ValidationError(
                "tags.min_length must be at least 1".to_string(),
            ));
        }
        if self.tags.min_length > self.tags.max_length {
            return Err(ConfigError::ValidationError(
                "tags.min_length cannot exceed tags.max_length".to_string(),
            ));
        }
        if self.tags.max_tags == 0 {
            return Err(ConfigError::ValidationError(
                "tags.max_tags must be at least 1".to_string(),
            ));
        }
        if !KNOWN_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                KNOWN_LOG_LEVELS.join(", ")
            )));
        }
        Ok(ValidatedConfig {
            app: self.app,
            api: self.api,
            tags: self.tags,
            logging: self.logging,
        })
    }
}
