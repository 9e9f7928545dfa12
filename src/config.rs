use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{FilterSet, SelectionMode};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub selection: SelectionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON file of places; the built-in demo venues are used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionSettings {
    #[serde(default)]
    pub default_mode: SelectionMode,
    /// Fixed seed for every draw, for demos and reproducible runs
    pub seed: Option<u64>,
    /// Filters used when a request does not supply any
    #[serde(default = "default_filters")]
    pub defaults: FilterSet,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            default_mode: SelectionMode::default(),
            seed: None,
            defaults: default_filters(),
        }
    }
}

/// 5 km radius, 4 stars and up, $ to $$$
pub fn default_filters() -> FilterSet {
    FilterSet {
        center: None,
        radius_km: Some(5.0),
        min_rating: Some(4.0),
        cuisines: vec![],
        themes: vec![],
        open_now: false,
        price_levels: vec![1, 2, 3],
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DATE_DASH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DATE_DASH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_layers(path, environment())
    }

    fn load_layers<P: AsRef<Path>>(path: P, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("DATE_DASH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
