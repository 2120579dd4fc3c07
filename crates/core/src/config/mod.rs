//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (LINKSEEKER_*)
//! 2. TOML config file (if LINKSEEKER_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Browser launch flags passed to the headless engine.
///
/// Nested env keys use a double underscore, e.g.
/// `LINKSEEKER_BROWSER__NO_SANDBOX=false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run the browser without a visible window.
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Suppress informational bars in the browser UI.
    #[serde(default = "default_true")]
    pub disable_infobars: bool,

    /// Disable installed browser extensions.
    #[serde(default = "default_true")]
    pub disable_extensions: bool,

    /// Disable the sandbox (needed in some container environments).
    #[serde(default = "default_true")]
    pub no_sandbox: bool,

    /// Disable the application cache.
    #[serde(default = "default_true")]
    pub disable_application_cache: bool,

    /// Disable GPU acceleration.
    #[serde(default = "default_true")]
    pub disable_gpu: bool,

    /// Use /tmp instead of /dev/shm for shared memory.
    #[serde(default = "default_true")]
    pub disable_dev_shm_usage: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            disable_infobars: true,
            disable_extensions: true,
            no_sandbox: true,
            disable_application_cache: true,
            disable_gpu: true,
            disable_dev_shm_usage: true,
        }
    }
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (LINKSEEKER_*)
/// 2. TOML config file (if LINKSEEKER_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path the extracted links are written to.
    ///
    /// Set via LINKSEEKER_OUTPUT_PATH environment variable.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Render timeout in milliseconds.
    ///
    /// Set via LINKSEEKER_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Post-navigation settle delay for pending JavaScript, in milliseconds.
    /// Counted against the render timeout.
    ///
    /// Set via LINKSEEKER_SETTLE_MS environment variable.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Browser launch flags.
    #[serde(default)]
    pub browser: BrowserConfig,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("extracted_links.txt")
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_settle_ms() -> u64 {
    2_000
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            timeout_ms: default_timeout_ms(),
            settle_ms: default_settle_ms(),
            browser: BrowserConfig::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `LINKSEEKER_`
    /// 2. TOML file from `LINKSEEKER_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("LINKSEEKER_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("LINKSEEKER_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
