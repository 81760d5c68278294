//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section; every field has a default so an absent file is valid.

pub mod logging;
pub mod matching;
pub mod share;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::logging::LoggingConfig;
use self::matching::MatchingConfig;
use self::share::ShareConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Share link settings.
    #[serde(default)]
    pub share: ShareConfig,
    /// Face-match simulation settings.
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Demo data settings.
    #[serde(default)]
    pub demo: DemoConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Demo data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Seed the album store with the sample albums.
    #[serde(default = "default_true")]
    pub sample_data: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_data: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. When `LUMIERE_ENV` is set, a sibling file of
    /// that name (e.g. `config/staging.toml`) is overlaid next. Values are
    /// finally overlaid by environment variables prefixed with `LUMIERE__`
    /// (e.g. `LUMIERE__SHARE__BASE_URL`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let env = std::env::var("LUMIERE_ENV").ok();
        Self::load_layers(path, env.as_deref(), None)
    }

    /// Builds the layered configuration. `vars` replaces the process
    /// environment when given.
    fn load_layers(
        path: &str,
        env: Option<&str>,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(path).required(false));
        if let Some(env) = env {
            let overlay = Path::new(path).with_file_name(env);
            builder = builder
                .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("LUMIERE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        debug!(path, base_url = %config.share.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.share.base_url()?;
        if self.matching.min_confidence > 100 {
            return Err(AppError::configuration(format!(
                "matching.min_confidence must be within 0..=100, got {}",
                self.matching.min_confidence
            )));
        }
        if self.matching.max_results == 0 {
            return Err(AppError::configuration(
                "matching.max_results must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
