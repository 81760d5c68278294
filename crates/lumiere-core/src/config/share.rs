//! Share link configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppError;

/// Settings for synthesizing shareable album links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL of the application; share links are this URL with an
    /// `album` query parameter added.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Parse the configured base URL.
    pub fn base_url(&self) -> Result<Url, AppError> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid share.base_url '{}': {e}", self.base_url))
        })
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}
