//! Face-match simulation configuration.

use serde::{Deserialize, Serialize};

/// Tuning for the simulated selfie search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum confidence (0-100) for a photo to count as a match.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u8,
    /// Maximum number of matches returned.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_confidence() -> u8 {
    75
}

fn default_max_results() -> usize {
    50
}
