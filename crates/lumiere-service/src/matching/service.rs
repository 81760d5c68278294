//! Face-match search over a granted album.

use serde::Serialize;
use tracing::info;

use lumiere_core::config::matching::MatchingConfig;
use lumiere_core::error::AppError;
use lumiere_core::result::AppResult;
use lumiere_entity::album::{Album, Photo};
use lumiere_entity::share::AccessResult;

use super::scorer::MatchScorer;

/// A photo the guest appears in, with its match confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoMatch {
    /// The matched photo.
    pub photo: Photo,
    /// Confidence percentage, 0-100.
    pub confidence: u8,
}

/// Runs the simulated selfie search.
#[derive(Debug, Clone, Default)]
pub struct FaceMatchService {
    config: MatchingConfig,
}

impl FaceMatchService {
    /// Creates a search service with the given thresholds.
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Searches the album behind a resolved reference.
    ///
    /// Only a `Granted` result exposes photos; anything else is an
    /// `Authorization` error.
    pub fn search(
        &self,
        access: &AccessResult,
        scorer: &mut dyn MatchScorer,
    ) -> AppResult<Vec<PhotoMatch>> {
        let album = access.granted().ok_or_else(|| {
            AppError::authorization(format!(
                "Album {} is not shared; photos cannot be searched",
                access.album_id()
            ))
        })?;
        Ok(self.search_album(album, scorer))
    }

    /// Scores every photo, keeps those at or above the threshold, and
    /// orders them by descending confidence (album order breaks ties).
    pub fn search_album(&self, album: &Album, scorer: &mut dyn MatchScorer) -> Vec<PhotoMatch> {
        let mut matches: Vec<PhotoMatch> = album
            .photos
            .iter()
            .map(|photo| PhotoMatch {
                photo: photo.clone(),
                confidence: scorer.score(photo).min(100),
            })
            .filter(|m| m.confidence >= self.config.min_confidence)
            .collect();

        matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        matches.truncate(self.config.max_results);

        info!(
            album_id = %album.id,
            scanned = album.photo_count(),
            matched = matches.len(),
            "Face match search complete"
        );
        matches
    }
}
