//! Confidence scorers for the simulated face match.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::rngs::ThreadRng;
use rand::Rng;

use lumiere_core::types::PhotoId;
use lumiere_entity::album::Photo;

/// Produces a match confidence (0-100) for a photo.
pub trait MatchScorer {
    /// Score one photo.
    fn score(&mut self, photo: &Photo) -> u8;
}

impl<F> MatchScorer for F
where
    F: FnMut(&Photo) -> u8,
{
    fn score(&mut self, photo: &Photo) -> u8 {
        self(photo)
    }
}

/// Draws confidences uniformly from a range.
#[derive(Debug, Clone)]
pub struct RandomScorer<R = ThreadRng> {
    rng: R,
    range: RangeInclusive<u8>,
}

impl RandomScorer<ThreadRng> {
    /// Scores in `60..=99` from the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomScorer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomScorer<R> {
    /// Scores in `60..=99` from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, range: 60..=99 }
    }

    /// Restrict scores to `range`, clamped to at most 100.
    pub fn with_range(mut self, range: RangeInclusive<u8>) -> Self {
        let (start, end) = range.into_inner();
        let end = end.min(100);
        self.range = start.min(end)..=end;
        self
    }
}

impl<R: Rng> MatchScorer for RandomScorer<R> {
    fn score(&mut self, _photo: &Photo) -> u8 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Returns preset confidences per photo, and a default for the rest.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<PhotoId, u8>,
    default: u8,
}

impl FixedScorer {
    /// Every photo scores `default`.
    pub fn new(default: u8) -> Self {
        Self {
            scores: HashMap::new(),
            default,
        }
    }

    /// Preset the confidence for one photo.
    pub fn with_score(mut self, photo: PhotoId, confidence: u8) -> Self {
        self.scores.insert(photo, confidence);
        self
    }
}

impl MatchScorer for FixedScorer {
    fn score(&mut self, photo: &Photo) -> u8 {
        self.scores.get(&photo.id).copied().unwrap_or(self.default)
    }
}
