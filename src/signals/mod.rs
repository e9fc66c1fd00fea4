pub mod rules;
pub mod score;

use std::sync::OnceLock;

use crate::core::{Review, ScoredReview};
use crate::error::ReviewError;
use rules::Signal;
use score::SignalScore;

/// The signal engine applies all signals and computes a composite score.
pub struct SignalEngine {
    signals: Vec<Box<dyn Signal + Send + Sync>>,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalEngine {
    pub fn new() -> Self {
        Self {
            signals: rules::default_signals(),
        }
    }

    /// Shared engine with the standard signal set.
    pub fn standard() -> &'static SignalEngine {
        static ENGINE: OnceLock<SignalEngine> = OnceLock::new();
        ENGINE.get_or_init(SignalEngine::new)
    }

    /// Per-signal breakdown for a single review.
    pub fn breakdown(&self, review: &Review) -> Vec<SignalScore> {
        self.signals
            .iter()
            .map(|signal| SignalScore::new(signal.name(), signal.evaluate(review), signal.weight()))
            .collect()
    }

    /// Score a single review, 0-100.
    pub fn score_review(&self, review: &Review) -> f64 {
        score::compute_composite(&self.breakdown(review))
    }

    /// Composite score (0-100) for a set of reviews.
    ///
    /// Each signal's raw measure is averaged across all reviews first and
    /// normalized (e.g. mean stars / 5), then the averages are combined.
    /// With the current weighted-sum combination this equals the mean of the
    /// per-review scores. That stops holding if a signal's contribution ever
    /// becomes non-linear, so keep the average-then-combine order.
    pub fn aggregate(&self, reviews: &[Review]) -> Result<f64, ReviewError> {
        if reviews.is_empty() {
            return Err(ReviewError::EmptyReviewSet);
        }
        let count = reviews.len() as f64;

        let averaged: Vec<SignalScore> = self
            .signals
            .iter()
            .map(|signal| {
                let mean = reviews.iter().map(|r| signal.measure(r)).sum::<f64>() / count;
                SignalScore::new(signal.name(), mean / signal.max_value(), signal.weight())
            })
            .collect();

        Ok(score::compute_composite(&averaged))
    }
}

/// Score a single review, 0-100, with the standard signals.
pub fn score_review(review: &Review) -> f64 {
    SignalEngine::standard().score_review(review)
}

/// Pair a review with its score.
pub fn scored_review(review: &Review) -> ScoredReview {
    ScoredReview {
        review: review.clone(),
        score: score_review(review),
    }
}

/// Composite score (0-100) for an item's reviews, with the standard signals.
pub fn aggregate_score(reviews: &[Review]) -> Result<f64, ReviewError> {
    SignalEngine::standard().aggregate(reviews)
}
