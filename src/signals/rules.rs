use crate::core::{Review, Stars};

/// A scoring signal that evaluates a single aspect of a review.
///
/// `measure` reports the raw value in the signal's own units and `max_value`
/// its upper bound; `evaluate` normalizes to 0.0-1.0.
pub trait Signal {
    fn name(&self) -> &str;
    fn weight(&self) -> f64;
    fn measure(&self, review: &Review) -> f64;
    fn max_value(&self) -> f64;

    fn evaluate(&self, review: &Review) -> f64 {
        self.measure(review) / self.max_value()
    }
}

/// Return the standard signals: star rating and sentiment, weighted equally.
pub fn default_signals() -> Vec<Box<dyn Signal + Send + Sync>> {
    vec![Box::new(StarRatingSignal), Box::new(SentimentSignal)]
}

// --- Individual Signals ---

/// Self-reported satisfaction: stars / 5.
pub struct StarRatingSignal;
impl Signal for StarRatingSignal {
    fn name(&self) -> &str { "stars" }
    fn weight(&self) -> f64 { 0.5 }
    fn measure(&self, review: &Review) -> f64 {
        f64::from(review.stars().get())
    }
    fn max_value(&self) -> f64 { f64::from(Stars::MAX) }
}

/// Inferred textual tone from the classifier label.
pub struct SentimentSignal;
impl Signal for SentimentSignal {
    fn name(&self) -> &str { "sentiment" }
    fn weight(&self) -> f64 { 0.5 }
    fn measure(&self, review: &Review) -> f64 {
        review.sentiment().weight()
    }
    fn max_value(&self) -> f64 { 1.0 }
}
