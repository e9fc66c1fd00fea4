pub mod pipeline;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Tone label attached to a review by the classification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Numeric weight in [0, 1] used by the scorer.
    pub fn weight(self) -> f64 {
        match self {
            Sentiment::Positive => 1.0,
            Sentiment::Neutral => 0.5,
            Sentiment::Negative => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl FromStr for Sentiment {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Neutral" => Ok(Sentiment::Neutral),
            "Negative" => Ok(Sentiment::Negative),
            other => Err(ReviewError::InvalidSentiment(other.to_string())),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Stars {
    type Error = ReviewError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=i64::from(Self::MAX)).contains(&value) {
            Ok(Stars(value as u8))
        } else {
            Err(ReviewError::InvalidStarRating(value))
        }
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> u8 {
        stars.0
    }
}

/// A single validated user review. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    text: String,
    stars: Stars,
    sentiment: Sentiment,
}

impl Review {
    pub fn new(text: impl Into<String>, stars: Stars, sentiment: Sentiment) -> Result<Self, ReviewError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ReviewError::EmptyReviewText);
        }
        Ok(Self {
            text,
            stars,
            sentiment,
        })
    }

    /// Build a review from untyped input (e.g. JSON or a form), validating every field.
    pub fn parse(text: impl Into<String>, stars: i64, sentiment: &str) -> Result<Self, ReviewError> {
        let stars = Stars::try_from(stars)?;
        let sentiment = sentiment.parse()?;
        Self::new(text, stars, sentiment)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stars(&self) -> Stars {
        self.stars
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

/// A product and its reviews, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub reviews: Vec<Review>,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, reviews: Vec<Review>) -> Self {
        Self {
            id,
            name: name.into(),
            reviews,
        }
    }
}

/// A review paired with its 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReview {
    pub review: Review,
    pub score: f64,
}

/// An item paired with its 0-100 composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub item: Item,
    pub composite_score: f64,
}

/// Result of ranking a catalog.
///
/// `ranked` is ordered by descending composite score; `unscored` holds items
/// with no reviews, in input order. Together they contain every input item once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    pub ranked: Vec<RankedItem>,
    pub unscored: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_weights() {
        assert_eq!(Sentiment::Positive.weight(), 1.0);
        assert_eq!(Sentiment::Neutral.weight(), 0.5);
        assert_eq!(Sentiment::Negative.weight(), 0.0);
    }

    #[test]
    fn sentiment_parse_exact_labels() {
        assert_eq!("Positive".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!("Neutral".parse::<Sentiment>(), Ok(Sentiment::Neutral));
        assert_eq!("Negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
    }

    #[test]
    fn sentiment_parse_rejects_unknown() {
        assert_eq!(
            "positive".parse::<Sentiment>(),
            Err(ReviewError::InvalidSentiment("positive".into()))
        );
        assert!("Mixed".parse::<Sentiment>().is_err());
        assert!("".parse::<Sentiment>().is_err());
    }

    #[test]
    fn sentiment_display_round_trips() {
        for s in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
            assert_eq!(s.to_string().parse::<Sentiment>(), Ok(s));
        }
    }

    #[test]
    fn stars_bounds() {
        assert_eq!(Stars::try_from(0_i64), Err(ReviewError::InvalidStarRating(0)));
        assert_eq!(Stars::try_from(6_i64), Err(ReviewError::InvalidStarRating(6)));
        assert_eq!(Stars::try_from(-1_i64), Err(ReviewError::InvalidStarRating(-1)));
        for n in 1..=5_i64 {
            assert_eq!(Stars::try_from(n).map(Stars::get), Ok(n as u8));
        }
    }

    #[test]
    fn stars_deserialize_validates() {
        let ok: Stars = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<Stars>("9").is_err());
    }

    #[test]
    fn review_parse_valid() {
        let review = Review::parse("Loud and clear sound!", 5, "Positive").unwrap();
        assert_eq!(review.text(), "Loud and clear sound!");
        assert_eq!(review.stars().get(), 5);
        assert_eq!(review.sentiment(), Sentiment::Positive);
    }

    #[test]
    fn review_parse_rejects_bad_input() {
        assert_eq!(
            Review::parse("ok", 0, "Positive"),
            Err(ReviewError::InvalidStarRating(0))
        );
        assert_eq!(
            Review::parse("ok", 3, "Great"),
            Err(ReviewError::InvalidSentiment("Great".into()))
        );
        assert_eq!(
            Review::parse("   ", 3, "Neutral"),
            Err(ReviewError::EmptyReviewText)
        );
    }
}
