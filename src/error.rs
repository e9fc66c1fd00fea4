use thiserror::Error;

/// Validation failures for review data entering the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("star rating {0} is outside 1..=5")]
    InvalidStarRating(i64),

    #[error("unknown sentiment label {0:?} (expected Positive, Neutral or Negative)")]
    InvalidSentiment(String),

    #[error("review text is empty")]
    EmptyReviewText,

    #[error("cannot aggregate an empty review set")]
    EmptyReviewSet,
}

/// Failures while loading a catalog of items.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("item {item_id}, review #{index}: {source}")]
    InvalidReview {
        item_id: u32,
        index: usize,
        #[source]
        source: ReviewError,
    },

    #[error("duplicate item id {0}")]
    DuplicateItemId(u32),

    #[error("item {item_id}, review #{index} has no sentiment and no classifier is available")]
    Unlabeled { item_id: u32, index: usize },
}

/// Failures talking to the external classification service.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service error: {0}")]
    Service(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("classifier returned an invalid label: {0}")]
    InvalidSentiment(#[source] ReviewError),
}
