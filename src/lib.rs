//! Review aggregation and product ranking.
//!
//! Reviews carry a star rating and a sentiment label. Each review gets a
//! 0-100 score, each item a 0-100 composite, and items are ranked by it.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod core;
pub mod error;
pub mod ranking;
pub mod signals;
pub mod ui;

pub use crate::core::{Item, RankedItem, Ranking, Review, ScoredReview, Sentiment, Stars};
pub use crate::error::{CatalogError, ClassifierError, ReviewError};
pub use crate::ranking::rank;
pub use crate::signals::{aggregate_score, score_review};
