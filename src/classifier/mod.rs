use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::core::Sentiment;
use crate::error::ClassifierError;

/// Message shown when the service cannot be reached or answers garbage.
pub const FETCH_FAILED: &str = "Failed to fetch response.";

/// A request to the classification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationRequest {
    Sentiment { text: String },
    Category { title: String, description: String },
}

impl ClassificationRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ClassificationRequest::Sentiment { .. } => "/predict/sentiment",
            ClassificationRequest::Category { .. } => "/predict/category",
        }
    }

    pub fn body(&self) -> Value {
        match self {
            ClassificationRequest::Sentiment { text } => json!({ "text": text }),
            ClassificationRequest::Category { title, description } => json!({
                "product_title": title,
                "product_description": description,
            }),
        }
    }
}

/// Wire shape. The service distinguishes responses only by which fields are present.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireResponse {
    Error { error: String },
    Category { category: String, subcategory: String },
    Sentiment { sentiment: String },
}

/// A response from the classification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Classification {
    Sentiment { sentiment: Sentiment },
    Category { category: String, subcategory: String },
    Error { error: String },
}

impl Classification {
    /// Collapse a failed call into the opaque error shown to the user.
    pub fn from_result(result: Result<Classification, ClassifierError>) -> Self {
        result.unwrap_or_else(|e| {
            debug!("Classification failed: {e}");
            Classification::Error {
                error: FETCH_FAILED.to_string(),
            }
        })
    }

    /// Interpret a JSON response body.
    pub fn from_json(value: Value) -> Result<Self, ClassifierError> {
        let wire: WireResponse = serde_json::from_value(value.clone())
            .map_err(|_| ClassifierError::UnexpectedResponse(value.to_string()))?;
        Ok(match wire {
            WireResponse::Error { error } => Classification::Error { error },
            WireResponse::Category { category, subcategory } => {
                Classification::Category { category, subcategory }
            }
            WireResponse::Sentiment { sentiment } => Classification::Sentiment {
                sentiment: sentiment.parse().map_err(ClassifierError::InvalidSentiment)?,
            },
        })
    }
}

/// HTTP client for the sentiment/category classification service.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    base_url: String,
    client: Client,
}

impl ClassifierClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    pub fn url(&self, request: &ClassificationRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint())
    }

    pub async fn call(&self, request: &ClassificationRequest) -> Result<Classification, ClassifierError> {
        let resp = self
            .client
            .post(self.url(request))
            .header("Content-Type", "application/json")
            .json(&request.body())
            .send()
            .await?;

        let json: Value = resp.json().await?;
        Classification::from_json(json)
    }

    /// Ask the service for a review's sentiment.
    pub async fn classify_sentiment(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        let request = ClassificationRequest::Sentiment {
            text: text.to_string(),
        };
        match self.call(&request).await? {
            Classification::Sentiment { sentiment } => Ok(sentiment),
            Classification::Error { error } => Err(ClassifierError::Service(error)),
            other => Err(ClassifierError::UnexpectedResponse(format!("{other:?}"))),
        }
    }
}
