use crate::models::{ReviewSubmission, ScoredLabelSet, SentimentResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when calling an external boundary
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{context} failed with status {status}")]
    Status { context: &'static str, status: u16 },

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl BoundaryError {
    /// HTTP status of the failed call, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            BoundaryError::Status { status, .. } => Some(*status),
            BoundaryError::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Sentiment classification boundary: `{ text }` in, scored labels out
#[async_trait]
pub trait SentimentBoundary: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<ScoredLabelSet, BoundaryError>;
}

/// Review submission boundary
///
/// Persists the review and answers with the sentiment of its text.
#[async_trait]
pub trait ReviewBoundary: Send + Sync {
    async fn submit_review(&self, review: &ReviewSubmission) -> Result<ScoredLabelSet, BoundaryError>;
}

/// Product listing and summarization boundaries
#[async_trait]
pub trait SummaryBoundary: Send + Sync {
    /// Products that have reviews to summarize
    async fn list_products(&self) -> Result<Vec<String>, BoundaryError>;

    /// Generate (or regenerate) the summary of one product and return its text
    async fn summarize(&self, product: &str) -> Result<String, BoundaryError>;
}

/// Submits a review by only analyzing its text
///
/// Nothing is persisted; the review text is sent to the sentiment boundary
/// and its labels are returned as the submission result.
#[derive(Debug, Clone)]
pub struct SentimentOnlySubmission<S> {
    sentiment: S,
}

impl<S> SentimentOnlySubmission<S> {
    pub fn new(sentiment: S) -> Self {
        Self { sentiment }
    }
}

#[async_trait]
impl<S: SentimentBoundary> ReviewBoundary for SentimentOnlySubmission<S> {
    async fn submit_review(&self, review: &ReviewSubmission) -> Result<ScoredLabelSet, BoundaryError> {
        tracing::debug!("Submitting review for {} as sentiment analysis only", review.product_name);
        self.sentiment.analyze(&review.review_text).await
    }
}

/// Extract the scored labels from a sentiment-bearing body
pub fn scored_labels(body: SentimentResponse) -> Result<ScoredLabelSet, BoundaryError> {
    if let Some(error) = body.error {
        return Err(BoundaryError::ApiError(error));
    }

    body.scored_labels
        .ok_or_else(|| BoundaryError::InvalidResponse("Missing scored_labels".into()))
}

/// Check the status of a response and decode its JSON body
pub async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &'static str,
) -> Result<T, BoundaryError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
        tracing::error!("{} failed: {} - {}", context, status, body);
        return Err(BoundaryError::Status {
            context,
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| BoundaryError::InvalidResponse(format!("{}: {}", context, e)))
}
