use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredLabelSet;

/// Body returned by the sentiment and review-submission boundaries
///
/// Either `scored_labels` or `error` is present. A body carrying an `error`
/// field is a failure even when the HTTP status is 2xx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scored_labels: Option<ScoredLabelSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Product listing boundary response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<String>,
}

/// Summarization trigger boundary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
