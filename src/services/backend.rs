use crate::config::BackendSettings;
use crate::models::{
    ProductListResponse, ReviewSubmission, ScoredLabelSet, SentimentRequest, SentimentResponse,
    SummaryResponse,
};
use crate::services::boundary::{
    read_json, scored_labels, BoundaryError, ReviewBoundary, SentimentBoundary, SummaryBoundary,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Review backend API client
///
/// Handles all communication with the review backend:
/// - Analyzing free text sentiment
/// - Submitting reviews
/// - Listing summarizable products and triggering summaries
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BoundaryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Create a backend client from the `backend` config section
    pub fn from_settings(settings: &BackendSettings) -> Result<Self, BoundaryError> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SentimentBoundary for BackendClient {
    async fn analyze(&self, text: &str) -> Result<ScoredLabelSet, BoundaryError> {
        let url = self.url("/analyze-sentiment");

        tracing::debug!("Analyzing sentiment via: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&SentimentRequest { text: text.to_string() })
            .send()
            .await?;

        let body: SentimentResponse = read_json(response, "Sentiment analysis").await?;
        scored_labels(body)
    }
}

#[async_trait]
impl ReviewBoundary for BackendClient {
    async fn submit_review(&self, review: &ReviewSubmission) -> Result<ScoredLabelSet, BoundaryError> {
        let url = self.url("/submit-review");

        tracing::debug!("Submitting review for {} to: {}", review.product_name, url);

        let response = self.client.post(&url).json(review).send().await?;

        let body: SentimentResponse = read_json(response, "Review submission").await?;
        scored_labels(body)
    }
}

#[async_trait]
impl SummaryBoundary for BackendClient {
    async fn list_products(&self) -> Result<Vec<String>, BoundaryError> {
        let url = self.url("/products");

        tracing::debug!("Fetching products from: {}", url);

        let response = self.client.get(&url).send().await?;

        let body: ProductListResponse = read_json(response, "Product listing").await?;
        Ok(body.products)
    }

    async fn summarize(&self, product: &str) -> Result<String, BoundaryError> {
        let url = self.url(&format!("/summarize/{}", urlencoding::encode(product)));

        tracing::debug!("Triggering summary for {} via: {}", product, url);

        let response = self.client.post(&url).send().await?;

        let body: SummaryResponse = read_json(response, "Summarization").await?;
        Ok(body.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_client_creation() {
        let client = BackendClient::new("https://reviews.test/", Duration::from_secs(5)).unwrap();

        assert_eq!(client.base_url(), "https://reviews.test/");
        assert_eq!(client.url("/products"), "https://reviews.test/products");
    }

    #[test]
    fn test_backend_client_from_settings() {
        let settings = BackendSettings {
            base_url: "http://backend.test:8000".to_string(),
            timeout_secs: Some(2),
        };

        let client = BackendClient::from_settings(&settings).unwrap();

        assert_eq!(client.url("/summarize/widget-a"), "http://backend.test:8000/summarize/widget-a");
    }
}
