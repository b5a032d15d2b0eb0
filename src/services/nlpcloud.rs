use crate::config::SentimentSettings;
use crate::models::{ScoredLabelSet, SentimentRequest, SentimentResponse};
use crate::services::boundary::{read_json, scored_labels, BoundaryError, SentimentBoundary};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Hosted sentiment model used when no URL is configured
pub const DEFAULT_SENTIMENT_URL: &str =
    "https://api.nlpcloud.io/v1/distilbert-base-uncased-finetuned-sst-2-english/sentiment";

/// NLP Cloud sentiment API client
pub struct NlpCloudClient {
    api_url: String,
    api_key: String,
    client: Client,
}

impl NlpCloudClient {
    /// Create a new NLP Cloud client
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BoundaryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a client from the `sentiment` config section
    pub fn from_settings(settings: &SentimentSettings) -> Result<Self, BoundaryError> {
        Self::new(settings.api_url.clone(), settings.api_key.clone(), settings.timeout())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run the model on `text` and return its JSON body untouched
    pub async fn analyze_raw(&self, text: &str) -> Result<Value, BoundaryError> {
        tracing::debug!("Requesting sentiment from: {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&SentimentRequest { text: text.to_string() })
            .send()
            .await?;

        read_json(response, "NLP Cloud sentiment").await
    }
}

#[async_trait]
impl SentimentBoundary for NlpCloudClient {
    async fn analyze(&self, text: &str) -> Result<ScoredLabelSet, BoundaryError> {
        let json = self.analyze_raw(text).await?;

        let body: SentimentResponse = serde_json::from_value(json)
            .map_err(|e| BoundaryError::InvalidResponse(format!("Failed to parse sentiment: {}", e)))?;

        scored_labels(body)
    }
}
