use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{SentimentRequest, SentimentResponse, HealthResponse, ErrorResponse};
use crate::services::NlpCloudClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub nlpcloud: Arc<NlpCloudClient>,
}

/// Configure sentiment proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/analyze-sentiment", web::post().to(analyze_sentiment));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Sentiment proxy endpoint
///
/// POST /analyze-sentiment
///
/// Request body:
/// ```json
/// { "text": "string" }
/// ```
///
/// Answers with the model's JSON unchanged. When the upstream call fails the
/// answer is still `200` with `{ "error": "<message>" }`, which clients treat
/// as a failure.
async fn analyze_sentiment(
    state: web::Data<AppState>,
    req: web::Json<SentimentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze_sentiment request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::debug!("Analyzing sentiment for {} characters of text", req.text.len());

    match state.nlpcloud.analyze_raw(&req.text).await {
        Ok(json) => HttpResponse::Ok().json(json),
        Err(e) => {
            tracing::warn!("Sentiment analysis upstream failed: {}", e);
            HttpResponse::Ok().json(SentimentResponse {
                scored_labels: None,
                error: Some(e.to_string()),
            })
        }
    }
}
