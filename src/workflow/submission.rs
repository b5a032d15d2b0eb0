use crate::config::Settings;
use crate::core::{classify, resolve, EmptyInputError};
use crate::models::{ProductCatalog, ResponseCategory, ReviewDraft, ReviewSubmission, ScoredLabel};
use crate::services::{BackendClient, BoundaryError, ReviewBoundary};
use thiserror::Error;
use validator::Validate;

/// Message rendered when a submission attempt fails at the boundary
pub const SUBMISSION_FAILED_MESSAGE: &str = "An error occurred while submitting your review.";

/// User-correctable problems with the review form
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please provide both feedback and a rating.")]
    MissingFields,

    #[error("Rating must be a whole number from 1 to 5 (got \"{0}\").")]
    InvalidRating(String),

    #[error("Please choose a product from the list (got \"{0}\").")]
    UnknownProduct(String),

    #[error("Please check the review form: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// The submission boundary failed or answered with an unusable result
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("review submission failed: {0}")]
    Boundary(#[from] BoundaryError),

    #[error("review submission returned no sentiment: {0}")]
    EmptyLabels(#[from] EmptyInputError),
}

impl SubmissionError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Boundary(e) => e.status(),
            SubmissionError::EmptyLabels(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Where one submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Classifying,
    Rendered(ResponseCategory),
    /// Validation failed; the form keeps its input
    Invalid,
    Failed,
}

/// Successful outcome shown to the reviewer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReview {
    pub category: ResponseCategory,
    pub message: String,
    /// Resolved label and score, e.g. `Sentiment: positive (Score: 0.98)`
    pub detail: String,
}

impl RenderedReview {
    fn new(category: ResponseCategory, resolved: &ScoredLabel) -> Self {
        Self {
            category,
            message: category.message().to_string(),
            detail: format!("Sentiment: {} (Score: {:.2})", resolved.label, resolved.score),
        }
    }
}

/// Output handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutput {
    Sentiment(RenderedReview),
    Invalid { message: String },
    Failed { message: String },
}

impl ReviewOutput {
    pub fn message(&self) -> &str {
        match self {
            ReviewOutput::Sentiment(rendered) => &rendered.message,
            ReviewOutput::Invalid { message } | ReviewOutput::Failed { message } => message,
        }
    }

    pub fn category(&self) -> Option<ResponseCategory> {
        match self {
            ReviewOutput::Sentiment(rendered) => Some(rendered.category),
            _ => None,
        }
    }
}

/// Presentation side of the review form
pub trait ReviewView {
    fn render(&mut self, output: &ReviewOutput);

    /// Clear the entered review text and rating
    fn reset_form(&mut self);
}

/// Drives one review submission from raw form input to a rendered response
///
/// # Phases
/// `Idle -> Validating -> Submitting -> Classifying -> Rendered`, with
/// `Invalid` reachable from validation and `Failed` from submission or
/// classification. Each call to [`submit`](Self::submit) is a new attempt.
/// Nothing is retried.
pub struct ReviewSubmissionOrchestrator<B> {
    boundary: B,
    catalog: ProductCatalog,
    phase: SubmissionPhase,
}

impl ReviewSubmissionOrchestrator<BackendClient> {
    /// Orchestrator for the configured backend and product catalog
    pub fn from_settings(settings: &Settings) -> Result<Self, BoundaryError> {
        let backend = BackendClient::from_settings(&settings.backend)?;
        Ok(Self::new(backend, settings.catalog.catalog()))
    }
}

impl<B: ReviewBoundary> ReviewSubmissionOrchestrator<B> {
    pub fn new(boundary: B, catalog: ProductCatalog) -> Self {
        Self {
            boundary,
            catalog,
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Turn raw form input into a submission, or say what the user must fix
    pub fn validate(&self, draft: &ReviewDraft) -> Result<ReviewSubmission, ValidationError> {
        let rating = draft.rating.trim();
        if draft.review_text.trim().is_empty() || rating.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let rating = rating
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidRating(rating.to_string()))?;

        if !self.catalog.contains(&draft.product_name) {
            return Err(ValidationError::UnknownProduct(draft.product_name.clone()));
        }

        let review = ReviewSubmission {
            product_name: draft.product_name.clone(),
            review_text: draft.review_text.clone(),
            rating,
        };

        match review.validate() {
            Ok(()) => Ok(review),
            Err(errors) if errors.field_errors().contains_key("rating") => {
                Err(ValidationError::InvalidRating(rating.to_string()))
            }
            Err(errors) => Err(errors.into()),
        }
    }

    /// Run one submission attempt and render its outcome to `view`
    ///
    /// The view receives exactly one output. The form is reset only when the
    /// attempt makes it all the way through classification.
    pub async fn submit<V: ReviewView + ?Sized>(
        &mut self,
        draft: &ReviewDraft,
        view: &mut V,
    ) -> Result<RenderedReview, ReviewError> {
        self.transition(SubmissionPhase::Validating);

        let review = match self.validate(draft) {
            Ok(review) => review,
            Err(e) => {
                tracing::info!("Review rejected by validation: {}", e);
                self.transition(SubmissionPhase::Invalid);
                view.render(&ReviewOutput::Invalid { message: e.to_string() });
                return Err(e.into());
            }
        };

        self.transition(SubmissionPhase::Submitting);

        let labels = match self.boundary.submit_review(&review).await {
            Ok(labels) => labels,
            Err(e) => return Err(self.fail(e.into(), view).into()),
        };

        self.transition(SubmissionPhase::Classifying);

        let resolved = match resolve(&labels) {
            Ok(resolved) => resolved,
            Err(e) => return Err(self.fail(e.into(), view).into()),
        };

        let category = classify(resolved);
        let rendered = RenderedReview::new(category, resolved);

        tracing::info!(
            "Review for {} classified as {} ({})",
            review.product_name,
            category,
            rendered.detail
        );

        self.transition(SubmissionPhase::Rendered(category));
        view.render(&ReviewOutput::Sentiment(rendered.clone()));
        view.reset_form();

        Ok(rendered)
    }

    fn fail<V: ReviewView + ?Sized>(&mut self, error: SubmissionError, view: &mut V) -> SubmissionError {
        tracing::error!("Review submission failed (status: {:?}): {}", error.status(), error);
        self.transition(SubmissionPhase::Failed);
        view.render(&ReviewOutput::Failed {
            message: SUBMISSION_FAILED_MESSAGE.to_string(),
        });
        error
    }

    fn transition(&mut self, next: SubmissionPhase) {
        tracing::debug!("Submission phase: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
