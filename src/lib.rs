//! Review Sentiment - review submission and product summary workflows
//!
//! This library resolves the sentiment labels returned for a review into the
//! response category shown to the reviewer, drives review submission and
//! on-demand product summaries against the review backend, and hosts the
//! sentiment proxy used by the review pages.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod workflow;

// Re-export commonly used types
pub use self::core::{classify, resolve, EmptyInputError};
pub use models::{ScoredLabel, ScoredLabelSet, ResponseCategory, ProductSummaryState, ReviewDraft, ReviewSubmission};
pub use workflow::{ReviewSubmissionOrchestrator, SummaryWorkflow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let labels: ScoredLabelSet = vec![ScoredLabel::new("LABEL_1", 0.7)].into();
        let resolved = resolve(&labels).unwrap();
        assert_eq!(classify(resolved), ResponseCategory::Positive);
    }
}
