// Client workflow exports
pub mod submission;
pub mod summary;

pub use submission::{
    RenderedReview, ReviewError, ReviewOutput, ReviewSubmissionOrchestrator, ReviewView,
    SubmissionError, SubmissionPhase, ValidationError, SUBMISSION_FAILED_MESSAGE,
};
pub use summary::{
    ProductListing, SummarizationError, SummaryBoard, SummaryPanel, SummaryWorkflow,
    EMPTY_LISTING_MESSAGE, LISTING_FAILED_MESSAGE, SUMMARY_FAILED_MESSAGE,
};
