// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ScoredLabel, ScoredLabelSet, ResponseCategory, ProductSummaryState, ProductCatalog, ProductEntry, display_title};
pub use requests::{ReviewSubmission, ReviewDraft, SentimentRequest};
pub use responses::{SentimentResponse, ProductListResponse, SummaryResponse, HealthResponse, ErrorResponse};
