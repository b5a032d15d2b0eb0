// Service exports
pub mod backend;
pub mod boundary;
pub mod nlpcloud;

pub use backend::BackendClient;
pub use boundary::{BoundaryError, SentimentBoundary, ReviewBoundary, SummaryBoundary, SentimentOnlySubmission};
pub use nlpcloud::{NlpCloudClient, DEFAULT_SENTIMENT_URL};
