use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review sent to the review-submission boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReviewSubmission {
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub review_text: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

/// Raw form input for one review, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub product_name: String,
    pub review_text: String,
    /// Rating exactly as entered; empty means missing
    pub rating: String,
}

impl ReviewDraft {
    pub fn new(
        product_name: impl Into<String>,
        review_text: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            review_text: review_text.into(),
            rating: rating.into(),
        }
    }
}

/// Request to the sentiment classification boundary
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SentimentRequest {
    #[validate(length(min = 1))]
    pub text: String,
}
