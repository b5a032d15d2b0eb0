use crate::config::Settings;
use crate::models::{display_title, ProductEntry, ProductSummaryState};
use crate::services::{BackendClient, BoundaryError, SummaryBoundary};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

/// Shown when no product has anything to summarize yet
pub const EMPTY_LISTING_MESSAGE: &str = "No summaries available yet. Submit some reviews first!";

/// Shown when the product listing could not be loaded
pub const LISTING_FAILED_MESSAGE: &str = "Could not load product list.";

/// Shown in place of a summary whose generation failed
pub const SUMMARY_FAILED_MESSAGE: &str = "Could not load summary for this product.";

/// Errors from the product listing and summarization boundaries
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("could not load product list: {0}")]
    Listing(#[source] BoundaryError),

    #[error("summarization failed for {product}: {source}")]
    Summarize {
        product: String,
        #[source]
        source: BoundaryError,
    },
}

impl SummarizationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SummarizationError::Listing(source) | SummarizationError::Summarize { source, .. } => source.status(),
        }
    }

    /// Generic text shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            SummarizationError::Listing(_) => LISTING_FAILED_MESSAGE,
            SummarizationError::Summarize { .. } => SUMMARY_FAILED_MESSAGE,
        }
    }
}

/// Products offered for summarization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductListing {
    /// Nothing to summarize yet; not an error
    Empty,
    Products(Vec<ProductEntry>),
}

impl ProductListing {
    pub fn products(&self) -> &[ProductEntry] {
        match self {
            ProductListing::Empty => &[],
            ProductListing::Products(products) => products,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ProductListing::Empty)
    }

    /// Informational text for the empty state
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProductListing::Empty => Some(EMPTY_LISTING_MESSAGE),
            ProductListing::Products(_) => None,
        }
    }
}

/// What the summary panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryPanel {
    Summary {
        product: String,
        title: String,
        text: String,
    },
    Unavailable {
        product: String,
        title: String,
    },
}

impl SummaryPanel {
    pub fn product(&self) -> &str {
        match self {
            SummaryPanel::Summary { product, .. } | SummaryPanel::Unavailable { product, .. } => product,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SummaryPanel::Summary { title, .. } | SummaryPanel::Unavailable { title, .. } => title,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SummaryPanel::Summary { text, .. } => text,
            SummaryPanel::Unavailable { .. } => SUMMARY_FAILED_MESSAGE,
        }
    }
}

/// Per-product summary state plus what the presentation layer shows
#[derive(Debug, Default)]
pub struct SummaryBoard {
    states: HashMap<String, ProductSummaryState>,
    selected: Option<String>,
    panel: Option<SummaryPanel>,
}

impl SummaryBoard {
    /// State of `product`; products never seen are `NotRequested`
    pub fn state(&self, product: &str) -> ProductSummaryState {
        self.states.get(product).cloned().unwrap_or_default()
    }

    pub fn states(&self) -> &HashMap<String, ProductSummaryState> {
        &self.states
    }

    /// Most recently requested product
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn panel(&self) -> Option<&SummaryPanel> {
        self.panel.as_ref()
    }

    fn register(&mut self, products: &[String]) {
        for product in products {
            self.states.entry(product.clone()).or_default();
        }
    }

    fn begin(&mut self, product: &str) {
        self.states.insert(product.to_string(), ProductSummaryState::Requesting);
        self.selected = Some(product.to_string());
    }

    // Whichever request completes last owns the panel.
    fn complete(&mut self, product: &str, outcome: Option<&str>) {
        let title = display_title(product);

        let (state, panel) = match outcome {
            Some(text) => (
                ProductSummaryState::Available(text.to_string()),
                SummaryPanel::Summary {
                    product: product.to_string(),
                    title,
                    text: text.to_string(),
                },
            ),
            None => (
                ProductSummaryState::Failed,
                SummaryPanel::Unavailable {
                    product: product.to_string(),
                    title,
                },
            ),
        };

        self.states.insert(product.to_string(), state);
        self.panel = Some(panel);
    }
}

/// On-demand product summary workflow
///
/// Owns the summary board. The lock is only taken between boundary calls,
/// never across one, so concurrent requests interleave freely. Repeated
/// requests for the same product are neither deduplicated nor cancelled:
/// each one calls the boundary and records its own completion.
pub struct SummaryWorkflow<B> {
    boundary: B,
    board: Mutex<SummaryBoard>,
}

impl SummaryWorkflow<BackendClient> {
    /// Workflow for the configured backend
    pub fn from_settings(settings: &Settings) -> Result<Self, BoundaryError> {
        Ok(Self::new(BackendClient::from_settings(&settings.backend)?))
    }
}

impl<B: SummaryBoundary> SummaryWorkflow<B> {
    pub fn new(boundary: B) -> Self {
        Self {
            boundary,
            board: Mutex::new(SummaryBoard::default()),
        }
    }

    /// Lend the board to the presentation layer
    pub async fn board(&self) -> MutexGuard<'_, SummaryBoard> {
        self.board.lock().await
    }

    /// Products that can be summarized
    pub async fn list_eligible_products(&self) -> Result<ProductListing, SummarizationError> {
        let products = self.boundary.list_products().await.map_err(|e| {
            tracing::error!("Error fetching products: {}", e);
            SummarizationError::Listing(e)
        })?;

        if products.is_empty() {
            tracing::info!("No products with summaries available");
            return Ok(ProductListing::Empty);
        }

        self.board.lock().await.register(&products);

        tracing::debug!("Listed {} summarizable products", products.len());

        Ok(ProductListing::Products(
            products.into_iter().map(ProductEntry::new).collect(),
        ))
    }

    /// Generate the summary of `product` and show it
    pub async fn request_summary(&self, product: &str) -> Result<String, SummarizationError> {
        self.board.lock().await.begin(product);

        tracing::debug!("Summary requested for {}", product);

        let result = self.boundary.summarize(product).await;

        let mut board = self.board.lock().await;
        match result {
            Ok(text) => {
                board.complete(product, Some(text.as_str()));
                tracing::info!("Summary available for {}", product);
                Ok(text)
            }
            Err(e) => {
                board.complete(product, None);
                tracing::error!("Error fetching summary for {}: {}", product, e);
                Err(SummarizationError::Summarize {
                    product: product.to_string(),
                    source: e,
                })
            }
        }
    }
}
