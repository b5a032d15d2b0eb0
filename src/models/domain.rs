use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A sentiment candidate returned by the classifier, paired with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f64,
}

impl ScoredLabel {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Ordered scored labels for one analyzed text
///
/// The classifier contract guarantees at least one element. Emptiness is not
/// rejected at deserialization time; it is detected and reported by the
/// resolver so that a contract breach upstream is never silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoredLabelSet(Vec<ScoredLabel>);

impl ScoredLabelSet {
    pub fn new(labels: Vec<ScoredLabel>) -> Self {
        Self(labels)
    }

    pub fn as_slice(&self) -> &[ScoredLabel] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredLabel> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ScoredLabel>> for ScoredLabelSet {
    fn from(labels: Vec<ScoredLabel>) -> Self {
        Self(labels)
    }
}

impl FromIterator<ScoredLabel> for ScoredLabelSet {
    fn from_iter<I: IntoIterator<Item = ScoredLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// User-facing response category derived from a resolved label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Positive,
    Negative,
    Neutral,
}

impl ResponseCategory {
    /// Lowercase class name handed to the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Positive => "positive",
            ResponseCategory::Negative => "negative",
            ResponseCategory::Neutral => "neutral",
        }
    }

    /// Message shown to the reviewer for this category
    pub fn message(&self) -> &'static str {
        match self {
            ResponseCategory::Positive => {
                "Thank you for your positive feedback! We're glad you enjoyed it."
            }
            ResponseCategory::Negative => {
                "We're sorry to hear about your experience. We'll use your feedback to improve."
            }
            ResponseCategory::Neutral => "Thank you for your feedback.",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary lifecycle of one product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProductSummaryState {
    #[default]
    NotRequested,
    Requesting,
    Available(String),
    Failed,
}

impl ProductSummaryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Available(_) | Self::Failed)
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Available(text) => Some(text),
            _ => None,
        }
    }
}

/// Closed set of product identifiers a review may target
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashSet<String>,
}

impl ProductCatalog {
    pub fn new<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, product: &str) -> bool {
        self.products.contains(product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// A product as shown in the summary picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: String,
    pub title: String,
}

impl ProductEntry {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let title = display_title(&id);
        Self { id, title }
    }
}

/// Human-readable title for a product identifier
///
/// Dashes become spaces and every character that starts a word is
/// upper-cased, so `widget-a` renders as `Widget A`. Word characters are
/// ASCII letters, digits and `_`; any other character ends a word.
pub fn display_title(product: &str) -> String {
    let mut title = String::with_capacity(product.len());
    let mut in_word = false;

    for c in product.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        in_word = is_word;
    }

    title
}
