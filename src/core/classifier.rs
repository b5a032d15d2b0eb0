use crate::models::{ResponseCategory, ScoredLabel};

/// Prefix the sentiment service uses for classes without a sentiment name
pub const GENERIC_LABEL_PREFIX: &str = "LABEL_";

/// Score that separates positive from negative generic labels
pub const GENERIC_LABEL_THRESHOLD: f64 = 0.5;

/// What kind of label the classifier produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind<'a> {
    Positive,
    Negative,
    /// Un-named class such as `LABEL_1`; needs the score to be interpreted
    Generic(&'a str),
    /// Any other named class
    Named(&'a str),
}

impl<'a> LabelKind<'a> {
    pub fn of(label: &'a str) -> Self {
        match label {
            "positive" => LabelKind::Positive,
            "negative" => LabelKind::Negative,
            generic if generic.starts_with(GENERIC_LABEL_PREFIX) => LabelKind::Generic(generic),
            named => LabelKind::Named(named),
        }
    }
}

/// Map a resolved label to the category shown to the reviewer
///
/// Rules, first match wins:
/// 1. `positive` is positive and `negative` is negative, whatever the score
/// 2. a generic label above the threshold is positive
/// 3. a generic label below the threshold is negative
/// 4. anything else is neutral, including a generic label scoring exactly
///    the threshold
pub fn classify(resolved: &ScoredLabel) -> ResponseCategory {
    let score = resolved.score;

    match LabelKind::of(&resolved.label) {
        LabelKind::Positive => ResponseCategory::Positive,
        LabelKind::Negative => ResponseCategory::Negative,
        LabelKind::Generic(_) if score > GENERIC_LABEL_THRESHOLD => ResponseCategory::Positive,
        LabelKind::Generic(_) if score < GENERIC_LABEL_THRESHOLD => ResponseCategory::Negative,
        LabelKind::Generic(_) | LabelKind::Named(_) => ResponseCategory::Neutral,
    }
}
