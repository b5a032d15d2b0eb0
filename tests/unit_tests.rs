// Unit tests for Review Sentiment

use review_sentiment::core::{classify, resolve, EmptyInputError, LabelKind};
use review_sentiment::models::{display_title, ProductEntry, ResponseCategory, ScoredLabel, ScoredLabelSet};
use tokio_test::{assert_err, assert_ok};

fn labels(pairs: &[(&str, f64)]) -> ScoredLabelSet {
    pairs
        .iter()
        .map(|(label, score)| ScoredLabel::new(*label, *score))
        .collect()
}

#[test]
fn test_resolve_picks_maximum() {
    let set = labels(&[("NEGATIVE", 0.02), ("POSITIVE", 0.98)]);
    let best = assert_ok!(resolve(&set));
    assert_eq!(best.label, "POSITIVE");
}

#[test]
fn test_resolve_max_property() {
    // Deterministic spread of scores with repeated maxima
    let scores = [0.1, 0.7, 0.3, 0.7, 0.2, 0.65, 0.7];
    let set: ScoredLabelSet = scores
        .iter()
        .enumerate()
        .map(|(i, score)| ScoredLabel::new(format!("LABEL_{}", i), *score))
        .collect();

    let best = assert_ok!(resolve(&set));

    assert!(set.iter().all(|l| best.score >= l.score));
    // Earliest maximal element wins
    assert_eq!(best.label, "LABEL_1");
}

#[test]
fn test_resolve_empty_is_reported() {
    let err = assert_err!(resolve(&ScoredLabelSet::default()));
    assert_eq!(err, EmptyInputError);
    assert_eq!(err.to_string(), "scored label set is empty");
}

#[test]
fn test_classify_named_labels() {
    assert_eq!(classify(&ScoredLabel::new("positive", 0.1)), ResponseCategory::Positive);
    assert_eq!(classify(&ScoredLabel::new("negative", 0.9)), ResponseCategory::Negative);
}

#[test]
fn test_classify_generic_labels() {
    assert_eq!(classify(&ScoredLabel::new("LABEL_1", 0.7)), ResponseCategory::Positive);
    assert_eq!(classify(&ScoredLabel::new("LABEL_1", 0.3)), ResponseCategory::Negative);
    assert_eq!(classify(&ScoredLabel::new("LABEL_1", 0.5)), ResponseCategory::Neutral);
}

#[test]
fn test_classify_unknown_named_label() {
    assert_eq!(classify(&ScoredLabel::new("surprise", 0.95)), ResponseCategory::Neutral);
    assert_eq!(LabelKind::of("surprise"), LabelKind::Named("surprise"));
}

#[test]
fn test_resolve_then_classify() {
    let set = labels(&[("LABEL_0", 0.35), ("LABEL_1", 0.65)]);
    let best = assert_ok!(resolve(&set));
    assert_eq!(classify(best), ResponseCategory::Positive);

    // A generic tie at the threshold falls through to neutral
    let set = labels(&[("LABEL_0", 0.5), ("LABEL_1", 0.5)]);
    let best = assert_ok!(resolve(&set));
    assert_eq!(best.label, "LABEL_0");
    assert_eq!(classify(best), ResponseCategory::Neutral);
}

#[test]
fn test_category_messages_are_distinct() {
    let positive = ResponseCategory::Positive.message();
    let negative = ResponseCategory::Negative.message();
    let neutral = ResponseCategory::Neutral.message();

    assert!(positive.starts_with("Thank you for your positive feedback"));
    assert_ne!(positive, negative);
    assert_ne!(negative, neutral);
    assert_eq!(ResponseCategory::Positive.as_str(), "positive");
}

#[test]
fn test_product_entry_title() {
    let entry = ProductEntry::new("noise-cancelling-headphones");
    assert_eq!(entry.id, "noise-cancelling-headphones");
    assert_eq!(entry.title, "Noise Cancelling Headphones");
    assert_eq!(display_title("widget-b"), "Widget B");
}
