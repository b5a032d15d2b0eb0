use crate::models::{ScoredLabel, ScoredLabelSet};
use thiserror::Error;

/// The classifier returned no scored labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("scored label set is empty")]
pub struct EmptyInputError;

/// Pick the best-scoring label from a classifier result
///
/// The label with the strictly greatest score wins. On equal scores the
/// label that appears first in the sequence is kept: the fold only replaces
/// the current best on a strict improvement.
pub fn resolve(labels: &ScoredLabelSet) -> Result<&ScoredLabel, EmptyInputError> {
    let mut candidates = labels.iter();
    let first = candidates.next().ok_or(EmptyInputError)?;

    Ok(candidates.fold(first, |best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    }))
}
