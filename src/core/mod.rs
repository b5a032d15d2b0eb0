// Core algorithm exports
pub mod classifier;
pub mod resolver;

pub use classifier::{classify, LabelKind, GENERIC_LABEL_PREFIX, GENERIC_LABEL_THRESHOLD};
pub use resolver::{resolve, EmptyInputError};
