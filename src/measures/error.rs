use thiserror::Error;

/// Errors surfaced by the gain measures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// The example and attribute sequences differ in length. Raised before
    /// any computation begins.
    #[error("examples and attributes must be of the same size (got {examples} and {attributes})")]
    SizeMismatch { examples: usize, attributes: usize },

    /// The gain ratio denominator is zero. Happens exactly when the
    /// attribute has at most one distinct value across all examples.
    #[error("intrinsic value is zero, gain ratio is undefined for a constant attribute")]
    ZeroIntrinsicValue,
}

pub type Result<T> = std::result::Result<T, MeasureError>;
