use thiserror::Error;

/// Errors raised while parsing wire values into model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Gender code other than "M"/"F".
    #[error("unknown gender code: {0}")]
    InvalidGender(String),
}
