use std::future::Future;

use thiserror::Error;

use crate::option::SelectOption;

/// Failure of a lookup fetch. The stores do not retry; the owner decides
/// what, if anything, to do with the error after it is surfaced once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The backend could not be reached or answered with a failure.
    #[error("lookup source unavailable: {0}")]
    Unavailable(String),
}

/// Provider of a flat option list.
///
/// Implementations wrap one backend read. They must not cache: every call
/// re-queries, matching the behavior of the screens this replaces.
pub trait OptionSource {
    type Value;

    fn primary_options(
        &self,
    ) -> impl Future<Output = Result<Vec<SelectOption<Self::Value>>, SourceError>> + Send;
}

/// Provider of an option list scoped by a primary selection, for cascading
/// pairs such as province → municipality.
pub trait DependentOptionSource: OptionSource {
    fn secondary_options(
        &self,
        primary: &Self::Value,
    ) -> impl Future<Output = Result<Vec<SelectOption<Self::Value>>, SourceError>> + Send;
}
