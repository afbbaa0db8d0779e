use thiserror::Error;

/// Errors from contextual resolution.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("cannot resolve an empty superposition state")]
    EmptyState,

    #[error("context biases drove every working amplitude to zero")]
    DegenerateContext,
}

/// Convenience type alias for resolver results.
pub type ResolveResult<T> = Result<T, ResolveError>;
