use thiserror::Error;

use crate::hypothesis::HypothesisLabel;

/// Errors from superposition state operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SuperpositionError {
    #[error("unknown hypothesis label: {0}")]
    UnknownLabel(HypothesisLabel),

    #[error("degenerate state: total probability mass is zero")]
    DegenerateState,

    #[error("superposition state holds no hypotheses")]
    EmptyState,
}

/// Convenience type alias for superposition results.
pub type SuperpositionResult<T> = Result<T, SuperpositionError>;
