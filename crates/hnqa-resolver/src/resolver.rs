use hnqa_superposition::SuperpositionState;
use tracing::debug;

use crate::context::ContextDescriptor;
use crate::decision::{Decision, RankedHypothesis};
use crate::error::{ResolveError, ResolveResult};

/// Context-weighted collapse over a borrowed superposition state.
///
/// Resolution is read-only: biases apply to a transient working copy of
/// the amplitudes, which is normalized exactly once and ranked. The
/// caller's state is never mutated and nothing is retained between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContextualResolver;

impl ContextualResolver {
    pub fn new() -> Self {
        Self
    }

    /// Bias the state's amplitudes by the context and collapse to a ranked
    /// decision.
    ///
    /// Each label present in the descriptor has its working amplitude
    /// scaled by `(1 + bias)`: zero bias is a strict no-op, bias in (-1, 0)
    /// suppresses without flipping phase, and bias ≤ -1 may zero or invert
    /// the amplitude. Descriptor entries for labels outside the state are
    /// ignored.
    pub fn resolve(
        &self,
        state: &SuperpositionState,
        context: &ContextDescriptor,
    ) -> ResolveResult<Decision> {
        if state.is_empty() {
            return Err(ResolveError::EmptyState);
        }

        // The working copy keeps the original insertion order, and insert
        // replaces in place, so tie-break positions survive biasing.
        let mut working = state.clone();
        for (label, bias) in context.iter() {
            let Some(hyp) = working.get(label) else {
                continue;
            };
            let scaled = hyp.amplitude * (1.0 + bias);
            working.insert(label.clone(), scaled);
        }

        // normalize and ranking fail only when biasing has removed every
        // bit of probability mass from the working copy.
        working
            .normalize()
            .map_err(|_| ResolveError::DegenerateContext)?;
        let ranked = working
            .ranking()
            .map_err(|_| ResolveError::DegenerateContext)?;

        let decision = Decision {
            rankings: ranked
                .into_iter()
                .map(|(label, probability)| RankedHypothesis { label, probability })
                .collect(),
        };

        if let Some(top) = decision.top() {
            debug!(
                winner = %top.label,
                probability = top.probability,
                biases = context.len(),
                "context-weighted collapse complete"
            );
        }
        Ok(decision)
    }
}
