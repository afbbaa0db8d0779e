use std::collections::HashMap;

use hnqa_superposition::HypothesisLabel;

/// Per-call contextual bias map: label → real bias scalar.
///
/// A bias of zero is a strict no-op; a bias in (-1, 0) suppresses a
/// hypothesis monotonically without flipping its phase; bias ≤ -1 may zero
/// the amplitude or invert its sign (strong contextual contradiction).
/// Entries for labels absent from the resolved state are ignored, so
/// callers can pass a superset of domain priors safely.
#[derive(Clone, Debug, Default)]
pub struct ContextDescriptor {
    biases: HashMap<HypothesisLabel, f64>,
}

impl ContextDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bias(mut self, label: impl Into<HypothesisLabel>, bias: f64) -> Self {
        self.biases.insert(label.into(), bias);
        self
    }

    /// Accumulate a bias onto a label, summing with any bias already set.
    /// Lets several feature cues reinforce or offset one another.
    pub fn add_bias(&mut self, label: impl Into<HypothesisLabel>, bias: f64) {
        *self.biases.entry(label.into()).or_insert(0.0) += bias;
    }

    pub fn bias_for(&self, label: &HypothesisLabel) -> Option<f64> {
        self.biases.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.biases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HypothesisLabel, f64)> {
        self.biases.iter().map(|(label, bias)| (label, *bias))
    }
}

impl<L: Into<HypothesisLabel>> FromIterator<(L, f64)> for ContextDescriptor {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Self {
            biases: iter
                .into_iter()
                .map(|(label, bias)| (label.into(), bias))
                .collect(),
        }
    }
}
