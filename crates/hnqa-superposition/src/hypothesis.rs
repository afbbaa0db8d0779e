use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Opaque hypothesis identifier, unique within one superposition state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HypothesisLabel(pub String);

impl HypothesisLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HypothesisLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hyp:{}", self.0)
    }
}

impl From<&str> for HypothesisLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for HypothesisLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// One competing interpretation: a label paired with an unnormalized
/// complex belief amplitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub label: HypothesisLabel,
    pub amplitude: Complex64,
}

impl Hypothesis {
    pub fn new(label: impl Into<HypothesisLabel>, amplitude: Complex64) -> Self {
        Self {
            label: label.into(),
            amplitude,
        }
    }

    /// Born-rule mass `|amplitude|²` of this hypothesis alone. Relative to
    /// the whole state only after dividing by the state's total mass.
    pub fn probability_mass(&self) -> f64 {
        self.amplitude.norm_sqr()
    }
}
