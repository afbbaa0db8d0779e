use hnqa_superposition::HypothesisLabel;
use serde::{Deserialize, Serialize};

/// One entry of a ranked decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedHypothesis {
    pub label: HypothesisLabel,
    pub probability: f64,
}

/// Ranked outcome of a contextual collapse: (label, probability) pairs in
/// descending probability, ties broken by the state's insertion order.
/// Produced fresh per resolve call; the resolver retains nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub rankings: Vec<RankedHypothesis>,
}

impl Decision {
    /// The winning hypothesis. A decision always ranks at least one entry.
    pub fn top(&self) -> Option<&RankedHypothesis> {
        self.rankings.first()
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedHypothesis> {
        self.rankings.iter()
    }
}
