use std::cmp::Ordering;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SuperpositionError, SuperpositionResult};
use crate::hypothesis::{Hypothesis, HypothesisLabel};

/// Tolerance for treating total probability mass as unit after
/// normalization.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// An ordered superposition of labelled hypotheses.
///
/// Entries keep insertion order, and replacing an amplitude keeps the
/// entry's original position, so collapse ties resolve deterministically.
/// The state never rescales on its own: `normalize` is an explicit step,
/// letting callers batch amplitude updates and pay for exactly one rescale.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SuperpositionState {
    hypotheses: Vec<Hypothesis>,
}

impl SuperpositionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a state from prior probability masses, one amplitude per label
    /// at `sqrt(prior)` so squared moduli recover the priors. Negative
    /// priors are clamped to zero mass.
    pub fn from_priors<L, I>(priors: I) -> Self
    where
        L: Into<HypothesisLabel>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let mut state = Self::new();
        for (label, prior) in priors {
            state.insert(label, Complex64::new(prior.max(0.0).sqrt(), 0.0));
        }
        state
    }

    /// Add a hypothesis, or replace the amplitude of an existing label
    /// (last write wins). A replaced label keeps its original position.
    pub fn insert(&mut self, label: impl Into<HypothesisLabel>, amplitude: Complex64) {
        let label = label.into();
        match self.position(&label) {
            Some(idx) => {
                self.hypotheses[idx].amplitude = amplitude;
                debug!(label = %label, "replaced hypothesis amplitude");
            }
            None => {
                debug!(label = %label, "inserted hypothesis");
                self.hypotheses.push(Hypothesis { label, amplitude });
            }
        }
    }

    /// Accumulate an amplitude into an existing label by complex addition,
    /// inserting the label if absent. Amplitudes with opposed phases cancel
    /// (destructive interference); aligned phases reinforce.
    pub fn superpose(&mut self, label: impl Into<HypothesisLabel>, amplitude: Complex64) {
        let label = label.into();
        match self.position(&label) {
            Some(idx) => {
                self.hypotheses[idx].amplitude += amplitude;
                debug!(label = %label, "superposed amplitude onto hypothesis");
            }
            None => {
                debug!(label = %label, "inserted hypothesis");
                self.hypotheses.push(Hypothesis { label, amplitude });
            }
        }
    }

    /// Remove a hypothesis, returning it if present. Absent labels are a
    /// no-op, not an error.
    pub fn remove(&mut self, label: &HypothesisLabel) -> Option<Hypothesis> {
        let idx = self.position(label)?;
        let removed = self.hypotheses.remove(idx);
        debug!(label = %removed.label, "removed hypothesis");
        Some(removed)
    }

    /// Drop every hypothesis.
    pub fn clear(&mut self) {
        self.hypotheses.clear();
        debug!("cleared superposition state");
    }

    /// Total probability mass `Σ|amplitude|²` over the current amplitudes.
    pub fn total_mass(&self) -> f64 {
        self.hypotheses.iter().map(Hypothesis::probability_mass).sum()
    }

    /// Rescale every amplitude by `1/sqrt(Σ|amplitude|²)` so the total mass
    /// becomes one. Fails on a zero-mass state (empty, or every amplitude
    /// zero): normalization is undefined there and must not divide by zero.
    pub fn normalize(&mut self) -> SuperpositionResult<()> {
        let mass = self.total_mass();
        if mass <= 0.0 {
            return Err(SuperpositionError::DegenerateState);
        }
        let scale = mass.sqrt();
        for hyp in &mut self.hypotheses {
            hyp.amplitude /= scale;
        }
        debug!(mass, "normalized superposition state");
        Ok(())
    }

    /// Probability of one label over the current, possibly unnormalized
    /// amplitudes: `|amplitude|² / Σ|amplitude|²`.
    pub fn probability(&self, label: &HypothesisLabel) -> SuperpositionResult<f64> {
        let hyp = self
            .get(label)
            .ok_or_else(|| SuperpositionError::UnknownLabel(label.clone()))?;
        let mass = self.total_mass();
        if mass <= 0.0 {
            return Err(SuperpositionError::DegenerateState);
        }
        Ok(hyp.probability_mass() / mass)
    }

    /// Collapse to the single most probable label. Ties break toward the
    /// earliest-inserted hypothesis.
    pub fn collapse(&self) -> SuperpositionResult<&HypothesisLabel> {
        let mut iter = self.hypotheses.iter();
        let first = iter.next().ok_or(SuperpositionError::EmptyState)?;

        let mut winner = first;
        let mut winner_mass = first.probability_mass();
        for hyp in iter {
            let mass = hyp.probability_mass();
            if mass > winner_mass {
                winner = hyp;
                winner_mass = mass;
            }
        }

        debug!(winner = %winner.label, "collapsed superposition");
        Ok(&winner.label)
    }

    /// Full unweighted ranking of (label, probability) pairs, descending by
    /// probability with ties in insertion order. Shares the error contract
    /// of `probability`: a zero-mass state is degenerate, never reported as
    /// a flat zero distribution.
    pub fn ranking(&self) -> SuperpositionResult<Vec<(HypothesisLabel, f64)>> {
        if self.hypotheses.is_empty() {
            return Err(SuperpositionError::EmptyState);
        }
        let mass = self.total_mass();
        if mass <= 0.0 {
            return Err(SuperpositionError::DegenerateState);
        }

        let mut ranked: Vec<(HypothesisLabel, f64)> = self
            .hypotheses
            .iter()
            .map(|hyp| (hyp.label.clone(), hyp.probability_mass() / mass))
            .collect();
        // Stable sort over insertion order, so equal probabilities keep
        // their original relative positions.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }

    pub fn get(&self, label: &HypothesisLabel) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|hyp| &hyp.label == label)
    }

    pub fn contains(&self, label: &HypothesisLabel) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Hypotheses in insertion order.
    pub fn hypotheses(&self) -> impl Iterator<Item = &Hypothesis> {
        self.hypotheses.iter()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &HypothesisLabel> {
        self.hypotheses.iter().map(|hyp| &hyp.label)
    }

    fn position(&self, label: &HypothesisLabel) -> Option<usize> {
        self.hypotheses.iter().position(|hyp| &hyp.label == label)
    }
}
