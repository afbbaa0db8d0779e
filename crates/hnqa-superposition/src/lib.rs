//! # hnqa-superposition
//!
//! Superposed-belief store for the HNQA reasoning stack: a set of competing
//! hypotheses, each carrying a complex-valued amplitude, that can be
//! updated, normalized, and collapsed into the most probable label.
//!
//! ## Invariants
//!
//! - Labels are unique; re-inserting replaces the amplitude in place and
//!   keeps the entry's original position.
//! - Insertion order is preserved and breaks all probability ties, so
//!   collapse is deterministic.
//! - Normalization is explicit. After `normalize()`, `Σ|amplitude|² = 1`
//!   within [`NORM_TOLERANCE`], and normalizing again is a no-op.
//! - A zero-mass state is degenerate: probability queries and
//!   normalization report it as an error instead of dividing by zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use hnqa_superposition::{Complex64, HypothesisLabel, SuperpositionState};
//!
//! let mut state = SuperpositionState::new();
//! state.insert("thermal anomaly", Complex64::new(0.6, 0.1));
//! state.insert("sensor fault", Complex64::new(0.3, 0.0));
//! state.normalize().unwrap();
//!
//! assert_eq!(state.collapse().unwrap(), &HypothesisLabel::new("thermal anomaly"));
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod hypothesis;
pub mod state;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{SuperpositionError, SuperpositionResult};
pub use hypothesis::{Hypothesis, HypothesisLabel};
pub use state::{SuperpositionState, NORM_TOLERANCE};

// Amplitude scalar type, re-exported so downstream crates and tests share
// one complex-number vocabulary.
pub use num_complex::Complex64;
