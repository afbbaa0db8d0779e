//! # hnqa-resolver
//!
//! Context-weighted collapse for HNQA superposition states: domain priors
//! and per-query feature cues enter as scalar biases, steer a working copy
//! of the amplitudes, and come back as a ranked decision.
//!
//! ## Control flow
//!
//! ```text
//!   SuperpositionState ──┐
//!                        ├── ContextualResolver::resolve ──► Decision
//!   ContextDescriptor  ──┘        (working copy only;
//!                                  caller's state untouched)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hnqa_resolver::{ContextDescriptor, ContextualResolver};
//! use hnqa_superposition::{Complex64, SuperpositionState};
//!
//! let mut state = SuperpositionState::new();
//! state.insert("thermal anomaly", Complex64::new(0.6, 0.1));
//! state.insert("sensor fault", Complex64::new(0.3, 0.0));
//!
//! let context = ContextDescriptor::new().with_bias("sensor fault", -0.25);
//! let decision = ContextualResolver::new().resolve(&state, &context).unwrap();
//! assert_eq!(decision.top().unwrap().label, "thermal anomaly".into());
//! ```

#![deny(unsafe_code)]

pub mod context;
pub mod decision;
pub mod error;
pub mod resolver;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use context::ContextDescriptor;
pub use decision::{Decision, RankedHypothesis};
pub use error::{ResolveError, ResolveResult};
pub use resolver::ContextualResolver;
