//! End-to-end contextual collapse scenarios across the store and resolver.

use hnqa_resolver::{ContextDescriptor, ContextualResolver, ResolveError};
use hnqa_superposition::{Complex64, HypothesisLabel, SuperpositionState};

fn signal_state() -> SuperpositionState {
    SuperpositionState::from_priors([
        ("thermal anomaly", 0.55),
        ("sensor fault", 0.30),
        ("benign fluctuation", 0.15),
    ])
}

#[test]
fn sensor_triage_scenario() {
    // Redundant sensors agree (fault less likely) and an external heat
    // source is known (thermal more likely).
    let context = ContextDescriptor::new()
        .with_bias("sensor fault", -0.25)
        .with_bias("thermal anomaly", 0.35);

    let decision = ContextualResolver::new()
        .resolve(&signal_state(), &context)
        .unwrap();

    assert_eq!(decision.top().unwrap().label, "thermal anomaly".into());
    assert_eq!(decision.len(), 3);

    // A decision is a probability distribution.
    let total: f64 = decision.iter().map(|entry| entry.probability).sum();
    assert!((total - 1.0).abs() <= 1e-9);

    // Suppressed fault hypothesis must rank below its unbiased standing.
    let fault = decision
        .iter()
        .find(|entry| entry.label == "sensor fault".into())
        .unwrap();
    assert!(fault.probability < 0.30);
}

#[test]
fn resolution_is_scale_invariant() {
    // Resolving an unnormalized state and a normalized copy of it must
    // produce the same decision: probabilities are ratios of masses.
    let mut raw = SuperpositionState::new();
    raw.insert("thermal anomaly", Complex64::new(2.0, 1.0));
    raw.insert("sensor fault", Complex64::new(1.0, 0.0));
    raw.insert("benign fluctuation", Complex64::new(0.5, 0.5));
    let mut normalized = raw.clone();
    normalized.normalize().unwrap();

    let context = ContextDescriptor::new().with_bias("benign fluctuation", 0.20);
    let resolver = ContextualResolver::new();

    let from_raw = resolver.resolve(&raw, &context).unwrap();
    let from_normalized = resolver.resolve(&normalized, &context).unwrap();

    assert_eq!(from_raw.len(), from_normalized.len());
    for (a, b) in from_raw.iter().zip(from_normalized.iter()) {
        assert_eq!(a.label, b.label);
        assert!((a.probability - b.probability).abs() <= 1e-9);
    }
}

#[test]
fn full_contradiction_transfers_all_mass() {
    let mut state = SuperpositionState::new();
    state.insert("a", Complex64::new(1.0, 0.0));
    state.insert("b", Complex64::new(1.0, 0.0));

    let context = ContextDescriptor::new().with_bias("a", -1.0);
    let decision = ContextualResolver::new().resolve(&state, &context).unwrap();

    assert_eq!(decision.rankings[0].label, "b".into());
    assert!((decision.rankings[0].probability - 1.0).abs() <= 1e-9);
    assert_eq!(decision.rankings[1].label, "a".into());
    assert!(decision.rankings[1].probability.abs() <= 1e-9);
}

#[test]
fn context_may_cover_a_superset_of_the_domain() {
    // Callers keep one prior table across scenarios; labels the current
    // state does not hold must neither fail nor shift the ranking.
    let state = signal_state();
    let broad_context = ContextDescriptor::new()
        .with_bias("power surge", 0.9)
        .with_bias("operator error", -0.5);

    let resolver = ContextualResolver::new();
    let broad = resolver.resolve(&state, &broad_context).unwrap();
    let plain = resolver.resolve(&state, &ContextDescriptor::new()).unwrap();

    assert_eq!(broad, plain);
}

#[test]
fn collapse_and_resolve_agree_without_context() {
    let state = signal_state();
    let winner: HypothesisLabel = state.collapse().unwrap().clone();

    let decision = ContextualResolver::new()
        .resolve(&state, &ContextDescriptor::new())
        .unwrap();

    assert_eq!(decision.top().unwrap().label, winner);
}

#[test]
fn resolver_failure_modes() {
    let resolver = ContextualResolver::new();

    let empty = SuperpositionState::new();
    assert_eq!(
        resolver.resolve(&empty, &ContextDescriptor::new()),
        Err(ResolveError::EmptyState)
    );

    let mut lone = SuperpositionState::new();
    lone.insert("only", Complex64::new(2.0, 0.0));
    let crushing = ContextDescriptor::new().with_bias("only", -1.0);
    assert_eq!(
        resolver.resolve(&lone, &crushing),
        Err(ResolveError::DegenerateContext)
    );
}

#[test]
fn decision_serializes_for_downstream_consumers() {
    let decision = ContextualResolver::new()
        .resolve(&signal_state(), &ContextDescriptor::new())
        .unwrap();

    let json = serde_json::to_string(&decision).unwrap();
    assert!(json.contains("thermal anomaly"));

    let restored: hnqa_resolver::Decision = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, decision);
}
