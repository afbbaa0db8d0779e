//! Sensor-Signal Triage Demo
//!
//! Three competing interpretations of an ambiguous sensor signal are held
//! in superposition. Observed feature flags become contextual biases, and
//! the resolver collapses the state into a ranked decision. The scenario
//! is fully deterministic so its output can double as documentation.

use anyhow::Result;
use colored::*;

use hnqa_resolver::{ContextDescriptor, ContextualResolver, Decision};
use hnqa_superposition::SuperpositionState;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!(
        "{}",
        "╔══════════════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║        HNQA Sensor-Signal Triage Demonstration       ║".cyan()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════════════════════╝".cyan()
    );
    println!();

    // Scenario priors for the ambiguous signal.
    let mut state = SuperpositionState::from_priors([
        ("thermal anomaly", 0.55),
        ("sensor fault", 0.30),
        ("benign fluctuation", 0.15),
    ]);
    state.normalize()?;

    println!("{}", "Ranking before any context:".bold());
    for (label, probability) in state.ranking()? {
        println!("  {:<20} p={:.3}", label.as_str(), probability);
    }
    println!();

    // Features extracted from the current sensor snapshot.
    let features = ["redundant_sensor_agreement", "external_heat_source"];
    println!("{} {:?}", "Observed features:".bold(), features);

    let context = feature_context(&features);
    let mut biases: Vec<_> = context.iter().map(|(label, bias)| (label.clone(), bias)).collect();
    biases.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    for (label, bias) in biases {
        let rendered = format!("{:+.2}", bias);
        let rendered = if bias < 0.0 {
            rendered.red()
        } else {
            rendered.green()
        };
        println!("  bias {:<20} {}", label.as_str(), rendered);
    }
    println!();

    let decision = ContextualResolver::new().resolve(&state, &context)?;
    println!("{}", "Context-weighted decision:".bold());
    print_decision(&decision);

    println!();
    println!("{}", "Demo complete!".green().bold());
    Ok(())
}

/// Translate observed feature flags into contextual biases. Unrecognized
/// flags carry no signal and are dropped with a warning.
fn feature_context(features: &[&str]) -> ContextDescriptor {
    let mut context = ContextDescriptor::new();
    for feature in features {
        match *feature {
            // Redundant sensors agreeing makes a fault less plausible.
            "redundant_sensor_agreement" => context.add_bias("sensor fault", -0.25),
            "external_heat_source" => context.add_bias("thermal anomaly", 0.35),
            "maintenance_recently_completed" => context.add_bias("benign fluctuation", 0.20),
            other => tracing::warn!(feature = other, "unrecognized feature flag"),
        }
    }
    context
}

fn print_decision(decision: &Decision) {
    for (idx, entry) in decision.iter().enumerate() {
        let line = format!(
            "{:>2}. {:<20} p={:.3}",
            idx + 1,
            entry.label.as_str(),
            entry.probability
        );
        if idx == 0 {
            println!("  {}", line.green().bold());
        } else {
            println!("  {}", line);
        }
    }
}
