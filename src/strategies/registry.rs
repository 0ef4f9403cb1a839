use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::strategies::{HeuristicStrategy, HumanStrategy, NaiveStrategy};
use crate::strategy::Strategy;

/// Returns a normalized label for a strategy spec (the head token before
/// any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a strategy instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - naive[:seed]
/// - heuristic
pub fn create_strategy_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Strategy>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("human") {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string());
        let name = name.unwrap_or_else(|| format!("Human {index}"));
        Ok(Box::new(HumanStrategy::new(name)))
    } else if spec_lower.starts_with("naive") || spec_lower.starts_with("random") {
        let custom_seed = spec
            .split_once(':')
            .and_then(|(_, value)| value.parse::<u64>().ok())
            .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
        Ok(Box::new(NaiveStrategy::new(StdRng::seed_from_u64(
            custom_seed,
        ))))
    } else if spec_lower.starts_with("heuristic") {
        Ok(Box::new(HeuristicStrategy::default()))
    } else {
        Err(format!("unrecognized strategy spec: {spec}").into())
    }
}
