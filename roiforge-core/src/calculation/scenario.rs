use super::roi::calculate_roi;
use crate::inputs::RoiInputs;
use roiforge_schemas::calculation::{Scenario, ScenarioName};

/// The three what-if cases, in reporting order.
pub const SCENARIO_MULTIPLIERS: [(ScenarioName, f64); 3] = [
    (ScenarioName::Conservative, 0.7),
    (ScenarioName::Base, 1.0),
    (ScenarioName::Aggressive, 1.3),
];

/// Runs the synthesizer once per scenario multiplier. Every other input is shared.
pub fn generate_scenarios(inputs: &RoiInputs) -> Vec<Scenario> {
    if inputs.tasks().is_empty() {
        log::warn!("No tasks supplied; every scenario will report zero hours");
    }

    SCENARIO_MULTIPLIERS
        .iter()
        .map(|&(name, multiplier)| {
            log::debug!("Calculating {} scenario (x{})", name, multiplier);
            Scenario {
                name,
                multiplier,
                calculation: calculate_roi(inputs, multiplier),
            }
        })
        .collect()
}
