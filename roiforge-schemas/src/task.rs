use serde::{Deserialize, Serialize};

/// One discrete unit of work performed once per run of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTask {
    /// A human-readable label (e.g., "Draft campaign copy").
    pub name: String,
    /// Hours of effort the task takes per run, before automation.
    pub hours_per_run: f64,
    /// Share of the task's effort that can be delegated to automation, 0-100.
    pub ai_coverage_pct: f64,
    /// Speed-up applied to the automated share only, 0-100.
    pub efficiency_gain_pct: f64,
}

impl WorkflowTask {
    pub fn new(name: &str, hours_per_run: f64, ai_coverage_pct: f64, efficiency_gain_pct: f64) -> Self {
        Self {
            name: name.to_string(),
            hours_per_run,
            ai_coverage_pct,
            efficiency_gain_pct,
        }
    }
}
