use serde::{Deserialize, Serialize};

pub const DEFAULT_TRAINING_COST_ONE_TIME: f64 = 5000.0;
pub const DEFAULT_RUNS_PER_MONTH: f64 = 10.0;

/// Team-level parameters that scale per-run hours into money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamParameters {
    /// Number of people on the team; multiplies per-user licenses.
    pub team_size: u32,
    /// Fully loaded labor cost per hour.
    pub average_hourly_cost: f64,
    /// One-time setup and training spend.
    #[serde(default = "default_training_cost")]
    pub training_cost_one_time: f64,
    /// How many times the workflow runs in a month.
    #[serde(default = "default_runs_per_month")]
    pub runs_per_month: f64,
}

impl TeamParameters {
    pub fn new(team_size: u32, average_hourly_cost: f64) -> Self {
        Self {
            team_size,
            average_hourly_cost,
            ..Self::default()
        }
    }

    pub fn with_training_cost(mut self, training_cost_one_time: f64) -> Self {
        self.training_cost_one_time = training_cost_one_time;
        self
    }

    pub fn with_runs_per_month(mut self, runs_per_month: f64) -> Self {
        self.runs_per_month = runs_per_month;
        self
    }
}

impl Default for TeamParameters {
    fn default() -> Self {
        Self {
            team_size: 1,
            average_hourly_cost: 0.0,
            training_cost_one_time: DEFAULT_TRAINING_COST_ONE_TIME,
            runs_per_month: DEFAULT_RUNS_PER_MONTH,
        }
    }
}

fn default_training_cost() -> f64 {
    DEFAULT_TRAINING_COST_ONE_TIME
}

fn default_runs_per_month() -> f64 {
    DEFAULT_RUNS_PER_MONTH
}
