//! Output records produced by the ROI engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The investment label attached to each calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "AI Performance Investment")]
    AiPerformanceInvestment,
    #[serde(rename = "Cost Savings Initiative")]
    CostSavingsInitiative,
    #[serde(rename = "Neutral")]
    Neutral,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::AiPerformanceInvestment => "AI Performance Investment",
            Classification::CostSavingsInitiative => "Cost Savings Initiative",
            Classification::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All metrics for one scenario. Monetary fields are per month unless named otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiCalculation {
    pub total_hours_current: f64,
    pub total_hours_future: f64,
    pub cost_current: f64,
    pub cost_future: f64,
    pub monthly_savings: f64,
    pub ai_recurring_cost_per_month: f64,
    pub training_cost_one_time: f64,
    /// Monthly revenue uplift; `None` when no active revenue model was supplied.
    pub revenue_lift_per_run: Option<f64>,
    pub monthly_net_benefit: f64,
    pub roi_percentage: f64,
    /// Months to recover the one-time cost. Infinite when net benefit is not positive;
    /// serialised as `null` in that case.
    #[serde(with = "unbounded_months")]
    pub payback_months: f64,
    pub pilot_3_month_savings: f64,
    pub risk_adjusted_savings: f64,
    pub throughput_multiplier: f64,
    pub additional_monthly_cost: f64,
    pub monthly_uplift: f64,
    pub classification: Classification,
    pub show_net_benefit_tooltip: bool,
}

impl RoiCalculation {
    pub fn has_payback(&self) -> bool {
        self.payback_months.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioName {
    Conservative,
    Base,
    Aggressive,
}

impl ScenarioName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioName::Conservative => "Conservative",
            ScenarioName::Base => "Base",
            ScenarioName::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: ScenarioName,
    pub multiplier: f64,
    pub calculation: RoiCalculation,
}

/// JSON has no infinity, so an unbounded payback travels as `null`.
mod unbounded_months {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
