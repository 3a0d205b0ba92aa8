use roiforge_schemas::tool::{BillingModel, RecommendedTool};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LaborCost {
    pub cost_current: f64,
    pub cost_future: f64,
    /// Floored at zero. A slower future state never shows up as negative savings.
    pub monthly_savings: f64,
}

pub fn labor_cost(total_hours_current: f64, total_hours_future: f64, average_hourly_cost: f64) -> LaborCost {
    let cost_current = total_hours_current * average_hourly_cost;
    let cost_future = total_hours_future * average_hourly_cost;
    LaborCost {
        cost_current,
        cost_future,
        monthly_savings: (cost_current - cost_future).max(0.0),
    }
}

/// Monthly recurring spend across the tool catalog.
///
/// Per-account tools contribute their flat monthly fee; per-user tools contribute
/// `license_per_user * team_size`. A missing relevant field counts as zero.
pub fn recurring_tool_cost(tools: &[RecommendedTool], team_size: u32) -> f64 {
    tools
        .iter()
        .map(|tool| {
            let cost = tool.relevant_cost().unwrap_or_else(|| {
                log::warn!(
                    "Tool '{}' has no cost for billing model {:?}; counting it as free",
                    tool.name,
                    tool.billing_model
                );
                0.0
            });
            match tool.billing_model {
                BillingModel::PerAccount => cost,
                BillingModel::PerUser => cost * team_size as f64,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labor_cost_reference_values() {
        let cost = labor_cost(100.0, 80.0, 75.0);
        assert_eq!(cost.cost_current, 7500.0);
        assert_eq!(cost.cost_future, 6000.0);
        assert_eq!(cost.monthly_savings, 1500.0);
    }

    #[test]
    fn savings_floor_at_zero() {
        let cost = labor_cost(80.0, 100.0, 50.0);
        assert_eq!(cost.monthly_savings, 0.0);
        assert_eq!(cost.cost_future, 5000.0);
    }

    #[test]
    fn mixes_billing_models() {
        let tools = vec![
            RecommendedTool::per_user("seats", 30.0),
            RecommendedTool::per_account("platform", 500.0),
        ];
        assert_eq!(recurring_tool_cost(&tools, 5), 650.0);
    }

    #[test]
    fn ignores_field_of_other_billing_model() {
        let mut tool = RecommendedTool::per_account("platform", 200.0);
        tool.license_per_user = Some(99.0);
        assert_eq!(recurring_tool_cost(&[tool], 10), 200.0);

        let missing = RecommendedTool {
            name: "unpriced".to_string(),
            billing_model: BillingModel::PerUser,
            license_per_user: None,
            account_cost_per_month: Some(400.0),
        };
        assert_eq!(recurring_tool_cost(&[missing], 10), 0.0);
    }

    #[test]
    fn empty_catalog_costs_nothing() {
        assert_eq!(recurring_tool_cost(&[], 12), 0.0);
    }
}
