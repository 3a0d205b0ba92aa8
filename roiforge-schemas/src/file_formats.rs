use crate::{revenue::RevenueModel, task::WorkflowTask, team::TeamParameters, tool::RecommendedTool};
use serde::{Deserialize, Serialize};

/// On-disk shape of a calculation request (YAML or JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiRequestFile {
    pub schema_version: String,
    pub team: TeamParameters,
    pub tasks: Vec<WorkflowTask>,
    #[serde(default)]
    pub tools: Vec<RecommendedTool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_model: Option<RevenueModel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::BillingModel;

    #[test]
    fn parses_minimal_yaml_with_defaults() {
        let yaml = r#"
schema_version: "1.0"
team:
  team_size: 5
  average_hourly_cost: 75
tasks:
  - name: Draft copy
    hours_per_run: 10
    ai_coverage_pct: 50
    efficiency_gain_pct: 40
tools:
  - name: Writer
    billing_model: per_account
    account_cost_per_month: 2000
"#;
        let file: RoiRequestFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.team.training_cost_one_time, 5000.0);
        assert_eq!(file.team.runs_per_month, 10.0);
        assert_eq!(file.tools[0].billing_model, BillingModel::PerAccount);
        assert_eq!(file.tools[0].license_per_user, None);
        assert!(file.revenue_model.is_none());
    }
}
