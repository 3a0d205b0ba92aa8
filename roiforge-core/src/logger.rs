use crate::error::RoiforgeError;
use csv::Writer;
use roiforge_schemas::calculation::Scenario;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ScenarioRow {
    scenario: String,
    multiplier: f64,
    total_hours_current: f64,
    total_hours_future: f64,
    cost_current: f64,
    cost_future: f64,
    monthly_savings: f64,
    ai_recurring_cost_per_month: f64,
    training_cost_one_time: f64,
    revenue_lift_per_run: Option<f64>,
    monthly_net_benefit: f64,
    roi_percentage: f64,
    payback_months: String,
    pilot_3_month_savings: f64,
    risk_adjusted_savings: f64,
    throughput_multiplier: f64,
    additional_monthly_cost: f64,
    monthly_uplift: f64,
    classification: String,
    show_net_benefit_tooltip: bool,
}

impl From<&Scenario> for ScenarioRow {
    fn from(scenario: &Scenario) -> Self {
        let calc = &scenario.calculation;
        Self {
            scenario: scenario.name.to_string(),
            multiplier: scenario.multiplier,
            total_hours_current: calc.total_hours_current,
            total_hours_future: calc.total_hours_future,
            cost_current: calc.cost_current,
            cost_future: calc.cost_future,
            monthly_savings: calc.monthly_savings,
            ai_recurring_cost_per_month: calc.ai_recurring_cost_per_month,
            training_cost_one_time: calc.training_cost_one_time,
            revenue_lift_per_run: calc.revenue_lift_per_run,
            monthly_net_benefit: calc.monthly_net_benefit,
            roi_percentage: calc.roi_percentage,
            // Debug formatting: `10.0`, or `inf` when unbounded.
            payback_months: format!("{:?}", calc.payback_months),
            pilot_3_month_savings: calc.pilot_3_month_savings,
            risk_adjusted_savings: calc.risk_adjusted_savings,
            throughput_multiplier: calc.throughput_multiplier,
            additional_monthly_cost: calc.additional_monthly_cost,
            monthly_uplift: calc.monthly_uplift,
            classification: calc.classification.to_string(),
            show_net_benefit_tooltip: calc.show_net_benefit_tooltip,
        }
    }
}

/// Writes one CSV row per scenario so a run can be audited in a spreadsheet.
pub struct ScenarioLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl ScenarioLogger {
    pub fn new(path: &Path) -> Result<Self, RoiforgeError> {
        let display = path.display().to_string();
        let writer =
            Writer::from_path(path).map_err(|e| RoiforgeError::CsvError(display.clone(), e))?;
        Ok(Self {
            path: display,
            writer,
        })
    }

    pub fn log_scenario(&mut self, scenario: &Scenario) -> Result<(), RoiforgeError> {
        self.writer
            .serialize(ScenarioRow::from(scenario))
            .map_err(|e| RoiforgeError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| RoiforgeError::FileIO(self.path.clone(), e))?;
        Ok(())
    }

    pub fn log_all(&mut self, scenarios: &[Scenario]) -> Result<(), RoiforgeError> {
        for scenario in scenarios {
            self.log_scenario(scenario)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::RoiInputsBuilder, calculation::generate_scenarios};
    use roiforge_schemas::{
        revenue::RevenueModel, task::WorkflowTask, team::TeamParameters, tool::RecommendedTool,
    };

    #[test]
    fn writes_header_and_one_row_per_scenario() {
        let inputs = RoiInputsBuilder::new()
            .with_tasks(vec![WorkflowTask::new("Draft copy", 10.0, 50.0, 40.0)])
            .with_tools(vec![RecommendedTool::per_account("Suite", 2000.0)])
            .with_team(TeamParameters::new(5, 75.0))
            .build()
            .unwrap();
        let scenarios = generate_scenarios(&inputs);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.csv");
        let mut logger = ScenarioLogger::new(&path).unwrap();
        logger.log_all(&scenarios).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("scenario,multiplier,total_hours_current"));
        assert!(lines[2].starts_with("Base,1.0,100.0,80.0"));
        assert!(lines[2].contains(",inf,"));
        assert!(lines[2].contains(",Neutral,false"));
    }

    #[test]
    fn finite_payback_matches_float_columns() {
        let inputs = RoiInputsBuilder::new()
            .with_tasks(vec![WorkflowTask::new("Draft copy", 10.0, 50.0, 40.0)])
            .with_tools(vec![RecommendedTool::per_account("Suite", 2000.0)])
            .with_team(TeamParameters::new(5, 75.0))
            .with_revenue_model(RevenueModel::new(1000.0, 10.0))
            .build()
            .unwrap();
        let base = &generate_scenarios(&inputs)[1];
        assert_eq!(base.calculation.payback_months, 10.0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.csv");
        let mut logger = ScenarioLogger::new(&path).unwrap();
        logger.log_scenario(base).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.contains(",500.0,"));
        assert!(row.contains(",10.0,"));
        assert!(!row.contains(",10,"));
    }
}
