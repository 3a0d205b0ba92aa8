use crate::{error::RoiforgeError, inputs::RoiInputs, validation::validate_request};
use roiforge_schemas::{
    revenue::RevenueModel, task::WorkflowTask, team::TeamParameters, tool::RecommendedTool,
};

/// A fluent builder for assembling the inputs of one ROI calculation.
///
/// `build` checks the request against the upstream input contract before
/// handing back an immutable `RoiInputs`.
#[derive(Debug, Default)]
pub struct RoiInputsBuilder {
    tasks: Vec<WorkflowTask>,
    tools: Vec<RecommendedTool>,
    team: Option<TeamParameters>,
    revenue_model: Option<RevenueModel>,
    skip_validation: bool,
}

impl RoiInputsBuilder {
    /// Creates a new, empty `RoiInputsBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workflow tasks under analysis.
    pub fn with_tasks(mut self, tasks: Vec<WorkflowTask>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets the priced tool catalog.
    pub fn with_tools(mut self, tools: Vec<RecommendedTool>) -> Self {
        self.tools = tools;
        self
    }

    /// Sets the team size, labor cost and run rate.
    pub fn with_team(mut self, team: TeamParameters) -> Self {
        self.team = Some(team);
        self
    }

    /// Attaches a revenue-uplift model.
    pub fn with_revenue_model(mut self, revenue_model: RevenueModel) -> Self {
        self.revenue_model = Some(revenue_model);
        self
    }

    /// Trusts the caller's own validation and skips the range checks in `build`.
    pub fn skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }

    /// Consumes the builder and returns the calculation inputs.
    ///
    /// # Errors
    ///
    /// Returns a `RoiforgeError` if team parameters were never provided, or if
    /// any value falls outside the accepted input ranges.
    pub fn build(self) -> Result<RoiInputs, RoiforgeError> {
        let team = self.team.ok_or(RoiforgeError::TeamNotDefined)?;

        if !self.skip_validation {
            validate_request(&self.tasks, &self.tools, &team, self.revenue_model.as_ref())?;
        }

        log::debug!(
            "Built ROI inputs: {} tasks, {} tools, revenue model {}",
            self.tasks.len(),
            self.tools.len(),
            if self.revenue_model.is_some() { "present" } else { "absent" }
        );

        Ok(RoiInputs {
            tasks: self.tasks,
            tools: self.tools,
            team,
            revenue_model: self.revenue_model,
        })
    }
}
