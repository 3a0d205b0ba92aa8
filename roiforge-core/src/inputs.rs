use crate::{builder::RoiInputsBuilder, error::RoiforgeError};
use roiforge_schemas::{
    file_formats::RoiRequestFile, revenue::RevenueModel, task::WorkflowTask, team::TeamParameters,
    tool::RecommendedTool,
};

/// Everything one calculation request reads. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiInputs {
    pub(crate) tasks: Vec<WorkflowTask>,
    pub(crate) tools: Vec<RecommendedTool>,
    pub(crate) team: TeamParameters,
    pub(crate) revenue_model: Option<RevenueModel>,
}

impl RoiInputs {
    pub fn tasks(&self) -> &[WorkflowTask] {
        &self.tasks
    }

    pub fn tools(&self) -> &[RecommendedTool] {
        &self.tools
    }

    pub fn team(&self) -> &TeamParameters {
        &self.team
    }

    pub fn revenue_model(&self) -> Option<&RevenueModel> {
        self.revenue_model.as_ref()
    }
}

/// Converts a parsed request into validated inputs.
impl TryFrom<RoiRequestFile> for RoiInputs {
    type Error = RoiforgeError;

    fn try_from(file: RoiRequestFile) -> Result<Self, Self::Error> {
        let mut builder = RoiInputsBuilder::new()
            .with_tasks(file.tasks)
            .with_tools(file.tools)
            .with_team(file.team);
        if let Some(model) = file.revenue_model {
            builder = builder.with_revenue_model(model);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(team: TeamParameters, tasks: Vec<WorkflowTask>) -> RoiRequestFile {
        RoiRequestFile {
            schema_version: "1.0".to_string(),
            team,
            tasks,
            tools: vec![],
            revenue_model: Some(RevenueModel::new(1000.0, 10.0)),
        }
    }

    #[test]
    fn converts_valid_request() {
        let file = request(
            TeamParameters::new(5, 75.0),
            vec![WorkflowTask::new("Draft copy", 10.0, 50.0, 40.0)],
        );
        let inputs = RoiInputs::try_from(file).unwrap();
        assert_eq!(inputs.tasks().len(), 1);
        assert_eq!(inputs.revenue_model(), Some(&RevenueModel::new(1000.0, 10.0)));
    }

    #[test]
    fn rejects_out_of_range_request() {
        let file = request(
            TeamParameters::new(0, -75.0),
            vec![WorkflowTask::new("", -10.0, 500.0, 40.0)],
        );
        assert!(RoiInputs::try_from(file).is_err());

        let zero_team = request(
            TeamParameters::new(0, 75.0),
            vec![WorkflowTask::new("Draft copy", 10.0, 50.0, 40.0)],
        );
        assert!(matches!(
            RoiInputs::try_from(zero_team),
            Err(RoiforgeError::TeamSizeOutOfRange(0))
        ));
    }
}
