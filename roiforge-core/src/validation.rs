//! Boundary checks for calculation requests.
//!
//! The engine assumes its inputs already satisfy these ranges; callers run
//! `validate_request` (or let `RoiInputsBuilder::build` do it) before calculating.

use crate::error::RoiforgeError;
use roiforge_schemas::{
    revenue::RevenueModel, task::WorkflowTask, team::TeamParameters, tool::RecommendedTool,
};

pub const MIN_HOURS_PER_RUN: f64 = 0.5;
pub const MAX_HOURS_PER_RUN: f64 = 40.0;
pub const MAX_TEAM_SIZE: u32 = 1000;
pub const MIN_HOURLY_COST: f64 = 1.0;
pub const MAX_HOURLY_COST: f64 = 5000.0;

pub fn validate_request(
    tasks: &[WorkflowTask],
    tools: &[RecommendedTool],
    team: &TeamParameters,
    revenue_model: Option<&RevenueModel>,
) -> Result<(), RoiforgeError> {
    for (index, task) in tasks.iter().enumerate() {
        validate_task(index, task)?;
    }
    for tool in tools {
        validate_tool(tool)?;
    }
    validate_team(team)?;
    if let Some(model) = revenue_model {
        validate_revenue_model(model)?;
    }
    Ok(())
}

pub fn validate_task(index: usize, task: &WorkflowTask) -> Result<(), RoiforgeError> {
    if task.name.trim().is_empty() {
        return Err(RoiforgeError::EmptyTaskName(index));
    }
    if !in_range(task.hours_per_run, MIN_HOURS_PER_RUN, MAX_HOURS_PER_RUN) {
        return Err(RoiforgeError::HoursOutOfRange {
            name: task.name.clone(),
            value: task.hours_per_run,
        });
    }
    for (field, value) in [
        ("ai_coverage_pct", task.ai_coverage_pct),
        ("efficiency_gain_pct", task.efficiency_gain_pct),
    ] {
        if !in_range(value, 0.0, 100.0) {
            return Err(RoiforgeError::PercentOutOfRange {
                name: task.name.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}

pub fn validate_tool(tool: &RecommendedTool) -> Result<(), RoiforgeError> {
    for (field, value) in [
        ("license_per_user", tool.license_per_user),
        ("account_cost_per_month", tool.account_cost_per_month),
    ] {
        if let Some(value) = value {
            if !is_non_negative(value) {
                return Err(RoiforgeError::NegativeToolCost {
                    name: tool.name.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

pub fn validate_team(team: &TeamParameters) -> Result<(), RoiforgeError> {
    if !(1..=MAX_TEAM_SIZE).contains(&team.team_size) {
        return Err(RoiforgeError::TeamSizeOutOfRange(team.team_size));
    }
    if !in_range(team.average_hourly_cost, MIN_HOURLY_COST, MAX_HOURLY_COST) {
        return Err(RoiforgeError::HourlyCostOutOfRange(team.average_hourly_cost));
    }
    if !is_non_negative(team.training_cost_one_time) {
        return Err(RoiforgeError::NegativeTrainingCost(team.training_cost_one_time));
    }
    if !is_non_negative(team.runs_per_month) {
        return Err(RoiforgeError::NegativeRunsPerMonth(team.runs_per_month));
    }
    Ok(())
}

/// Unset fields are fine; set ones must be finite and in range.
pub fn validate_revenue_model(model: &RevenueModel) -> Result<(), RoiforgeError> {
    if let Some(value) = model.revenue_per_asset {
        if !is_non_negative(value) {
            return Err(RoiforgeError::InvalidRevenueModel {
                field: "revenue_per_asset",
                value,
            });
        }
    }
    if let Some(value) = model.expected_incremental_conversion_lift_pct {
        if !in_range(value, 0.0, 100.0) {
            return Err(RoiforgeError::InvalidRevenueModel {
                field: "expected_incremental_conversion_lift_pct",
                value,
            });
        }
    }
    Ok(())
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
