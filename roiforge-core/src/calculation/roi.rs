//! The ROI synthesizer: folds hours, costs and uplift into the reported metrics.

use super::{
    cost::{labor_cost, recurring_tool_cost},
    revenue::monthly_revenue_lift,
    task::{adjust_for_scenario, aggregate},
    HORIZON_MONTHS, PILOT_MONTHS, RISK_FACTOR,
};
use crate::inputs::RoiInputs;
use roiforge_schemas::{
    calculation::{Classification, RoiCalculation},
    task::WorkflowTask,
};

/// Runs the full calculation for one efficiency multiplier.
///
/// Total over the documented input domain: every division has a defined
/// fallback, so this never panics and never returns NaN from a zero divisor.
pub fn calculate_roi(inputs: &RoiInputs, scenario_multiplier: f64) -> RoiCalculation {
    let adjusted_tasks: Vec<WorkflowTask> = inputs
        .tasks
        .iter()
        .map(|task| adjust_for_scenario(task, scenario_multiplier))
        .collect();

    let per_run = aggregate(&adjusted_tasks);
    let runs = inputs.team.runs_per_month.max(0.0);
    let total_hours_current = per_run.current * runs;
    let total_hours_future = per_run.future * runs;

    let labor = labor_cost(
        total_hours_current,
        total_hours_future,
        inputs.team.average_hourly_cost,
    );
    let ai_recurring_cost_per_month = recurring_tool_cost(&inputs.tools, inputs.team.team_size);
    let training_cost_one_time = inputs.team.training_cost_one_time;

    let revenue_lift = monthly_revenue_lift(inputs.revenue_model.as_ref(), inputs.team.runs_per_month);
    let monthly_uplift = revenue_lift.unwrap_or(0.0);

    let gross_benefit_per_month = labor.monthly_savings + monthly_uplift;
    let monthly_net_benefit = gross_benefit_per_month - ai_recurring_cost_per_month;

    let payback_months = payback_months(training_cost_one_time, monthly_net_benefit);
    let roi_percentage = horizon_roi(
        monthly_net_benefit,
        training_cost_one_time,
        ai_recurring_cost_per_month,
    );

    let pilot_net_value = gross_benefit_per_month * PILOT_MONTHS
        - (training_cost_one_time + ai_recurring_cost_per_month * PILOT_MONTHS);
    let risk_adjusted_savings = pilot_net_value * RISK_FACTOR;

    let throughput_multiplier = if total_hours_future > 0.0 {
        total_hours_current / total_hours_future
    } else {
        1.0
    };

    let additional_monthly_cost = (ai_recurring_cost_per_month - labor.monthly_savings).max(0.0);
    let classification = classify(
        labor.monthly_savings,
        ai_recurring_cost_per_month,
        monthly_uplift,
    );

    log::debug!(
        "multiplier {:.2}: hours {:.2} -> {:.2}, savings {:.2}, tools {:.2}, uplift {:.2}, net {:.2}, {}",
        scenario_multiplier,
        total_hours_current,
        total_hours_future,
        labor.monthly_savings,
        ai_recurring_cost_per_month,
        monthly_uplift,
        monthly_net_benefit,
        classification
    );

    RoiCalculation {
        total_hours_current,
        total_hours_future,
        cost_current: labor.cost_current,
        cost_future: labor.cost_future,
        monthly_savings: labor.monthly_savings,
        ai_recurring_cost_per_month,
        training_cost_one_time,
        revenue_lift_per_run: revenue_lift,
        monthly_net_benefit,
        roi_percentage,
        payback_months,
        pilot_3_month_savings: pilot_net_value,
        risk_adjusted_savings,
        throughput_multiplier,
        additional_monthly_cost,
        monthly_uplift,
        classification,
        show_net_benefit_tooltip: classification == Classification::AiPerformanceInvestment,
    }
}

/// Months to recover the one-time cost; infinite when there is nothing to recover it with.
pub fn payback_months(training_cost_one_time: f64, monthly_net_benefit: f64) -> f64 {
    if monthly_net_benefit > 0.0 {
        training_cost_one_time / monthly_net_benefit
    } else {
        f64::INFINITY
    }
}

/// ROI over the fixed horizon, as a percentage of total investment. Zero when
/// nothing was invested.
pub fn horizon_roi(
    monthly_net_benefit: f64,
    training_cost_one_time: f64,
    ai_recurring_cost_per_month: f64,
) -> f64 {
    let total_net_benefit = monthly_net_benefit * HORIZON_MONTHS - training_cost_one_time;
    let total_investment = training_cost_one_time + ai_recurring_cost_per_month * HORIZON_MONTHS;
    if total_investment > 0.0 {
        total_net_benefit / total_investment * 100.0
    } else {
        0.0
    }
}

/// First match wins: uplift covering the extra spend, then plain savings, then neutral.
pub fn classify(
    monthly_savings: f64,
    ai_recurring_cost_per_month: f64,
    revenue_lift_per_month: f64,
) -> Classification {
    let additional_monthly_cost = (ai_recurring_cost_per_month - monthly_savings).max(0.0);
    if additional_monthly_cost > 0.0 && revenue_lift_per_month > additional_monthly_cost {
        Classification::AiPerformanceInvestment
    } else if monthly_savings > ai_recurring_cost_per_month {
        Classification::CostSavingsInitiative
    } else {
        Classification::Neutral
    }
}
