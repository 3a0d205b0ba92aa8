//! Per-task hour transformation and per-run aggregation.

use roiforge_schemas::task::WorkflowTask;
use serde::Serialize;

/// Hours for a single task over one run, after automation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskHours {
    /// `ai_coverage_pct * efficiency_gain_pct / 100`, the real speed-up of the whole task.
    pub effective_efficiency_pct: f64,
    pub hours_saved_per_run: f64,
    pub future_hours_per_run: f64,
}

/// Summed per-run hours across a task set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunHours {
    pub current: f64,
    pub future: f64,
}

/// One row of the per-task audit table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBreakdown {
    pub name: String,
    pub hours_per_run: f64,
    pub adjusted_efficiency_gain_pct: f64,
    pub effective_efficiency_pct: f64,
    pub hours_saved_per_run: f64,
    pub future_hours_per_run: f64,
    pub hours_saved_per_month: f64,
}

pub fn transform_task(task: &WorkflowTask) -> TaskHours {
    let effective_efficiency_pct = task.ai_coverage_pct * task.efficiency_gain_pct / 100.0;
    let hours_saved_per_run = task.hours_per_run * effective_efficiency_pct / 100.0;
    TaskHours {
        effective_efficiency_pct,
        hours_saved_per_run,
        future_hours_per_run: task.hours_per_run - hours_saved_per_run,
    }
}

/// Scales the efficiency gain by the scenario multiplier, clamped to [0, 100].
/// Every other field is carried over untouched.
pub fn adjust_for_scenario(task: &WorkflowTask, multiplier: f64) -> WorkflowTask {
    WorkflowTask {
        efficiency_gain_pct: (task.efficiency_gain_pct * multiplier).clamp(0.0, 100.0),
        ..task.clone()
    }
}

pub fn aggregate(tasks: &[WorkflowTask]) -> RunHours {
    tasks.iter().fold(RunHours::default(), |mut totals, task| {
        totals.current += task.hours_per_run;
        totals.future += transform_task(task).future_hours_per_run;
        totals
    })
}

/// Per-task view of a scenario, for reports. Does not feed the synthesizer.
pub fn task_breakdown(tasks: &[WorkflowTask], multiplier: f64, runs_per_month: f64) -> Vec<TaskBreakdown> {
    let runs = runs_per_month.max(0.0);
    tasks
        .iter()
        .map(|task| {
            let adjusted = adjust_for_scenario(task, multiplier);
            let hours = transform_task(&adjusted);
            TaskBreakdown {
                name: task.name.clone(),
                hours_per_run: task.hours_per_run,
                adjusted_efficiency_gain_pct: adjusted.efficiency_gain_pct,
                effective_efficiency_pct: hours.effective_efficiency_pct,
                hours_saved_per_run: hours.hours_saved_per_run,
                future_hours_per_run: hours.future_hours_per_run,
                hours_saved_per_month: hours.hours_saved_per_run * runs,
            }
        })
        .collect()
}
