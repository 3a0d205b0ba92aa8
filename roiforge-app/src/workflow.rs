use crate::cli::OutputFormat;
use crate::config::LoadedRequest;
use anyhow::{Context, Result};
use roiforge_core::{
    calculation::TaskBreakdown, generate_scenarios, logger::ScenarioLogger, task_breakdown,
};
use roiforge_schemas::calculation::{RoiCalculation, Scenario};
use std::{fs, path::Path};

/// Runs every scenario for the request and prints them in the chosen format.
pub fn run_scenarios(request: &LoadedRequest, format: OutputFormat) -> Result<Vec<Scenario>> {
    let scenarios = generate_scenarios(&request.inputs);

    match format {
        OutputFormat::Text => {
            let team = request.inputs.team();
            let breakdown = task_breakdown(request.inputs.tasks(), 1.0, team.runs_per_month);
            print!("{}", render_text_report(&breakdown, &scenarios));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&scenarios)
                .context("Failed to serialise scenarios")?;
            println!("{}", json);
        }
    }

    Ok(scenarios)
}

/// Writes the CSV audit trail, the JSON scenarios and a copy of the request.
pub fn export_results(request: &LoadedRequest, scenarios: &[Scenario], output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Keep the request next to its results for traceability.
    let file_name = request
        .path
        .file_name()
        .context("Request path has no file name")?;
    fs::copy(&request.path, output_dir.join(file_name))
        .with_context(|| format!("Failed to copy {:?} into {:?}", request.path, output_dir))?;

    let mut logger = ScenarioLogger::new(&output_dir.join("scenarios.csv"))?;
    logger.log_all(scenarios)?;

    let json = serde_json::to_string_pretty(scenarios).context("Failed to serialise scenarios")?;
    fs::write(output_dir.join("scenarios.json"), json)
        .with_context(|| format!("Failed to write scenarios.json in {:?}", output_dir))?;

    log::info!("Exported {} scenarios to {:?}", scenarios.len(), output_dir);
    Ok(())
}

/// Renders the task table and per-scenario summary as plain text.
pub fn render_text_report(rows: &[TaskBreakdown], scenarios: &[Scenario]) -> String {
    let mut out = String::new();
    write_task_table(&mut out, rows);
    write_summary_report(&mut out, scenarios);
    out
}

fn write_task_table(out: &mut String, rows: &[TaskBreakdown]) {
    out.push_str("\n--- [Task Breakdown: Base scenario] ---\n");
    if rows.is_empty() {
        out.push_str("  (no tasks)\n");
        return;
    }
    out.push_str(&format!(
        "  {:<28} {:>8} {:>8} {:>10} {:>10} {:>10} {:>12}\n",
        "Task", "Hrs/run", "Gain", "Eff. gain", "Saved/run", "Future/run", "Saved/month"
    ));
    for row in rows {
        out.push_str(&format!(
            "  {:<28} {:>8.2} {:>7.1}% {:>9.1}% {:>10.2} {:>10.2} {:>12.2}\n",
            truncate(&row.name, 28),
            row.hours_per_run,
            row.adjusted_efficiency_gain_pct,
            row.effective_efficiency_pct,
            row.hours_saved_per_run,
            row.future_hours_per_run,
            row.hours_saved_per_month
        ));
    }
}

fn write_summary_report(out: &mut String, scenarios: &[Scenario]) {
    out.push_str("\n\n--- [ROI Summary Report] ---\n");
    out.push_str("========================================\n");
    for scenario in scenarios {
        out.push_str(&format!(
            "\n{} scenario (efficiency x{:.1}):\n",
            scenario.name, scenario.multiplier
        ));
        write_calculation(out, &scenario.calculation);
    }
    out.push_str("========================================\n");
}

fn write_calculation(out: &mut String, calc: &RoiCalculation) {
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };
    line(format!(
        "  - Hours per month:          {:.1} -> {:.1}",
        calc.total_hours_current, calc.total_hours_future
    ));
    line(format!(
        "  - Labor cost per month:     ${:.2} -> ${:.2}",
        calc.cost_current, calc.cost_future
    ));
    line(format!("  - Monthly savings:          ${:.2}", calc.monthly_savings));
    line(format!("  - AI tools per month:       ${:.2}", calc.ai_recurring_cost_per_month));
    line(format!("  - Training (one-time):      ${:.2}", calc.training_cost_one_time));
    match calc.revenue_lift_per_run {
        Some(lift) => line(format!("  - Revenue uplift per month: ${:.2}", lift)),
        None => line("  - Revenue uplift per month: n/a".to_string()),
    }
    line("  --------------------------------------".to_string());
    line(format!("  - Net benefit per month:    ${:.2}", calc.monthly_net_benefit));
    if calc.has_payback() {
        line(format!("  - Payback:                  {:.1} months", calc.payback_months));
    } else {
        line("  - Payback:                  no payback under these assumptions".to_string());
    }
    line(format!("  - 12-month ROI:             {:.1}%", calc.roi_percentage));
    line(format!("  - 3-month pilot value:      ${:.2}", calc.pilot_3_month_savings));
    line(format!("  - Risk-adjusted pilot:      ${:.2}", calc.risk_adjusted_savings));
    line(format!("  - Throughput multiplier:    {:.2}x", calc.throughput_multiplier));
    line(format!("  - Classification:           {}", calc.classification));
    if calc.show_net_benefit_tooltip {
        line(format!(
            "    (revenue uplift, not labor savings, covers the extra ${:.2}/month in tool spend)",
            calc.additional_monthly_cost
        ));
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let cut: String = name.chars().take(width - 1).collect();
        format!("{}~", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &str = r#"{
        "schema_version": "1.0",
        "team": { "team_size": 5, "average_hourly_cost": 75 },
        "tasks": [
            { "name": "Draft copy", "hours_per_run": 10, "ai_coverage_pct": 50, "efficiency_gain_pct": 40 }
        ],
        "tools": [ { "name": "Suite", "billing_model": "per_account", "account_cost_per_month": 2000 } ]
    }"#;

    #[test]
    fn exports_csv_json_and_request_copy() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(&request_path, REQUEST).unwrap();

        let request = LoadedRequest::load(&request_path, true).unwrap();
        let scenarios = run_scenarios(&request, OutputFormat::Json).unwrap();
        assert_eq!(scenarios.len(), 3);

        let out = dir.path().join("run");
        export_results(&request, &scenarios, &out).unwrap();

        assert!(out.join("request.json").exists());
        let csv = fs::read_to_string(out.join("scenarios.csv")).unwrap();
        assert_eq!(csv.lines().count(), 4);

        let json: Vec<Scenario> =
            serde_json::from_str(&fs::read_to_string(out.join("scenarios.json")).unwrap()).unwrap();
        assert!(json[1].calculation.payback_months.is_infinite());
    }

    fn load(dir: &Path, body: &str) -> LoadedRequest {
        let request_path = dir.join("request.json");
        fs::write(&request_path, body).unwrap();
        LoadedRequest::load(&request_path, true).unwrap()
    }

    #[test]
    fn text_report_shows_missing_payback_and_breakdown() {
        let dir = tempfile::tempdir().unwrap();
        let request = load(dir.path(), REQUEST);
        let scenarios = generate_scenarios(&request.inputs);
        let rows = task_breakdown(request.inputs.tasks(), 1.3, 10.0);
        assert!((rows[0].adjusted_efficiency_gain_pct - 52.0).abs() < 1e-9);

        let report = render_text_report(&rows, &scenarios);
        assert!(report.contains("Draft copy"));
        assert!(report.contains("52.0%"));
        assert!(report.contains("Base scenario (efficiency x1.0):"));
        assert!(report.contains("no payback under these assumptions"));
        assert!(report.contains("Revenue uplift per month: n/a"));
        assert!(report.contains("Classification:           Neutral"));
        assert!(!report.contains("covers the extra"));
    }

    #[test]
    fn text_report_explains_uplift_driven_investment() {
        let dir = tempfile::tempdir().unwrap();
        let with_revenue = REQUEST.replace(
            r#""tools": ["#,
            r#""revenue_model": { "revenue_per_asset": 1000, "expected_incremental_conversion_lift_pct": 10 },
        "tools": ["#,
        );
        let request = load(dir.path(), &with_revenue);
        let scenarios = generate_scenarios(&request.inputs);

        let report = render_text_report(&[], &scenarios);
        assert!(report.contains("(no tasks)"));
        assert!(report.contains("Payback:                  10.0 months"));
        assert!(report.contains("Revenue uplift per month: $1000.00"));
        assert!(report.contains("AI Performance Investment"));
        assert!(report.contains("covers the extra $500.00/month in tool spend"));
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 5), "abcd~");
    }
}
