//! The deterministic ROI pipeline.
//!
//! Data only flows one way: tasks are adjusted for the scenario, transformed and
//! aggregated into hours, priced into labor and tool costs, combined with any
//! revenue uplift, and finally synthesized into an `RoiCalculation`.

pub mod cost;
pub mod revenue;
pub mod roi;
pub mod scenario;
pub mod task;

/// Months covered by the headline ROI figure.
pub const HORIZON_MONTHS: f64 = 12.0;
/// Months in the short pilot evaluation window.
pub const PILOT_MONTHS: f64 = 3.0;
/// Confidence applied to the pilot value.
pub const RISK_FACTOR: f64 = 0.7;

pub use roi::calculate_roi;
pub use scenario::{generate_scenarios, SCENARIO_MULTIPLIERS};
pub use task::{task_breakdown, TaskBreakdown};
