//! Deterministic ROI engine for AI workflow automation.
//!
//! Feed a set of workflow tasks, a priced tool catalog, team parameters and an
//! optional revenue model through [`RoiInputsBuilder`], then call
//! [`generate_scenarios`] to get the Conservative, Base and Aggressive cases.
//! All calculation functions are pure; only building inputs, loading request
//! files and exporting results can fail.

pub mod builder;
pub mod calculation;
pub mod error;
pub mod inputs;
pub mod logger;
pub mod request;
pub mod validation;

pub use builder::RoiInputsBuilder;
pub use calculation::{calculate_roi, generate_scenarios, task_breakdown};
pub use error::RoiforgeError;
pub use inputs::RoiInputs;
