use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoiforgeError {
    #[error("Task #{0} has an empty name")]
    EmptyTaskName(usize),

    #[error("Task '{name}': hours per run {value} is outside [0.5, 40]")]
    HoursOutOfRange { name: String, value: f64 },

    #[error("Task '{name}': {field} {value} is outside [0, 100]")]
    PercentOutOfRange {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("Team size {0} is outside [1, 1000]")]
    TeamSizeOutOfRange(u32),

    #[error("Average hourly cost {0} is outside [1, 5000]")]
    HourlyCostOutOfRange(f64),

    #[error("Training cost must be a non-negative number, got {0}")]
    NegativeTrainingCost(f64),

    #[error("Runs per month must be a non-negative number, got {0}")]
    NegativeRunsPerMonth(f64),

    #[error("Tool '{name}': {field} must be a non-negative number, got {value}")]
    NegativeToolCost {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("Revenue model: {field} {value} is invalid")]
    InvalidRevenueModel { field: &'static str, value: f64 },

    #[error("Team parameters are missing")]
    TeamNotDefined,

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON from '{0}': {1}")]
    JsonParsing(String, #[source] serde_json::Error),

    #[error("Unsupported request file extension for '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
