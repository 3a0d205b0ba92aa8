use crate::{builder::RoiInputsBuilder, error::RoiforgeError, inputs::RoiInputs};
use roiforge_schemas::file_formats::RoiRequestFile;
use std::{fs, path::Path};

/// Reads a request file, choosing YAML or JSON by extension.
pub fn load_request_file(path: &Path) -> Result<RoiRequestFile, RoiforgeError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| RoiforgeError::FileIO(display.clone(), e))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| RoiforgeError::YamlParsing(display, e))
        }
        Some("json") => {
            serde_json::from_str(&content).map_err(|e| RoiforgeError::JsonParsing(display, e))
        }
        _ => Err(RoiforgeError::UnsupportedFormat(display)),
    }
}

/// Turns a parsed request into calculation inputs, validating it on the way.
pub fn inputs_from_request(file: RoiRequestFile, validate: bool) -> Result<RoiInputs, RoiforgeError> {
    log::info!(
        "Request schema {}: {} tasks, {} tools",
        file.schema_version,
        file.tasks.len(),
        file.tools.len()
    );

    if validate {
        return RoiInputs::try_from(file);
    }

    let mut builder = RoiInputsBuilder::new()
        .with_tasks(file.tasks)
        .with_tools(file.tools)
        .with_team(file.team)
        .skip_validation();
    if let Some(model) = file.revenue_model {
        builder = builder.with_revenue_model(model);
    }
    builder.build()
}
