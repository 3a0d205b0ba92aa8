use anyhow::{Context, Result};
use roiforge_core::{request, RoiInputs};
use roiforge_schemas::file_formats::RoiRequestFile;
use std::path::{Path, PathBuf};

/// A parsed request together with the engine inputs built from it.
pub struct LoadedRequest {
    pub path: PathBuf,
    pub file: RoiRequestFile,
    pub inputs: RoiInputs,
}

impl LoadedRequest {
    /// Loads and (optionally) validates the request at `path`.
    pub fn load(path: &Path, validate: bool) -> Result<Self> {
        log::info!("Loading request from '{}'", path.display());

        let file = request::load_request_file(path)
            .with_context(|| format!("Failed to load request {:?}", path))?;
        let inputs = request::inputs_from_request(file.clone(), validate)
            .with_context(|| format!("Request {:?} failed validation", path))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            inputs,
        })
    }
}

/// The export directory: the one given on the command line, or a timestamped run folder.
pub fn resolve_output_dir(requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(format!(
            "./runs/roi_{}",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )),
    }
}
