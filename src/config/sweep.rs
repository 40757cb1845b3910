use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    pub input: PathBuf,
    /// Directory receiving one rendered image per look.
    pub output_dir: PathBuf,
    /// Shared grain seed, so renders differ only in their recipes.
    #[serde(default)]
    pub grain_seed: Option<u32>,
    /// Also render the resolution-adaptive parameter set.
    #[serde(default)]
    pub include_adaptive: bool,
}

pub fn load_config(path: &Path) -> Result<SweepConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
