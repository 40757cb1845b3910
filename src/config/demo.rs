use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::{FilmLook, HalationParams};

/// Where a demo run gets its parameters from.
///
/// In JSON: `"adaptive"`, `{"look": "strong"}` or
/// `{"explicit": {"alpha": 0.6, ...}}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    /// Scale the default recipe to the input resolution.
    Adaptive,
    /// A named preset.
    Look(FilmLook),
    /// Fully spelled-out parameter set; omitted fields take their defaults.
    Explicit(HalationParams),
}

impl Default for ParamSource {
    fn default() -> Self {
        ParamSource::Adaptive
    }
}

impl ParamSource {
    /// Resolve to a concrete parameter set for an input of the given size.
    pub fn resolve(&self, width: usize, height: usize) -> HalationParams {
        match self {
            ParamSource::Adaptive => HalationParams::adaptive(width, height),
            ParamSource::Look(look) => look.params(),
            ParamSource::Explicit(params) => params.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: ParamSource,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    pub image: PathBuf,
    /// Optional grayscale dump of the glow mask.
    pub mask: Option<PathBuf>,
    /// Optional dump of the edge map driving the glow.
    pub edges: Option<PathBuf>,
    /// Optional JSON dump of the pipeline trace.
    pub trace_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{DemoConfig, ParamSource};
    use crate::filter::FilmLook;

    #[test]
    fn param_source_parses_all_three_forms() {
        let adaptive: ParamSource = serde_json::from_str(r#""adaptive""#).unwrap();
        assert!(matches!(adaptive, ParamSource::Adaptive));

        let look: ParamSource = serde_json::from_str(r#"{"look": "subtle"}"#).unwrap();
        assert!(matches!(look, ParamSource::Look(FilmLook::Subtle)));

        let explicit: ParamSource =
            serde_json::from_str(r#"{"explicit": {"blur_radius": 25}}"#).unwrap();
        match explicit {
            ParamSource::Explicit(params) => assert_eq!(params.blur_radius, 25),
            other => panic!("expected explicit params, got {other:?}"),
        }
    }

    #[test]
    fn missing_params_default_to_adaptive() {
        let config: DemoConfig = serde_json::from_str(
            r#"{"input": "in.png", "output": {"image": "out.png"}}"#,
        )
        .unwrap();
        assert!(matches!(config.params, ParamSource::Adaptive));
        assert!(config.output.mask.is_none());
    }
}
