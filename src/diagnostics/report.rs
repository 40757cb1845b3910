use serde::Serialize;

use crate::diagnostics::TimingBreakdown;
use crate::filter::HalationResult;

/// Result bundle returned by
/// [`HalationFilter::process_with_diagnostics`](crate::HalationFilter::process_with_diagnostics).
///
/// The report itself is not serializable (it carries the full image buffers);
/// the [`PipelineTrace`] inside it is, and is what the demos dump to JSON.
#[derive(Clone, Debug)]
pub struct HalationReport {
    pub result: HalationResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing one filter run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub tone: ToneStage,
    pub mask: MaskStage,
    pub grain: GrainStage,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Tone curve summary: the configured steepness and the table endpoints,
/// enough to spot a flattened or inverted curve at a glance.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneStage {
    pub strength: f32,
    pub lut_first: u8,
    pub lut_last: u8,
}

/// Glow mask summary.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStage {
    /// Edge pixels found by the detector, before dilation.
    pub edge_pixels: usize,
    /// Peak mask intensity; 0 means no glow anywhere.
    pub mask_max: f32,
    pub blur_radius: u32,
    pub dilation_size: u32,
    pub canny_low: f32,
    pub canny_high: f32,
}

/// Grain stage summary.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainStage {
    pub amplitude: i32,
    pub seed: u32,
}
