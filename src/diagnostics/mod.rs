//! Diagnostics data model for filter runs.
//!
//! [`HalationReport`] is the entry point returned by
//! `process_with_diagnostics`, bundling the processed image with a
//! [`PipelineTrace`] that records per-stage summaries and timings. The trace
//! serializes to camelCase JSON for offline inspection.

pub mod report;
pub mod timing;

pub use report::{GrainStage, HalationReport, InputDescriptor, MaskStage, PipelineTrace, ToneStage};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
