//! Error taxonomy for the halation pipeline.
//!
//! Two failure classes exist: a degenerate input buffer (`InvalidImage`) and a
//! parameter value no normalization rule can repair (`InvalidParameter`).
//! Tolerable parameter slips (even blur kernel, undersized dilation, swapped
//! thresholds) are normalized instead of rejected, see
//! [`HalationParams::normalized`](crate::filter::HalationParams::normalized).
//! The pipeline is a pure transform with no transient failure modes, so there
//! is no retry or partial-output path.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HalationError {
    /// Input buffer cannot be processed (zero dimension or size mismatch).
    #[error("invalid image: {}", _0)]
    InvalidImage(String),

    /// Parameter value outside its valid domain (NaN, negative count).
    #[error("invalid parameter: {}", _0)]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, HalationError>;
