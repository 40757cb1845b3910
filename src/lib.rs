#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod image;

// Pipeline building blocks - public for tools and tests, but more volatile
// than the filter surface above.
pub mod blur;
pub mod config;
pub mod edges;
pub mod glow;
pub mod grain;
pub mod morph;
pub mod tone;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the filter, its parameters and its result.
pub use crate::filter::{apply_halation, FilmLook, HalationFilter, HalationParams, HalationResult};

// Error type shared by the whole crate.
pub use crate::error::{HalationError, Result};

// High-level diagnostics returned by `process_with_diagnostics`.
pub use crate::diagnostics::{HalationReport, PipelineTrace};

// Image buffers crossing the API boundary.
pub use crate::image::{BgrImage, ImageF32, ImageU8};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use halation::prelude::*;
///
/// # fn main() -> Result<(), halation::HalationError> {
/// let frame = BgrImage::new(64, 48);
/// let filter = HalationFilter::new(HalationParams::default())?;
/// let result = filter.process(&frame)?;
/// println!("latency_ms={:.3}", result.latency_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::BgrImage;
    pub use crate::{FilmLook, HalationFilter, HalationParams, HalationResult};
}
