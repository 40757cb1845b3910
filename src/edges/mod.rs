//! Gradient-based edge detection feeding the glow mask.
//!
//! Building blocks:
//!
//! - Sobel gradient computation returning `gx`, `gy` and the L1 magnitude.
//! - Direction-aligned non-maximum suppression with double-threshold
//!   hysteresis, producing the binary edge map that seeds the glow.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate); the outer 1-pixel frame
//!   is never marked as an edge.
//! - Keep the output a plain 0/255 byte map so dilation and blur can consume
//!   it directly.

pub mod grad;
pub mod hysteresis;

pub use grad::{sobel_gradients, Grad};
pub use hysteresis::hysteresis_edges;

use crate::image::ImageU8;

/// Detect edges on a smoothed grayscale image: Sobel gradients, non-maximum
/// suppression, then hysteresis with the `low`/`high` thresholds.
pub fn detect_edges(gray: &ImageU8, low: f32, high: f32) -> ImageU8 {
    let grad = sobel_gradients(gray);
    hysteresis_edges(&grad, low, high)
}

#[cfg(test)]
mod tests;
