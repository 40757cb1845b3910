//! Glow stage: where light bleeds, and how it lands back on the image.
//!
//! [`glow_mask`] turns edges of the tone-mapped image into a normalized
//! intensity mask; [`composite`] blends the warm tint it drives back over
//! the image.

pub mod composite;
pub mod mask;

pub use composite::composite;
pub use mask::{glow_mask, GlowMask};
