//! Glow mask construction.
//!
//! The mask marks where light should bleed: edges of the tone-mapped image
//! are detected on a pre-smoothed grayscale copy, thickened with a square
//! dilation, then diffused with a wide Gaussian whose size and sigma follow
//! `blur_radius`. Dividing the diffused footprint by 255 yields per-pixel
//! glow intensities in [0, 1].

use crate::blur::{blur_u8, GaussianTaps, GAUSSIAN_5TAP};
use crate::edges::detect_edges;
use crate::filter::HalationParams;
use crate::image::{BgrImage, ImageF32, ImageU8, ImageView, ImageViewMut};
use crate::morph::dilate_square;
use log::debug;

/// Output of the mask stage.
pub struct GlowMask {
    /// Glow intensity per pixel, in [0, 1].
    pub mask: ImageF32,
    /// Raw edge map before dilation, 255 on edge pixels.
    pub edges: ImageU8,
}

/// Build the glow mask for a tone-mapped image.
///
/// `params` must already be normalized: the wide blur asserts an odd kernel
/// size.
pub fn glow_mask(tone_mapped: &BgrImage, params: &HalationParams) -> GlowMask {
    let gray = tone_mapped.to_grayscale();
    let smoothed = blur_u8(&gray, &GAUSSIAN_5TAP);
    let edges = detect_edges(&smoothed, params.canny_low, params.canny_high);
    let dilated = dilate_square(&edges, params.dilation_size as usize);

    let sigma = (params.blur_radius / 3 + 3) as f32;
    let wide = GaussianTaps::new(params.blur_radius as usize, sigma);
    let footprint = blur_u8(&dilated, &wide);
    debug!(
        "glow mask: {} edge px, blur {}x{} sigma {sigma}",
        edges.count_nonzero(),
        params.blur_radius,
        params.blur_radius
    );

    let mut mask = ImageF32::new(footprint.w, footprint.h);
    for (dst_row, src_row) in mask.rows_mut().zip(footprint.rows()) {
        for (m, &v) in dst_row.iter_mut().zip(src_row) {
            *m = v as f32 / 255.0;
        }
    }
    GlowMask { mask, edges }
}
