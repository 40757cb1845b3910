//! Blending of the warm glow over the tone-mapped image.

use crate::image::{BgrImage, ImageF32, ImageView};

/// Blend the glow mask over the tone-mapped image.
///
/// The overlay tint is red-dominant: per pixel the red channel receives
/// `mask · 255 · color_scale` while blue and green receive `mask · 50 ·
/// color_scale`, reproducing the warm bleed of halated film stock. The tint
/// is weighted by `alpha` and added channel-wise, clamped to [0, 255].
pub fn composite(
    tone_mapped: &BgrImage,
    mask: &ImageF32,
    alpha: f32,
    color_scale: f32,
) -> BgrImage {
    let mut out = tone_mapped.clone();
    for (y, mask_row) in mask.rows().enumerate() {
        let row = out.row_mut(y);
        for (px, &m) in row.chunks_exact_mut(3).zip(mask_row) {
            let cool = m * 50.0 * color_scale * alpha;
            let warm = m * 255.0 * color_scale * alpha;
            px[0] = (px[0] as f32 + cool).clamp(0.0, 255.0) as u8;
            px[1] = (px[1] as f32 + cool).clamp(0.0, 255.0) as u8;
            px[2] = (px[2] as f32 + warm).clamp(0.0, 255.0) as u8;
        }
    }
    out
}
