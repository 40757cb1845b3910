//! Sigmoid tone curve for film-like contrast.
//!
//! A 256-entry lookup table is built once per pipeline run from the
//! configured steepness and applied to every channel of every pixel. The
//! same table deliberately remaps B, G and R alike, which slightly shifts
//! hue in saturated regions; this matches the effect's established look and
//! must not be replaced by luminance-only mapping.

use crate::image::BgrImage;
use log::debug;

/// Lookup table mapping input intensity to S-curved output intensity.
///
/// Entry `i` is `255 / (1 + exp(-a·(i - 128) / 255))` with `a = 5 × strength`,
/// clamped to [0, 255] and truncated to u8. `strength = 0` makes every entry
/// 127, collapsing any image to flat mid-gray.
#[derive(Clone, Debug)]
pub struct ToneCurve {
    lut: [u8; 256],
}

impl ToneCurve {
    pub fn new(strength: f32) -> Self {
        let a = 5.0 * strength as f64;
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let x = i as f64;
            let y = 255.0 / (1.0 + (-a * (x - 128.0) / 255.0).exp());
            *entry = y.clamp(0.0, 255.0) as u8;
        }
        debug!(
            "tone curve: strength={strength} range=[{}, {}]",
            lut[0], lut[255]
        );
        Self { lut }
    }

    /// The raw 256-entry table.
    #[inline]
    pub fn lut(&self) -> &[u8; 256] {
        &self.lut
    }

    /// Remap every channel of every pixel through the table.
    pub fn apply(&self, image: &BgrImage) -> BgrImage {
        let mut out = image.clone();
        self.apply_in_place(&mut out);
        out
    }

    pub fn apply_in_place(&self, image: &mut BgrImage) {
        for v in image.as_mut_slice() {
            *v = self.lut[*v as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToneCurve;
    use crate::image::BgrImage;

    #[test]
    fn zero_strength_collapses_to_midpoint() {
        let curve = ToneCurve::new(0.0);
        assert!(curve.lut().iter().all(|&v| v == 127));

        let mut img = BgrImage::new(4, 3);
        img.set_pixel(0, 0, [3, 250, 88]);
        let mapped = curve.apply(&img);
        assert!(mapped.as_slice().iter().all(|&v| v == 127));
    }

    #[test]
    fn unit_strength_pins_the_inflection_point() {
        let curve = ToneCurve::new(1.0);
        assert_eq!(curve.lut()[128], 127);
    }

    #[test]
    fn table_is_monotonic_and_contrast_increasing() {
        let curve = ToneCurve::new(1.0);
        let lut = curve.lut();
        for i in 1..256 {
            assert!(lut[i] >= lut[i - 1], "table must be non-decreasing at {i}");
        }
        // Shadows pushed down, highlights pushed up.
        assert!(lut[0] < 32, "deep shadows should darken, got {}", lut[0]);
        assert!(lut[255] > 224, "highlights should brighten, got {}", lut[255]);
    }

    #[test]
    fn stronger_curves_are_steeper() {
        let soft = ToneCurve::new(0.5);
        let hard = ToneCurve::new(2.0);
        assert!(hard.lut()[32] <= soft.lut()[32]);
        assert!(hard.lut()[224] >= soft.lut()[224]);
        assert!(hard.lut()[0] < soft.lut()[0]);
    }

    #[test]
    fn apply_remaps_each_channel_independently() {
        let curve = ToneCurve::new(1.0);
        let lut = curve.lut();
        let mut img = BgrImage::new(2, 1);
        img.set_pixel(0, 0, [10, 128, 240]);
        img.set_pixel(1, 0, [0, 255, 64]);
        let mapped = curve.apply(&img);
        assert_eq!(
            mapped.pixel(0, 0),
            [lut[10], lut[128], lut[240]],
            "channels must go through the same table"
        );
        assert_eq!(mapped.pixel(1, 0), [lut[0], lut[255], lut[64]]);
    }
}
