//! Filter parameters, their validation and resolution-adaptive scaling.

use crate::error::{HalationError, Result};
use serde::{Deserialize, Serialize};

/// Reference area (800 × 533 pixels) the default spatial parameters were
/// tuned on. Adaptive scaling is relative to this.
const REFERENCE_AREA: f64 = 800.0 * 533.0;

/// Full parameter set for one halation pass.
///
/// Values deserialize from JSON with per-field defaults, so a config file
/// only needs to spell out what it overrides. Call [`normalized`] before
/// feeding a hand-built set into the pipeline stages; the stages themselves
/// assume an odd blur radius and ordered thresholds.
///
/// [`normalized`]: HalationParams::normalized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalationParams {
    /// Opacity of the glow overlay in the final blend.
    pub alpha: f32,
    /// Kernel size of the wide glow blur, in pixels. Must be odd; even
    /// values are bumped up during normalization.
    pub blur_radius: u32,
    /// Gain applied to the glow tint before blending.
    pub color_scale: f32,
    /// Lower hysteresis threshold of the edge detector.
    pub canny_low: f32,
    /// Upper hysteresis threshold of the edge detector.
    pub canny_high: f32,
    /// Side length of the square kernel that thickens the edge map.
    pub dilation_size: u32,
    /// Steepness of the sigmoid tone curve. Zero flattens the image to
    /// mid-gray.
    pub s_curve_strength: f32,
    /// Grain amplitude as a fraction of full scale.
    pub grain_strength: f32,
    /// Fixed seed for the grain generator. `None` derives a seed from the
    /// image dimensions, so equal inputs still produce equal outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grain_seed: Option<u32>,
}

impl Default for HalationParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            blur_radius: 15,
            color_scale: 0.7,
            canny_low: 100.0,
            canny_high: 200.0,
            dilation_size: 3,
            s_curve_strength: 1.0,
            grain_strength: 0.02,
            grain_seed: None,
        }
    }
}

impl HalationParams {
    /// Validate and repair the parameter set.
    ///
    /// Rejects non-finite floats, negative grain strength and negative
    /// thresholds. Repairs the rest: the blur radius is raised to at least 3
    /// and made odd, the dilation size raised to at least 1, and inverted
    /// threshold pairs are swapped. Out-of-range gains (`alpha`,
    /// `color_scale`, `s_curve_strength`) are accepted as creative choices.
    pub fn normalized(&self) -> Result<Self> {
        let floats = [
            ("alpha", self.alpha),
            ("color_scale", self.color_scale),
            ("canny_low", self.canny_low),
            ("canny_high", self.canny_high),
            ("s_curve_strength", self.s_curve_strength),
            ("grain_strength", self.grain_strength),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(HalationError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.grain_strength < 0.0 {
            return Err(HalationError::InvalidParameter(format!(
                "grain_strength must be non-negative, got {}",
                self.grain_strength
            )));
        }
        if self.canny_low < 0.0 || self.canny_high < 0.0 {
            return Err(HalationError::InvalidParameter(format!(
                "edge thresholds must be non-negative, got {} / {}",
                self.canny_low, self.canny_high
            )));
        }

        let mut fixed = self.clone();
        fixed.blur_radius = fixed.blur_radius.max(3);
        if fixed.blur_radius % 2 == 0 {
            fixed.blur_radius += 1;
        }
        fixed.dilation_size = fixed.dilation_size.max(1);
        if fixed.canny_low > fixed.canny_high {
            std::mem::swap(&mut fixed.canny_low, &mut fixed.canny_high);
        }
        Ok(fixed)
    }

    /// Parameter set scaled to the input resolution.
    ///
    /// Spatial parameters grow with the square root of the area ratio to the
    /// reference resolution, so the glow halo covers the same fraction of the
    /// frame on a 4K input as on the reference. Grain strength scales the
    /// same way but is clamped to [0.01, 0.05].
    pub fn adaptive(width: usize, height: usize) -> Self {
        let scale = ((width * height) as f64 / REFERENCE_AREA).sqrt();
        let mut blur_radius = ((15.0 * scale).round() as u32).max(3);
        if blur_radius % 2 == 0 {
            blur_radius += 1;
        }
        let dilation_size = ((3.0 * scale).round() as u32).max(1);
        let grain_strength = (0.02 * scale).clamp(0.01, 0.05) as f32;
        Self {
            blur_radius,
            dilation_size,
            grain_strength,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HalationParams;
    use crate::error::HalationError;

    #[test]
    fn normalized_keeps_a_valid_set_unchanged() {
        let params = HalationParams::default();
        assert_eq!(params.normalized().unwrap(), params);
    }

    #[test]
    fn normalized_repairs_even_and_tiny_radii() {
        let params = HalationParams {
            blur_radius: 0,
            dilation_size: 0,
            ..HalationParams::default()
        };
        let fixed = params.normalized().unwrap();
        assert_eq!(fixed.blur_radius, 3);
        assert_eq!(fixed.dilation_size, 1);

        let params = HalationParams {
            blur_radius: 14,
            ..HalationParams::default()
        };
        assert_eq!(params.normalized().unwrap().blur_radius, 15);
    }

    #[test]
    fn normalized_swaps_inverted_thresholds() {
        let params = HalationParams {
            canny_low: 250.0,
            canny_high: 90.0,
            ..HalationParams::default()
        };
        let fixed = params.normalized().unwrap();
        assert_eq!(fixed.canny_low, 90.0);
        assert_eq!(fixed.canny_high, 250.0);
    }

    #[test]
    fn normalized_rejects_non_finite_values() {
        for broken in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let params = HalationParams {
                alpha: broken,
                ..HalationParams::default()
            };
            assert!(matches!(
                params.normalized(),
                Err(HalationError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn normalized_rejects_negative_grain_and_thresholds() {
        let params = HalationParams {
            grain_strength: -0.1,
            ..HalationParams::default()
        };
        assert!(params.normalized().is_err());

        let params = HalationParams {
            canny_low: -1.0,
            ..HalationParams::default()
        };
        assert!(params.normalized().is_err());
    }

    #[test]
    fn adaptive_reproduces_the_reference_profile() {
        let params = HalationParams::adaptive(800, 533);
        assert_eq!(params, HalationParams::default());
    }

    #[test]
    fn adaptive_scales_with_the_square_root_of_area() {
        // Four times the reference area doubles the spatial parameters; the
        // even blur radius is bumped to stay odd.
        let params = HalationParams::adaptive(1600, 1066);
        assert_eq!(params.blur_radius, 31);
        assert_eq!(params.dilation_size, 6);
        assert!((params.grain_strength - 0.04).abs() < 1e-4);
    }

    #[test]
    fn adaptive_clamps_grain_on_large_inputs() {
        let params = HalationParams::adaptive(2400, 1599);
        assert_eq!(params.blur_radius, 45);
        assert!((params.grain_strength - 0.05).abs() < 1e-6);
    }

    #[test]
    fn adaptive_holds_floors_on_tiny_inputs() {
        let params = HalationParams::adaptive(8, 8);
        assert_eq!(params.blur_radius, 3);
        assert_eq!(params.dilation_size, 1);
        assert!((params.grain_strength - 0.01).abs() < 1e-6);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: HalationParams = serde_json::from_str(r#"{"alpha": 0.8}"#).unwrap();
        assert_eq!(params.alpha, 0.8);
        assert_eq!(params.blur_radius, 15);
        assert_eq!(params.grain_seed, None);
    }
}
