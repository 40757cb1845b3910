//! Named parameter recipes for common film looks.

use serde::{Deserialize, Serialize};

use super::params::HalationParams;

/// Preset intensity of the film effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmLook {
    /// Pronounced glow, steeper tone curve and coarser grain.
    Strong,
    /// Balanced default recipe.
    Moderate,
    /// Restrained glow driven by tighter edge thresholds.
    Subtle,
}

impl FilmLook {
    /// All looks in display order.
    pub fn all() -> [FilmLook; 3] {
        [FilmLook::Strong, FilmLook::Moderate, FilmLook::Subtle]
    }

    /// Lowercase identifier, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            FilmLook::Strong => "strong",
            FilmLook::Moderate => "moderate",
            FilmLook::Subtle => "subtle",
        }
    }

    /// Human-readable label for UI listings.
    pub fn label(&self) -> &'static str {
        match self {
            FilmLook::Strong => "Strong Film Effect",
            FilmLook::Moderate => "Moderate Film Effect",
            FilmLook::Subtle => "Subtle Film Effect",
        }
    }

    /// The parameter set behind the look.
    pub fn params(&self) -> HalationParams {
        match self {
            FilmLook::Strong => HalationParams {
                alpha: 0.7,
                blur_radius: 21,
                color_scale: 1.0,
                s_curve_strength: 1.2,
                grain_strength: 0.03,
                ..HalationParams::default()
            },
            FilmLook::Moderate => HalationParams {
                blur_radius: 21,
                ..HalationParams::default()
            },
            FilmLook::Subtle => HalationParams {
                blur_radius: 11,
                canny_low: 150.0,
                canny_high: 250.0,
                dilation_size: 2,
                s_curve_strength: 0.8,
                grain_strength: 0.01,
                ..HalationParams::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilmLook;

    #[test]
    fn every_look_is_already_normalized() {
        for look in FilmLook::all() {
            let params = look.params();
            assert_eq!(params.normalized().unwrap(), params, "{}", look.name());
        }
    }

    #[test]
    fn subtle_needs_stronger_edges_than_strong() {
        let subtle = FilmLook::Subtle.params();
        let strong = FilmLook::Strong.params();
        assert!(subtle.canny_low > strong.canny_low);
        assert!(subtle.canny_high > strong.canny_high);
        assert!(subtle.blur_radius < strong.blur_radius);
        assert!(subtle.alpha <= strong.alpha);
    }

    #[test]
    fn names_round_trip_through_serde() {
        for look in FilmLook::all() {
            let json = serde_json::to_string(&look).unwrap();
            assert_eq!(json, format!("\"{}\"", look.name()));
            let back: FilmLook = serde_json::from_str(&json).unwrap();
            assert_eq!(back, look);
        }
    }
}
