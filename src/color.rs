use serde::{Deserialize, Serialize};

/// HSLA color: hue in [0, 360], saturation and luminance in [0, 100],
/// alpha in [0, 1].
///
/// Serialized as a 4-element array `[h, s, l, a]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub luminance: f64,
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, luminance: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            luminance,
            alpha,
        }
    }
}

impl From<[f64; 4]> for Hsla {
    fn from([hue, saturation, luminance, alpha]: [f64; 4]) -> Self {
        Self::new(hue, saturation, luminance, alpha)
    }
}

impl From<Hsla> for [f64; 4] {
    fn from(color: Hsla) -> Self {
        [color.hue, color.saturation, color.luminance, color.alpha]
    }
}
