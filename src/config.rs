use crate::color::Hsla;
use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BackgroundKeyword {
    Random,
}

/// Background request: `"random"` or a fixed color.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BackgroundRepr", into = "BackgroundRepr")]
pub enum Background {
    Random,
    Fixed(Hsla),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum BackgroundRepr {
    Keyword(BackgroundKeyword),
    Color(Hsla),
}

impl From<BackgroundRepr> for Background {
    fn from(repr: BackgroundRepr) -> Self {
        match repr {
            BackgroundRepr::Keyword(BackgroundKeyword::Random) => Self::Random,
            BackgroundRepr::Color(color) => Self::Fixed(color),
        }
    }
}

impl From<Background> for BackgroundRepr {
    fn from(background: Background) -> Self {
        match background {
            Background::Random => Self::Keyword(BackgroundKeyword::Random),
            Background::Fixed(color) => Self::Color(color),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinearGradientOptions {
    pub angle_min: f64,
    pub angle_max: f64,
    #[serde(alias = "min")]
    pub stop_min: f64,
    #[serde(alias = "max")]
    pub stop_max: f64,
}

impl Default for LinearGradientOptions {
    fn default() -> Self {
        Self {
            angle_min: DEFAULT_ANGLE_MIN,
            angle_max: DEFAULT_ANGLE_MAX,
            stop_min: DEFAULT_LINEAR_STOP_MIN,
            stop_max: DEFAULT_LINEAR_STOP_MAX,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadialGradientOptions {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(alias = "min")]
    pub stop_min: f64,
    #[serde(alias = "max")]
    pub stop_max: f64,
}

impl Default for RadialGradientOptions {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_POSITION_MIN,
            x_max: DEFAULT_POSITION_MAX,
            y_min: DEFAULT_POSITION_MIN,
            y_max: DEFAULT_POSITION_MAX,
            stop_min: DEFAULT_RADIAL_STOP_MIN,
            stop_max: DEFAULT_RADIAL_STOP_MAX,
        }
    }
}

/// Everything `generate_layers` needs. Unset fields fall back to the
/// defaults in `constants.rs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub colors: Option<Vec<Hsla>>,
    pub random_colors_number: Option<usize>,
    pub background: Option<Background>,
    pub shades: Option<usize>,
    pub shade_variance: Option<f64>,
    pub linear_gradient_options: LinearGradientOptions,
    pub radial_gradient_options: RadialGradientOptions,
    pub opacity: Option<f64>,
    // Fixed seed for reproducible output; entropy when absent.
    pub seed: Option<u64>,
}

impl Options {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(DEFAULT_OPACITY)
    }

    /// True when there is at least one color source. A zero random count
    /// does not count; an explicit empty color list does.
    pub fn has_color_source(&self) -> bool {
        self.colors.is_some() || self.random_colors_number.unwrap_or(0) != 0
    }

    /// Shade expansion needs a non-zero `shades` and an explicitly set
    /// `shade_variance` (zero variance still counts as set).
    pub fn shade_expansion(&self) -> Option<(usize, f64)> {
        match (self.shades, self.shade_variance) {
            (Some(shades), Some(variance)) if shades != 0 => Some((shades, variance)),
            _ => None,
        }
    }
}
