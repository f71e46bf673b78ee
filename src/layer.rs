use crate::color::Hsla;
use crate::config::{LinearGradientOptions, RadialGradientOptions};
use crate::utils::{apply_opacity, random_color, random_int};
use rand::Rng;
use serde::{Deserialize, Serialize};

// --- Layer Data Structures ---

/// `color` runs up to `stop` percent along `angle`, then turns transparent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub angle: i64,
    pub color: Hsla,
    pub stop: i64,
}

/// Circle centered at (`x`%, `y`%) with a hard edge at `stop` percent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub x: i64,
    pub y: i64,
    pub color: Hsla,
    pub stop: i64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatColor {
    pub color: Hsla,
}

/// One element of a stacked background. Serialized with a `"type"` tag.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Layer {
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
    #[serde(rename = "Color")]
    FlatColor(FlatColor),
}

impl Layer {
    /// Tag names accepted in serialized descriptors.
    pub const KINDS: [&'static str; 3] = ["LinearGradient", "RadialGradient", "Color"];

    /// The layer's color regardless of kind, with opacity already applied
    /// for gradients.
    pub fn color(&self) -> Hsla {
        match self {
            Layer::LinearGradient(gradient) => gradient.color,
            Layer::RadialGradient(gradient) => gradient.color,
            Layer::FlatColor(flat) => flat.color,
        }
    }
}

// --- Builders ---

pub fn build_linear_gradient<R: Rng + ?Sized>(
    rng: &mut R,
    color: Hsla,
    opacity: f64,
    options: &LinearGradientOptions,
) -> LinearGradient {
    LinearGradient {
        angle: random_int(rng, options.angle_min, options.angle_max),
        color: apply_opacity(color, opacity),
        stop: random_int(rng, options.stop_min, options.stop_max),
    }
}

pub fn build_radial_gradient<R: Rng + ?Sized>(
    rng: &mut R,
    color: Hsla,
    opacity: f64,
    options: &RadialGradientOptions,
) -> RadialGradient {
    let stop = random_int(rng, options.stop_min, options.stop_max);
    RadialGradient {
        x: random_int(rng, options.x_min, options.x_max),
        y: random_int(rng, options.y_min, options.y_max),
        color: apply_opacity(color, opacity),
        stop,
    }
}

/// Flat fill with `color`, or a fresh random color when none is given.
pub fn build_flat_color<R: Rng + ?Sized>(rng: &mut R, color: Option<Hsla>) -> FlatColor {
    FlatColor {
        color: color.unwrap_or_else(|| random_color(rng)),
    }
}
