use crate::color::Hsla;
use crate::constants::LAYER_SEPARATOR;
use crate::error::{DiamondsError, Result};
use crate::layer::{FlatColor, Layer, LinearGradient, RadialGradient};
use serde_json::Value;
use std::fmt;

// --- CSS Text ---

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue,
            self.saturation,
            self.luminance,
            format_alpha(self.alpha)
        )
    }
}

/// Alpha to two decimals. Exact ties round away from zero (0.125 -> "0.13"),
/// where `{:.2}` would round them to even.
fn format_alpha(alpha: f64) -> String {
    let magnitude = alpha.abs();
    let eighths = magnitude * 8.0;
    // Only odd multiples of 1/8 sit exactly halfway between two hundredths.
    if eighths < 1e15 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let hundredths = (magnitude * 100.0 + 0.5) as u64;
        let sign = if alpha.is_sign_negative() { "-" } else { "" };
        format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
    } else {
        format!("{alpha:.2}")
    }
}

/// `hsla(h, s%, l%, a)` with alpha fixed to two decimals.
pub fn color_to_text(color: &Hsla) -> String {
    color.to_string()
}

pub fn layer_to_text(layer: &Layer) -> String {
    match layer {
        Layer::LinearGradient(LinearGradient { angle, color, stop }) => format!(
            "linear-gradient({}deg, {} {}%, transparent {}%)",
            angle, color, stop, stop
        ),
        Layer::RadialGradient(RadialGradient { x, y, color, stop }) => format!(
            "radial-gradient(circle at {}% {}%, {} {}%, transparent {}%)",
            x, y, color, stop, stop
        ),
        Layer::FlatColor(FlatColor { color }) => color_to_text(color),
    }
}

/// One CSS string per layer, in order.
pub fn render_layers(layers: &[Layer]) -> Vec<String> {
    layers.iter().map(layer_to_text).collect()
}

/// Joins every layer into a single `background` value.
pub fn render_composite(layers: &[Layer]) -> String {
    render_layers(layers).join(LAYER_SEPARATOR)
}

// --- Untyped Descriptors ---

/// Parses one JSON layer descriptor, checking its `"type"` tag first so an
/// unknown kind surfaces as `UnsupportedLayer` rather than a serde error.
pub fn layer_from_value(value: &Value) -> Result<Layer> {
    let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
    if !Layer::KINDS.contains(&kind) {
        return Err(DiamondsError::UnsupportedLayer {
            kind: kind.to_string(),
        });
    }
    Ok(serde_json::from_value(value.clone())?)
}

/// Renders raw descriptors. Any unsupported layer fails the whole composite.
pub fn render_composite_json(values: &[Value]) -> Result<String> {
    let layers = values
        .iter()
        .map(layer_from_value)
        .collect::<Result<Vec<_>>>()?;
    Ok(render_composite(&layers))
}
