//! Randomized layered gradients ("diamonds") rendered as CSS backgrounds.
//!
//! [`generate_layers`] turns [`Options`] into a stack of gradient and flat
//! color [`Layer`]s; [`render_composite`] joins them into one `background`
//! value.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod layer;
pub mod renderer;
pub mod utils;

pub use color::Hsla;
pub use config::{Background, GradientKind, LinearGradientOptions, Options, RadialGradientOptions};
pub use error::{DiamondsError, Result};
pub use generator::{DiamondRng, generate_layers, generate_layers_with};
pub use layer::{FlatColor, Layer, LinearGradient, RadialGradient};
pub use renderer::{color_to_text, layer_to_text, render_composite, render_composite_json, render_layers};
