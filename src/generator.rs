use crate::color::Hsla;
use crate::config::{Background, GradientKind, Options};
use crate::error::{DiamondsError, Result};
use crate::layer::{Layer, build_flat_color, build_linear_gradient, build_radial_gradient};
use crate::utils::{derive_shades, random_colors};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub type DiamondRng = StdRng;

/// Generates the layer stack described by `options`.
///
/// Seeds from `options.seed` when set, otherwise from OS entropy.
pub fn generate_layers(options: &Options) -> Result<Vec<Layer>> {
    let mut rng = match options.seed {
        Some(seed) => DiamondRng::seed_from_u64(seed),
        None => DiamondRng::from_entropy(),
    };
    generate_layers_with(options, &mut rng)
}

/// Same as [`generate_layers`] but draws from a caller-supplied generator.
///
/// Output order: explicit colors, random colors, then every color's shades
/// (in color order), then the background layer if requested.
pub fn generate_layers_with<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> Result<Vec<Layer>> {
    if !options.has_color_source() {
        return Err(DiamondsError::InvalidInput);
    }

    let mut colors = options.colors.clone().unwrap_or_default();
    let random_count = options.random_colors_number.unwrap_or(0);
    colors.extend(random_colors(rng, random_count));
    log::debug!(
        "color set: {} explicit, {} random",
        colors.len() - random_count,
        random_count
    );

    let colors = expand_shades(rng, colors, options);

    warn_inverted_bounds(options);
    let mut layers = build_layers(rng, &colors, options);

    if let Some(background) = options.background {
        let fixed = match background {
            Background::Random => None,
            Background::Fixed(color) => Some(color),
        };
        log::debug!("appending background layer ({:?})", background);
        layers.push(Layer::FlatColor(build_flat_color(rng, fixed)));
    }

    Ok(layers)
}

// Shades are appended after the base colors, which stay in place.
fn expand_shades<R: Rng + ?Sized>(rng: &mut R, mut colors: Vec<Hsla>, options: &Options) -> Vec<Hsla> {
    let Some((shades, variance)) = options.shade_expansion() else {
        log::debug!(
            "shade expansion skipped (shades {:?}, variance {:?})",
            options.shades,
            options.shade_variance
        );
        return colors;
    };

    let shade_colors: Vec<Hsla> = colors
        .iter()
        .flat_map(|&color| derive_shades(rng, color, shades, variance))
        .collect();
    log::debug!(
        "derived {} shades ({} per color, variance {})",
        shade_colors.len(),
        shades,
        variance
    );
    colors.extend(shade_colors);
    colors
}

// Each color gets its own seed drawn up front, so a seeded run produces the
// same layers in the same slots however rayon schedules the work.
fn build_layers<R: Rng + ?Sized>(rng: &mut R, colors: &[Hsla], options: &Options) -> Vec<Layer> {
    let seeds: Vec<u64> = colors.iter().map(|_| rng.next_u64()).collect();
    let opacity = options.opacity();

    colors
        .par_iter()
        .zip(seeds)
        .map(|(&color, seed)| {
            let mut layer_rng = DiamondRng::seed_from_u64(seed);
            match options.kind {
                GradientKind::Linear => Layer::LinearGradient(build_linear_gradient(
                    &mut layer_rng,
                    color,
                    opacity,
                    &options.linear_gradient_options,
                )),
                GradientKind::Radial => Layer::RadialGradient(build_radial_gradient(
                    &mut layer_rng,
                    color,
                    opacity,
                    &options.radial_gradient_options,
                )),
            }
        })
        .collect()
}

fn warn_inverted_bounds(options: &Options) {
    let bounds = match options.kind {
        GradientKind::Linear => {
            let linear = &options.linear_gradient_options;
            vec![
                ("angle", linear.angle_min, linear.angle_max),
                ("stop", linear.stop_min, linear.stop_max),
            ]
        }
        GradientKind::Radial => {
            let radial = &options.radial_gradient_options;
            vec![
                ("x", radial.x_min, radial.x_max),
                ("y", radial.y_min, radial.y_max),
                ("stop", radial.stop_min, radial.stop_max),
            ]
        }
    };

    for (name, min, max) in bounds {
        if min > max {
            log::warn!(
                "{} bounds inverted (min {} > max {}); every layer will use min",
                name,
                min,
                max
            );
        }
    }
}
