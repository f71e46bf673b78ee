use crate::color::Hsla;
use crate::constants::{HUE_MAX, LUMINANCE_MAX, OPAQUE, SATURATION_MAX};
use rand::Rng;

// --- Random Helpers ---

/// Uniform integer from the inclusive range `[ceil(min), floor(max)]`.
///
/// An empty range after rounding yields `ceil(min)`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    let min_int = min.ceil() as i64;
    let max_int = max.floor() as i64;
    if min_int < max_int {
        rng.gen_range(min_int..=max_int)
    } else {
        min_int
    }
}

/// Fully opaque color with every channel uniform over its legal range.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Hsla {
    Hsla::new(
        random_int(rng, 0.0, HUE_MAX) as f64,
        random_int(rng, 0.0, SATURATION_MAX) as f64,
        random_int(rng, 0.0, LUMINANCE_MAX) as f64,
        OPAQUE,
    )
}

pub fn random_colors<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Hsla> {
    (0..count).map(|_| random_color(rng)).collect()
}

pub fn apply_opacity(color: Hsla, opacity: f64) -> Hsla {
    Hsla {
        alpha: opacity,
        ..color
    }
}

/// Constrains `value` to `[min, max]`. Unlike `f64::clamp` this never panics;
/// with `min > max` the lower bound wins.
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

// --- Shades ---

// Two independent draws subtracted: centered on zero, bounded by +/- variance.
fn perturb<R: Rng + ?Sized>(rng: &mut R, value: f64, variance: f64) -> f64 {
    value + random_int(rng, 0.0, variance) as f64 - random_int(rng, 0.0, variance) as f64
}

/// Random variant of `color` with saturation and luminance nudged by at most
/// `variance` each. Hue and alpha pass through.
pub fn derive_shade<R: Rng + ?Sized>(rng: &mut R, color: Hsla, variance: f64) -> Hsla {
    let saturation = clip(perturb(rng, color.saturation, variance), 0.0, SATURATION_MAX);
    let luminance = clip(perturb(rng, color.luminance, variance), 0.0, LUMINANCE_MAX);
    Hsla {
        saturation,
        luminance,
        ..color
    }
}

pub fn derive_shades<R: Rng + ?Sized>(
    rng: &mut R,
    color: Hsla,
    count: usize,
    variance: f64,
) -> Vec<Hsla> {
    (0..count).map(|_| derive_shade(rng, color, variance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn random_int_stays_in_rounded_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let n = random_int(&mut rng, 0.5, 3.7);
            assert!((1..=3).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn random_int_hits_both_bounds() {
        let mut rng = rng();
        let draws: Vec<i64> = (0..500).map(|_| random_int(&mut rng, 1.0, 3.0)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
    }

    #[test]
    fn random_int_degenerate_range() {
        let mut rng = rng();
        assert_eq!(random_int(&mut rng, 4.0, 4.0), 4);
        assert_eq!(random_int(&mut rng, 0.2, 0.8), 1);
        assert_eq!(random_int(&mut rng, 10.0, 2.0), 10);
    }

    #[test]
    fn random_color_is_opaque_and_in_range() {
        let mut rng = rng();
        for color in random_colors(&mut rng, 100) {
            assert_eq!(color.alpha, 1.0);
            assert!((0.0..=360.0).contains(&color.hue));
            assert!((0.0..=100.0).contains(&color.saturation));
            assert!((0.0..=100.0).contains(&color.luminance));
            assert_eq!(color.hue.fract(), 0.0);
        }
    }

    #[test]
    fn random_colors_zero_is_empty() {
        assert!(random_colors(&mut rng(), 0).is_empty());
    }

    #[test]
    fn apply_opacity_replaces_alpha_only() {
        let color = Hsla::new(200.0, 50.0, 40.0, 1.0);
        assert_eq!(apply_opacity(color, 0.3), Hsla::new(200.0, 50.0, 40.0, 0.3));
    }

    #[test]
    fn clip_bounds() {
        assert_eq!(clip(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clip(105.0, 0.0, 100.0), 100.0);
        assert_eq!(clip(42.0, 0.0, 100.0), 42.0);
    }

    #[test]
    fn shade_keeps_hue_and_alpha() {
        let mut rng = rng();
        let base = Hsla::new(120.0, 50.0, 50.0, 0.7);
        for shade in derive_shades(&mut rng, base, 50, 20.0) {
            assert_eq!(shade.hue, 120.0);
            assert_eq!(shade.alpha, 0.7);
            assert!((shade.saturation - 50.0).abs() <= 20.0);
            assert!((shade.luminance - 50.0).abs() <= 20.0);
        }
    }

    #[test]
    fn shade_clips_at_edges() {
        let mut rng = rng();
        let base = Hsla::new(0.0, 100.0, 0.0, 1.0);
        for shade in derive_shades(&mut rng, base, 50, 30.0) {
            assert!(shade.saturation <= 100.0);
            assert!(shade.luminance >= 0.0);
        }
    }

    #[test]
    fn zero_variance_shade_is_identity() {
        let base = Hsla::new(10.0, 20.0, 30.0, 1.0);
        assert_eq!(derive_shade(&mut rng(), base, 0.0), base);
    }

    #[test]
    fn zero_shades_is_empty() {
        let base = Hsla::new(10.0, 20.0, 30.0, 1.0);
        assert!(derive_shades(&mut rng(), base, 0, 10.0).is_empty());
    }
}
