// --- Global Generation Constants ---

// Legal channel ranges for HSLA colors
pub const HUE_MAX: f64 = 360.0;
pub const SATURATION_MAX: f64 = 100.0;
pub const LUMINANCE_MAX: f64 = 100.0;
pub const OPAQUE: f64 = 1.0;

pub const DEFAULT_OPACITY: f64 = 0.3;

// --- Linear gradient defaults ---
pub const DEFAULT_ANGLE_MIN: f64 = 1.0;
pub const DEFAULT_ANGLE_MAX: f64 = 360.0;
pub const DEFAULT_LINEAR_STOP_MIN: f64 = 5.0;
pub const DEFAULT_LINEAR_STOP_MAX: f64 = 95.0;

// --- Radial gradient defaults ---
pub const DEFAULT_POSITION_MIN: f64 = 0.0;
pub const DEFAULT_POSITION_MAX: f64 = 100.0;
pub const DEFAULT_RADIAL_STOP_MIN: f64 = 5.0;
pub const DEFAULT_RADIAL_STOP_MAX: f64 = 20.0;

// Separator between layers in a composite background value
pub const LAYER_SEPARATOR: &str = ", ";
