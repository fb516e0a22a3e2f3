//! Brightness and light-pollution visibility model.
//!
//! Opacity falls off linearly with apparent magnitude and is attenuated
//! multiplicatively by the pollution level. The calibration makes objects
//! brighter than magnitude -1 fully visible on a clear night while
//! magnitude-6 objects sit at the threshold of the baseline model.

/// Floor on rendered star opacity; objects never fully vanish.
const MIN_STAR_OPACITY: f64 = 0.1;

/// Floor on rendered star marker size in pixels.
const MIN_MARKER_SIZE: f64 = 1.2;

/// Rendering opacity for a star of the given magnitude, in [0.1, 1].
///
/// High pollution hides dim stars first: the linear magnitude baseline is
/// scaled by `1 - pollution` before clamping.
pub fn star_opacity(magnitude: f64, pollution: f64) -> f64 {
    let base_visibility = (1.0 - (magnitude + 1.0) / 7.0).clamp(0.0, 1.0);
    let visibility = base_visibility * (1.0 - pollution);
    visibility.clamp(MIN_STAR_OPACITY, 1.0)
}

/// Rendering opacity for the Moon, in [0.4, 1].
///
/// The Moon is bright enough that pollution only halves it at worst.
pub fn moon_opacity(pollution: f64) -> f64 {
    (1.0 - pollution * 0.5).max(0.4)
}

/// Star marker radius in pixels; brighter stars draw larger.
pub fn marker_size(magnitude: f64) -> f64 {
    (4.0 - magnitude).max(MIN_MARKER_SIZE)
}

/// Alpha of the full-screen pollution haze, saturating at 0.85.
pub fn haze_alpha(pollution: f64) -> f64 {
    (pollution * 0.9).min(0.85)
}
