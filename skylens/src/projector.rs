//! Angle-space frustum projection.
//!
//! Maps horizontal coordinates into viewport pixels relative to the device's
//! current pointing direction. The frustum test is axis-aligned in angle
//! space and the screen mapping is linear rather than perspective-correct, a
//! deliberate simplification that holds up well at the small fields of view
//! of a phone camera.

use ephemeris::HorizontalPosition;

use crate::orientation::Pointing;

/// A projected point in device pixel space.
///
/// Carries the signed angular offsets from frame center that produced it.
/// Produced and consumed within a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub delta_az_deg: f64,
    pub delta_alt_deg: f64,
}

/// Signed shortest angular difference `a - b` in degrees.
///
/// Handles wraparound at the 0/360 boundary: an object at 359 with the
/// device at 1 yields -2, not 358. Exactly opposite directions map to -180
/// (half-open range [-180, 180)).
pub fn signed_delta_deg(a: f64, b: f64) -> f64 {
    (a - b + 540.0).rem_euclid(360.0) - 180.0
}

/// Projects horizontal positions into a rectangular angular frustum.
#[derive(Debug, Clone, Copy)]
pub struct FrustumProjector {
    horizontal_fov_deg: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl FrustumProjector {
    /// Create a projector for the given FOV and viewport.
    ///
    /// # Arguments
    /// * `horizontal_fov_deg` - Horizontal field of view, operator-calibrated
    ///   per device/camera
    /// * `viewport_width` - Viewport width in pixels
    /// * `viewport_height` - Viewport height in pixels
    pub fn new(horizontal_fov_deg: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            horizontal_fov_deg,
            viewport_width,
            viewport_height,
        }
    }

    /// Vertical FOV derived from the horizontal FOV and viewport aspect.
    pub fn vertical_fov_deg(&self) -> f64 {
        self.horizontal_fov_deg * (self.viewport_height / self.viewport_width)
    }

    /// Project an object into the viewport, or `None` when it falls outside
    /// the frustum.
    ///
    /// The frustum test is boundary-exclusive: an object exactly at half the
    /// FOV from center is outside. Objects at or below the horizon are the
    /// caller's job to reject; the projector applies no horizon cutoff.
    pub fn project(&self, object: &HorizontalPosition, pointing: &Pointing) -> Option<ScreenPoint> {
        let delta_az = signed_delta_deg(object.azimuth_deg, pointing.azimuth_deg);
        let delta_alt = object.altitude_deg - pointing.altitude_deg;

        let half_hfov = self.horizontal_fov_deg / 2.0;
        let half_vfov = self.vertical_fov_deg() / 2.0;

        if delta_az.abs() >= half_hfov || delta_alt.abs() >= half_vfov {
            return None;
        }

        let half_width = self.viewport_width / 2.0;
        let half_height = self.viewport_height / 2.0;

        Some(ScreenPoint {
            x: half_width + (delta_az / half_hfov) * half_width,
            // Positive altitude moves up-screen, a decreasing pixel row.
            y: half_height - (delta_alt / half_vfov) * half_height,
            delta_az_deg: delta_az,
            delta_alt_deg: delta_alt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn at(az: f64, alt: f64) -> HorizontalPosition {
        HorizontalPosition {
            azimuth_deg: az,
            altitude_deg: alt,
        }
    }

    fn pointing(az: f64, alt: f64) -> Pointing {
        Pointing {
            azimuth_deg: az,
            altitude_deg: alt,
        }
    }

    #[test]
    fn test_delta_in_signed_halfturn_range() {
        for a in (0..360).step_by(7) {
            for b in (0..360).step_by(11) {
                let d = signed_delta_deg(a as f64, b as f64);
                assert!(
                    (-180.0..180.0).contains(&d),
                    "delta({a}, {b}) = {d} out of range"
                );
            }
        }
    }

    #[test]
    fn test_delta_antisymmetric() {
        for a in (0..360).step_by(13) {
            for b in (0..360).step_by(17) {
                let fwd = signed_delta_deg(a as f64, b as f64);
                let rev = signed_delta_deg(b as f64, a as f64);
                // Antisymmetric except at exactly 180, where both sides
                // land on +180 by the half-open range convention.
                if fwd.abs() < 180.0 && rev.abs() < 180.0 {
                    assert_relative_eq!(fwd, -rev, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_delta_wraparound() {
        assert_relative_eq!(signed_delta_deg(359.0, 1.0), -2.0, epsilon = 1e-9);
        assert_relative_eq!(signed_delta_deg(1.0, 359.0), 2.0, epsilon = 1e-9);
        assert_relative_eq!(signed_delta_deg(0.0, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_maps_to_viewport_center() {
        let projector = FrustumProjector::new(70.0, 1920.0, 1080.0);
        let point = projector
            .project(&at(123.0, 25.0), &pointing(123.0, 25.0))
            .unwrap();
        assert_relative_eq!(point.x, 960.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 540.0, epsilon = 1e-9);
    }

    #[test]
    fn test_vertical_fov_follows_aspect() {
        let projector = FrustumProjector::new(70.0, 1000.0, 500.0);
        assert_relative_eq!(projector.vertical_fov_deg(), 35.0, epsilon = 1e-9);
    }

    #[test]
    fn test_positive_altitude_moves_up_screen() {
        let projector = FrustumProjector::new(70.0, 1000.0, 1000.0);
        let above = projector
            .project(&at(0.0, 10.0), &pointing(0.0, 0.0))
            .unwrap();
        assert!(above.y < 500.0, "object above center drew at y={}", above.y);
        assert_relative_eq!(above.x, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_mapping_toward_edge() {
        let projector = FrustumProjector::new(60.0, 800.0, 800.0);
        // Half of the half-FOV to the right: three quarters across.
        let point = projector
            .project(&at(15.0, 0.0), &pointing(0.0, 0.0))
            .unwrap();
        assert_relative_eq!(point.x, 600.0, epsilon = 1e-9);
        assert_relative_eq!(point.delta_az_deg, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frustum_edge_is_exclusive() {
        let projector = FrustumProjector::new(70.0, 1920.0, 1080.0);
        // Exactly at half the horizontal FOV: outside.
        assert!(projector
            .project(&at(35.0, 0.0), &pointing(0.0, 0.0))
            .is_none());
        // Just inside.
        assert!(projector
            .project(&at(34.99, 0.0), &pointing(0.0, 0.0))
            .is_some());
    }

    #[test]
    fn test_vertical_frustum_cull() {
        let projector = FrustumProjector::new(70.0, 1920.0, 1080.0);
        let half_vfov = projector.vertical_fov_deg() / 2.0;
        assert!(projector
            .project(&at(0.0, half_vfov + 0.1), &pointing(0.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_projection_across_north_wrap() {
        let projector = FrustumProjector::new(70.0, 1000.0, 1000.0);
        // Device at 1 degree, object at 359: small negative delta, left of
        // center, not flung off-screen.
        let point = projector
            .project(&at(359.0, 0.0), &pointing(1.0, 0.0))
            .unwrap();
        assert!(point.x < 500.0);
        assert_relative_eq!(point.delta_az_deg, -2.0, epsilon = 1e-9);
    }
}
