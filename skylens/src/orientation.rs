//! Device orientation tracking.
//!
//! Normalizes heterogeneous raw orientation samples into a canonical
//! compass/tilt pointing direction. Platforms disagree on conventions: some
//! deliver a direct compass heading, others only a rotation angle around the
//! vertical axis that increases in the opposite sense from a compass
//! bearing. The tracker owns the current [`Pointing`]; every other component
//! reads it.

use serde::{Deserialize, Serialize};

/// Current device pointing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointing {
    /// Azimuth in degrees, 0 = geographic north, clockwise, [0, 360).
    pub azimuth_deg: f64,
    /// Altitude in degrees, 0 = horizon, +90 = zenith, [-90, 90].
    pub altitude_deg: f64,
}

impl Default for Pointing {
    fn default() -> Self {
        Self {
            azimuth_deg: 0.0,
            altitude_deg: 0.0,
        }
    }
}

/// Raw orientation sample as delivered by the platform sensor source.
///
/// Any subset of fields may be present; missing fields leave the
/// corresponding output unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationSample {
    /// Direct compass heading in degrees, when the platform provides one.
    pub compass_heading: Option<f64>,
    /// Rotation around the vertical axis in degrees, [0, 360).
    pub alpha: Option<f64>,
    /// Front-back tilt in degrees, [-180, 180].
    pub beta: Option<f64>,
    /// Left-right tilt in degrees, [-90, 90]. Unused by the tracker but
    /// part of the sample format.
    pub gamma: Option<f64>,
    /// Whether `alpha` is referenced to true north.
    pub absolute: Option<bool>,
}

/// Platform-specific mapping from raw angles to the canonical convention.
///
/// The defaults reproduce the empirical phone calibration: `alpha` increases
/// counter-clockwise so it is inverted to get a compass bearing, and a
/// vertically held device (screen toward the observer) reads `beta = 90`, so
/// the altitude offset recenters that posture onto the horizon. Both are
/// heuristics with no stated derivation; recalibrate per target platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationCalibration {
    /// Map `alpha` to azimuth as `360 - alpha` instead of using it directly.
    pub invert_alpha: bool,
    /// Offset added to `beta` to produce altitude, in degrees.
    pub altitude_offset_deg: f64,
}

impl Default for OrientationCalibration {
    fn default() -> Self {
        Self {
            invert_alpha: true,
            altitude_offset_deg: -90.0,
        }
    }
}

/// Maintains the device pointing direction from streamed sensor samples.
///
/// Pure state mutation: never blocks, never fails. Malformed or partial
/// samples are absorbed field-by-field under a last-known-value policy.
#[derive(Debug, Clone)]
pub struct OrientationTracker {
    calibration: OrientationCalibration,
    pointing: Pointing,
}

impl OrientationTracker {
    pub fn new(calibration: OrientationCalibration) -> Self {
        Self {
            calibration,
            pointing: Pointing::default(),
        }
    }

    /// Fold one raw sample into the current pointing.
    ///
    /// A direct compass heading wins over `alpha`; `alpha` is inverted per
    /// the calibration; azimuth is renormalized into [0, 360) after every
    /// update.
    pub fn on_sample(&mut self, sample: &OrientationSample) {
        if let Some(heading) = sample.compass_heading {
            self.pointing.azimuth_deg = heading;
        } else if let Some(alpha) = sample.alpha {
            self.pointing.azimuth_deg = if self.calibration.invert_alpha {
                360.0 - alpha
            } else {
                alpha
            };
        }

        if let Some(beta) = sample.beta {
            self.pointing.altitude_deg = beta + self.calibration.altitude_offset_deg;
        }

        self.pointing.azimuth_deg = (self.pointing.azimuth_deg + 360.0).rem_euclid(360.0);
    }

    /// The current pointing direction.
    pub fn current(&self) -> Pointing {
        self.pointing
    }

    pub fn calibration(&self) -> &OrientationCalibration {
        &self.calibration
    }
}
