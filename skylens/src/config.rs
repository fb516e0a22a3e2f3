//! Overlay engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::OverlayError;
use crate::orientation::OrientationCalibration;

/// Configuration for the overlay engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Horizontal field of view in degrees, operator-calibrated per
    /// device/camera.
    pub horizontal_fov_deg: f64,
    /// Viewport width in device pixels.
    pub viewport_width: f64,
    /// Viewport height in device pixels.
    pub viewport_height: f64,
    /// Initial pollution level as a percent (0-100).
    pub pollution_percent: u8,
    /// Sensor-to-pointing calibration constants.
    pub calibration: OrientationCalibration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            horizontal_fov_deg: 70.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
            pollution_percent: 30,
            calibration: OrientationCalibration::default(),
        }
    }
}

impl OverlayConfig {
    /// Validate geometric parameters.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if !(self.horizontal_fov_deg > 0.0 && self.horizontal_fov_deg < 180.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "horizontal FOV must be in (0, 180), got {}",
                self.horizontal_fov_deg
            )));
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(OverlayError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.pollution_percent > 100 {
            return Err(OverlayError::InvalidConfig(format!(
                "pollution percent must be <= 100, got {}",
                self.pollution_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(OverlayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        let mut config = OverlayConfig::default();
        config.horizontal_fov_deg = 0.0;
        assert!(config.validate().is_err());

        let mut config = OverlayConfig::default();
        config.viewport_width = -1.0;
        assert!(config.validate().is_err());

        let mut config = OverlayConfig::default();
        config.pollution_percent = 101;
        assert!(config.validate().is_err());
    }
}
