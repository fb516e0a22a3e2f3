//! Ephemeris adapter for horizontal sky coordinates.
//!
//! This crate turns catalog targets (equatorial coordinates or the Moon)
//! into local horizontal coordinates (azimuth/altitude) for a given observer
//! and instant. The actual position computation sits behind the
//! [`EphemerisSource`] trait so the overlay core can run against a
//! deterministic stub in tests; [`SiderealEphemeris`] is the built-in
//! provider.

use thiserror::Error;
use time::OffsetDateTime;

pub mod sidereal;

pub use sidereal::SiderealEphemeris;

/// Error types for ephemeris calculations
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("body not supported: {0}")]
    UnsupportedBody(String),

    #[error("calculation error: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, EphemerisError>;

/// Observer site on the Earth's surface.
///
/// Set once per session from a location fix; `default()` is the (0, 0, 0)
/// fallback used when geolocation is denied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive, in [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, in [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above sea level in meters (0 when unknown).
    pub elevation_m: f64,
}

impl Observer {
    /// Create an observer, clamping out-of-range coordinates.
    ///
    /// # Arguments
    /// * `latitude_deg` - Geodetic latitude, clamped to [-90, 90]
    /// * `longitude_deg` - East longitude, clamped to [-180, 180]
    /// * `elevation_m` - Elevation in meters, negative values clamped to 0
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg: latitude_deg.clamp(-90.0, 90.0),
            longitude_deg: longitude_deg.clamp(-180.0, 180.0),
            elevation_m: elevation_m.max(0.0),
        }
    }
}

/// Position of a body in the observer's local horizontal frame.
///
/// Recomputed every frame; time-dependent, never cached across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// Azimuth in degrees, 0 = geographic north, increasing clockwise.
    pub azimuth_deg: f64,
    /// Altitude in degrees above the horizon, in [-90, 90].
    pub altitude_deg: f64,
}

impl HorizontalPosition {
    /// Whether the body is strictly above the horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

/// A catalog-facing target, with right ascension in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// The Moon, resolved by name.
    Moon,
    /// A fixed equatorial position (catalog star).
    Equatorial { ra_deg: f64, dec_deg: f64 },
}

/// A provider-facing body request, with right ascension in hours.
///
/// Ephemeris providers follow the hour-angle convention, so the adapter
/// converts catalog degrees to hours before delegating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyRequest {
    Moon,
    Equatorial { ra_hours: f64, dec_deg: f64 },
}

/// Capability trait for the external position computation.
///
/// Implementations must be pure functions of (body, instant, observer):
/// the adapter calls `resolve` once per object per frame and never caches.
pub trait EphemerisSource {
    /// Compute the horizontal position of `body` for `observer` at `instant`.
    fn resolve(
        &self,
        body: &BodyRequest,
        instant: OffsetDateTime,
        observer: &Observer,
    ) -> Result<HorizontalPosition>;
}

/// Adapter between catalog targets and an [`EphemerisSource`].
///
/// Converts right ascension from catalog degrees to the hour convention the
/// source expects, and downgrades per-object computation failures to `None`
/// so a degenerate time for one body never aborts a frame. Callers treat
/// `None` identically to "not currently visible".
pub struct EphemerisAdapter<S: EphemerisSource> {
    source: S,
}

impl<S: EphemerisSource> EphemerisAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a target to horizontal coordinates, or `None` if the source
    /// failed for this body at this instant.
    pub fn horizontal_position(
        &self,
        target: &Target,
        instant: OffsetDateTime,
        observer: &Observer,
    ) -> Option<HorizontalPosition> {
        let body = match *target {
            Target::Moon => BodyRequest::Moon,
            Target::Equatorial { ra_deg, dec_deg } => BodyRequest::Equatorial {
                ra_hours: ra_deg / 15.0,
                dec_deg,
            },
        };

        match self.source.resolve(&body, instant, observer) {
            Ok(position) => Some(position),
            Err(e) => {
                log::debug!("ephemeris unavailable for {target:?}: {e}");
                None
            }
        }
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
