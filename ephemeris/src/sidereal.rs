//! Built-in ephemeris provider based on sidereal time.
//!
//! Equatorial targets are resolved through Greenwich mean sidereal time and
//! the local hour angle; the Moon uses a truncated low-precision series for
//! its ecliptic position. Accuracy is a few arcminutes for stars and better
//! than a degree for the Moon, which is sufficient for a camera overlay.

use time::OffsetDateTime;

use crate::{BodyRequest, EphemerisError, EphemerisSource, HorizontalPosition, Observer, Result};

/// Unix timestamp of the J2000.0 reference epoch (2000-01-01 12:00 UTC).
const J2000_UNIX_SECONDS: i64 = 946_728_000;

/// Mean obliquity of the ecliptic at J2000, degrees.
const OBLIQUITY_J2000_DEG: f64 = 23.4393;

/// Sidereal-time based provider for equatorial targets and the Moon.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiderealEphemeris;

impl SiderealEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl EphemerisSource for SiderealEphemeris {
    fn resolve(
        &self,
        body: &BodyRequest,
        instant: OffsetDateTime,
        observer: &Observer,
    ) -> Result<HorizontalPosition> {
        let days = days_since_j2000(instant)?;

        let (ra_deg, dec_deg) = match *body {
            BodyRequest::Equatorial { ra_hours, dec_deg } => (ra_hours * 15.0, dec_deg),
            BodyRequest::Moon => moon_equatorial(days),
        };

        Ok(equatorial_to_horizontal(ra_deg, dec_deg, days, observer))
    }
}

/// Days elapsed since the J2000.0 epoch, fractional.
fn days_since_j2000(instant: OffsetDateTime) -> Result<f64> {
    let nanos = instant.unix_timestamp_nanos() - (J2000_UNIX_SECONDS as i128) * 1_000_000_000;
    let days = nanos as f64 / (86_400.0 * 1e9);
    if !days.is_finite() {
        return Err(EphemerisError::InvalidTime(format!(
            "instant out of range: {instant}"
        )));
    }
    Ok(days)
}

/// Greenwich mean sidereal time in hours for a J2000 day offset.
fn gmst_hours(days: f64) -> f64 {
    (18.697_374_558 + 24.065_709_824_419_08 * days).rem_euclid(24.0)
}

/// Normalize an angle in degrees into [0, 360).
///
/// `rem_euclid` alone can round a tiny negative input up to exactly 360.0,
/// so the boundary is folded back to zero.
fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert an equatorial position to the observer's horizontal frame.
///
/// Standard spherical triangle solution: local hour angle from the local
/// sidereal time, then altitude and azimuth (north = 0, clockwise).
fn equatorial_to_horizontal(
    ra_deg: f64,
    dec_deg: f64,
    days: f64,
    observer: &Observer,
) -> HorizontalPosition {
    let lst_deg = gmst_hours(days) * 15.0 + observer.longitude_deg;
    let hour_angle = (lst_deg - ra_deg).to_radians();

    let dec = dec_deg.to_radians();
    let lat = observer.latitude_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin();

    let azimuth = (-hour_angle.sin() * dec.cos())
        .atan2(dec.sin() * lat.cos() - dec.cos() * lat.sin() * hour_angle.cos());

    HorizontalPosition {
        azimuth_deg: normalize_deg(azimuth.to_degrees()),
        altitude_deg: altitude.to_degrees(),
    }
}

/// Low-precision geocentric lunar RA/Dec in degrees.
///
/// Truncated mean-element series (largest longitude and latitude terms
/// only), then rotated from the ecliptic through the mean obliquity.
fn moon_equatorial(days: f64) -> (f64, f64) {
    let mean_longitude = 218.316 + 13.176_396 * days;
    let mean_anomaly = (134.963 + 13.064_993 * days).to_radians();
    let argument_of_latitude = (93.272 + 13.229_350 * days).to_radians();

    let lambda = (mean_longitude + 6.289 * mean_anomaly.sin()).to_radians();
    let beta = (5.128 * argument_of_latitude.sin()).to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();

    let ra = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();

    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}
