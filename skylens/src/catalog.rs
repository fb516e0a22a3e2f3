//! Static bright-star catalog.
//!
//! A small fixed list of first-magnitude stars, created once at startup and
//! never mutated. Positions are ICRS right ascension/declination in degrees;
//! magnitudes are apparent visual magnitudes (lower = brighter).

use ephemeris::Target;

/// A named catalog star with equatorial position and apparent magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub name: &'static str,
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
    /// Apparent visual magnitude.
    pub magnitude: f64,
}

impl Star {
    /// The ephemeris target for this star.
    pub fn target(&self) -> Target {
        Target::Equatorial {
            ra_deg: self.ra_deg,
            dec_deg: self.dec_deg,
        }
    }
}

/// The built-in bright-star catalog.
pub const BRIGHT_STARS: &[Star] = &[
    Star { name: "Sirius", ra_deg: 101.2875, dec_deg: -16.7161, magnitude: -1.46 },
    Star { name: "Canopus", ra_deg: 95.9879, dec_deg: -52.6957, magnitude: -0.74 },
    Star { name: "Arcturus", ra_deg: 213.9154, dec_deg: 19.1825, magnitude: -0.05 },
    Star { name: "Vega", ra_deg: 279.2347, dec_deg: 38.7837, magnitude: 0.03 },
    Star { name: "Capella", ra_deg: 79.1723, dec_deg: 45.9979, magnitude: 0.08 },
    Star { name: "Rigel", ra_deg: 78.6345, dec_deg: -8.2016, magnitude: 0.12 },
    Star { name: "Procyon", ra_deg: 114.8255, dec_deg: 5.2250, magnitude: 0.34 },
    Star { name: "Betelgeuse", ra_deg: 88.7929, dec_deg: 7.4071, magnitude: 0.42 },
    Star { name: "Altair", ra_deg: 297.6958, dec_deg: 8.8683, magnitude: 0.77 },
];
