//! SKYLENS - sky overlay engine for a live camera feed.
//!
//! Projects catalog stars and the Moon into screen space using the device's
//! compass heading and tilt as a virtual camera orientation, with visual
//! prominence driven by a simulated light-pollution level. The engine emits
//! draw instructions per frame; it never touches pixels. Camera capture,
//! permissions, and UI wiring live in the host environment.
//!
//! States: Idle (no observer fix) -> Tracking (frame loop active).

use time::OffsetDateTime;

use ephemeris::{EphemerisAdapter, EphemerisSource, Observer, Target};

pub mod catalog;
pub mod config;
pub mod error;
pub mod orientation;
pub mod pollution;
pub mod projector;
pub mod visibility;

pub use crate::config::OverlayConfig;
pub use crate::error::OverlayError;
pub use crate::orientation::{OrientationSample, OrientationTracker, Pointing};
pub use crate::projector::{FrustumProjector, ScreenPoint};

use crate::catalog::BRIGHT_STARS;
use crate::pollution::{CleanAnimation, Pollution};

/// Fixed draw radius for the Moon marker, pixels.
const MOON_RADIUS_PX: f64 = 25.0;

/// Radius of the center reticle, pixels.
const RETICLE_RADIUS_PX: f64 = 6.0;

/// Haze below this alpha is not worth emitting.
const HAZE_ALPHA_CUTOFF: f64 = 0.02;

/// Overlay engine states
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayState {
    /// No observer fix yet; frames render empty.
    Idle,
    /// Frame loop active. There is no transition back to Idle; the host
    /// tears the engine down instead.
    Tracking { frames_rendered: usize },
}

/// One renderer-agnostic draw command.
///
/// The external renderer consumes these in order; draw order is the only
/// depth model.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// A catalog star marker.
    Star {
        name: &'static str,
        x: f64,
        y: f64,
        size: f64,
        opacity: f64,
    },
    /// The Moon marker.
    Moon {
        x: f64,
        y: f64,
        radius: f64,
        opacity: f64,
    },
    /// Center pointing reticle.
    Reticle { x: f64, y: f64, radius: f64 },
    /// Full-screen pollution haze.
    Haze { alpha: f64 },
}

/// Render cycle coordinator.
///
/// Owns the pointing/pollution state explicitly (no globals) and drives the
/// per-frame pipeline: ephemeris -> horizon cut -> frustum projection ->
/// visibility -> draw list. Single-threaded by construction: the host event
/// loop delivers sensor samples, location fixes, and frame ticks
/// sequentially through `&mut self`, so every object within a frame
/// observes the same pointing and observer snapshot.
pub struct OverlayEngine<S: EphemerisSource> {
    config: OverlayConfig,
    state: OverlayState,
    adapter: EphemerisAdapter<S>,
    tracker: OrientationTracker,
    projector: FrustumProjector,
    observer: Observer,
    pollution: Pollution,
    clean: CleanAnimation,
}

impl<S: EphemerisSource> OverlayEngine<S> {
    /// Create an engine in the Idle state.
    pub fn new(config: OverlayConfig, source: S) -> Result<Self, OverlayError> {
        config.validate()?;

        let projector = FrustumProjector::new(
            config.horizontal_fov_deg,
            config.viewport_width,
            config.viewport_height,
        );
        let tracker = OrientationTracker::new(config.calibration);
        let pollution = Pollution::from_percent(config.pollution_percent);

        Ok(Self {
            config,
            state: OverlayState::Idle,
            adapter: EphemerisAdapter::new(source),
            tracker,
            projector,
            observer: Observer::default(),
            pollution,
            clean: CleanAnimation::new(),
        })
    }

    /// Deliver a successful location fix; transitions Idle -> Tracking.
    ///
    /// The observer is set exactly once per session: a second fix is
    /// ignored.
    pub fn set_observer(&mut self, observer: Observer) {
        match self.state {
            OverlayState::Idle => {
                log::info!(
                    "location fix ({:.4}, {:.4}), entering Tracking",
                    observer.latitude_deg,
                    observer.longitude_deg
                );
                self.observer = observer;
                self.state = OverlayState::Tracking { frames_rendered: 0 };
            }
            OverlayState::Tracking { .. } => {
                log::warn!("ignoring location fix while tracking");
            }
        }
    }

    /// Location denial fallback: proceed with the default (0, 0, 0) site
    /// rather than blocking indefinitely.
    pub fn use_default_observer(&mut self) {
        log::warn!("geolocation denied, falling back to default observer");
        self.set_observer(Observer::default());
    }

    /// Deliver a raw orientation sample to the tracker.
    pub fn on_orientation_sample(&mut self, sample: &OrientationSample) {
        self.tracker.on_sample(sample);
    }

    /// Slider surface: set the pollution level in percent (0-100).
    pub fn set_pollution_percent(&mut self, percent: u8) {
        self.pollution = Pollution::from_percent(percent);
    }

    /// Current pollution level in [0, 1].
    pub fn pollution(&self) -> f64 {
        self.pollution.value()
    }

    /// Begin the clean animation. Idempotent.
    pub fn start_clean(&mut self) {
        self.clean.start();
    }

    /// Advance the clean animation one timer tick. Returns `true` while it
    /// keeps running.
    pub fn tick_clean(&mut self) -> bool {
        self.clean.tick(&mut self.pollution)
    }

    /// Current engine state.
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Current device pointing direction.
    pub fn pointing(&self) -> Pointing {
        self.tracker.current()
    }

    /// Engine configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Render one frame at `instant`, emitting draw instructions.
    ///
    /// Any single object's ephemeris failure is skipped without aborting
    /// the frame. In Idle the frame is empty.
    pub fn render_frame(&mut self, instant: OffsetDateTime) -> Vec<DrawInstruction> {
        let frames_rendered = match self.state {
            OverlayState::Idle => {
                log::debug!("render_frame while Idle, emitting nothing");
                return Vec::new();
            }
            OverlayState::Tracking { frames_rendered } => frames_rendered,
        };

        // Snapshot for the whole frame; sensor callbacks land between
        // frames, never inside one.
        let pointing = self.tracker.current();
        let pollution = self.pollution.value();

        let mut draw_list = Vec::new();

        for star in BRIGHT_STARS {
            let Some(position) =
                self.adapter
                    .horizontal_position(&star.target(), instant, &self.observer)
            else {
                continue;
            };
            if !position.is_above_horizon() {
                continue;
            }
            let Some(point) = self.projector.project(&position, &pointing) else {
                continue;
            };

            draw_list.push(DrawInstruction::Star {
                name: star.name,
                x: point.x,
                y: point.y,
                size: visibility::marker_size(star.magnitude),
                opacity: visibility::star_opacity(star.magnitude, pollution),
            });
        }

        if let Some(position) =
            self.adapter
                .horizontal_position(&Target::Moon, instant, &self.observer)
        {
            if position.is_above_horizon() {
                if let Some(point) = self.projector.project(&position, &pointing) {
                    draw_list.push(DrawInstruction::Moon {
                        x: point.x,
                        y: point.y,
                        radius: MOON_RADIUS_PX,
                        opacity: visibility::moon_opacity(pollution),
                    });
                }
            }
        }

        draw_list.push(DrawInstruction::Reticle {
            x: self.config.viewport_width / 2.0,
            y: self.config.viewport_height / 2.0,
            radius: RETICLE_RADIUS_PX,
        });

        let haze = visibility::haze_alpha(pollution);
        if haze > HAZE_ALPHA_CUTOFF {
            draw_list.push(DrawInstruction::Haze { alpha: haze });
        }

        self.state = OverlayState::Tracking {
            frames_rendered: frames_rendered + 1,
        };

        draw_list
    }
}
