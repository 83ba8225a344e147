//! Engine configuration.
//!
//! # Design
//!
//! One flat struct holds every tunable of the engine.  `Default` reproduces
//! the map screen defaults: a 2 km collision radius, a
//! 0.01 rad animation step per frame, 64-step circles, and the marker starting
//! at the centre of Assam.  Applications typically load it from JSON (with
//! the `serde` feature) and hand it to the session builder, which calls
//! [`HazardConfig::validate`].

use std::f64::consts::TAU;
use std::time::Duration;

use crate::{GeoPoint, HzError, HzResult};

// ── AlertLabels ───────────────────────────────────────────────────────────────

/// Display strings used when formatting alert banners.
///
/// The UI normally supplies translated strings; the defaults are English.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertLabels {
    pub restricted_area: String,
    pub disaster_alert:  String,
    pub severity:        String,
    pub landslide_alert: String,
    /// Shown when a drop lands outside every hazard.
    pub safe_zone:       String,
}

impl Default for AlertLabels {
    fn default() -> Self {
        Self {
            restricted_area: "Restricted Area".to_string(),
            disaster_alert:  "Disaster Alert".to_string(),
            severity:        "Severity".to_string(),
            landslide_alert: "Landslide Alert".to_string(),
            safe_zone:       "You are in a safe zone.".to_string(),
        }
    }
}

// ── HazardConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardConfig {
    /// Collision radius applied to every point hazard, in kilometres.  The
    /// static reference circles are drawn with the same radius.
    pub collision_radius_km: f64,

    /// Phase increment per animation frame, in radians.
    pub animation_step_rad: f64,

    /// Delay between animation frames in milliseconds (≈ display refresh).
    pub frame_interval_ms: u64,

    /// Number of vertices used to approximate each hazard circle.
    pub circle_steps: usize,

    /// Re-fetch the hazard feeds every N seconds.  `None` fetches once at
    /// start-up.
    pub refresh_interval_secs: Option<u64>,

    /// Where the draggable marker starts.
    pub initial_marker: GeoPoint,

    pub labels: AlertLabels,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            collision_radius_km:   2.0,
            animation_step_rad:    0.01,
            frame_interval_ms:     16,
            circle_steps:          64,
            refresh_interval_secs: None,
            initial_marker:        GeoPoint::new(92.9376, 26.2006),
            labels:                AlertLabels::default(),
        }
    }
}

impl HazardConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> HzResult<()> {
        if !(self.collision_radius_km.is_finite() && self.collision_radius_km > 0.0) {
            return Err(HzError::Config(format!(
                "collision_radius_km must be a positive number, got {}",
                self.collision_radius_km
            )));
        }
        if !(self.animation_step_rad.is_finite()
            && self.animation_step_rad > 0.0
            && self.animation_step_rad < TAU)
        {
            return Err(HzError::Config(format!(
                "animation_step_rad must be in (0, 2π), got {}",
                self.animation_step_rad
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(HzError::Config("frame_interval_ms must be at least 1".into()));
        }
        if self.circle_steps < 3 {
            return Err(HzError::Config(format!(
                "circle_steps must be at least 3, got {}",
                self.circle_steps
            )));
        }
        if self.refresh_interval_secs == Some(0) {
            return Err(HzError::Config("refresh_interval_secs must be at least 1".into()));
        }
        if !self.initial_marker.is_valid() {
            return Err(HzError::InvalidCoordinate {
                lon: self.initial_marker.lon,
                lat: self.initial_marker.lat,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    #[inline]
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs.map(Duration::from_secs)
    }
}
