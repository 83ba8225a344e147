//! Geographic coordinate type and spherical-earth utilities.
//!
//! `GeoPoint` stores `f64` longitude/latitude in GeoJSON order (`lon`
//! first).  All distances are great-circle distances on a sphere of radius
//! [`EARTH_RADIUS_KM`], which is what the hazard feeds and the rendering
//! surface assume as well.

use crate::{HzError, HzResult};

/// Mean Earth radius in kilometres (IUGG value, matches the map tooling).
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// A WGS-84 geographic coordinate.
///
/// Note the argument order of [`GeoPoint::new`]: longitude first, latitude
/// second, the same as a GeoJSON position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Construct a point, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(lon: f64, lat: f64) -> HzResult<Self> {
        let p = Self { lon, lat };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(HzError::InvalidCoordinate { lon, lat })
        }
    }

    /// `true` when both coordinates are finite and inside
    /// lon ∈ [-180, 180], lat ∈ [-90, 90].
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// The point reached by travelling `distance_km` from `self` along the
    /// initial bearing `bearing_deg` (clockwise from north).
    ///
    /// The returned longitude is normalised to [-180, 180].
    pub fn destination(self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let delta = distance_km / EARTH_RADIUS_KM;
        let theta = bearing_deg.to_radians();
        let phi1 = self.lat.to_radians();
        let lambda1 = self.lon.to_radians();

        let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
        let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

        GeoPoint {
            lon: normalize_lon(lambda2.to_degrees()),
            lat: phi2.to_degrees(),
        }
    }

    /// A closed ring of `steps + 1` points approximating the circle of
    /// radius `radius_km` around `self`.
    ///
    /// Vertices are emitted counter-clockwise (GeoJSON exterior ring
    /// winding) and the first vertex is repeated at the end.  `steps` below
    /// 3 is raised to 3.
    pub fn circle(self, radius_km: f64, steps: usize) -> Vec<GeoPoint> {
        let steps = steps.max(3);
        let mut ring = Vec::with_capacity(steps + 1);
        for i in 0..steps {
            let bearing = -(i as f64) * 360.0 / steps as f64;
            ring.push(self.destination(bearing, radius_km));
        }
        ring.push(ring[0]);
        ring
    }
}

/// Wrap a longitude in degrees into [-180, 180].
pub fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 { 180.0 } else { wrapped }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── geo-types interop ─────────────────────────────────────────────────────────

impl From<GeoPoint> for ::geo::Coord<f64> {
    #[inline]
    fn from(p: GeoPoint) -> Self {
        ::geo::Coord { x: p.lon, y: p.lat }
    }
}

impl From<GeoPoint> for ::geo::Point<f64> {
    #[inline]
    fn from(p: GeoPoint) -> Self {
        ::geo::Point::new(p.lon, p.lat)
    }
}

impl From<::geo::Coord<f64>> for GeoPoint {
    #[inline]
    fn from(c: ::geo::Coord<f64>) -> Self {
        GeoPoint { lon: c.x, lat: c.y }
    }
}
