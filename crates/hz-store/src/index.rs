//! Spatial index over point hazards.
//!
//! # Design
//!
//! An R-tree (via `rstar`) holds one `[lon, lat]` entry per disaster and
//! landslide hazard.  A radius query is turned into the exact lon/lat
//! bounding window of the spherical cap around the query point, so the
//! window never cuts off a hazard that lies within the radius:
//!
//! ```text
//! Δlat = r / R
//! Δlon = asin( sin(r / R) / cos(lat) )
//! ```
//!
//! Windows that cross the antimeridian are split in two; caps that reach a
//! pole widen to the full longitude band.  The index only pre-filters; the
//! caller still applies the exact great-circle test.

use rstar::{RTree, RTreeObject, AABB};

use hz_core::{EARTH_RADIUS_KM, GeoPoint};

use crate::records::{DisasterHazard, LandslideHazard};

/// Window padding in degrees (≈ 1 cm) absorbing floating-point rounding.
const WINDOW_PAD_DEG: f64 = 1e-7;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Slot {
    Disaster(u32),
    Landslide(u32),
}

/// Entry stored in the R-tree: a `[lon, lat]` point and the hazard it
/// stands for.
#[derive(Clone, Debug)]
struct HazardEntry {
    point: [f64; 2],
    slot:  Slot,
}

impl RTreeObject for HazardEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Candidates ────────────────────────────────────────────────────────────────

/// Store-order indices of point hazards that may lie within a radius.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Indices into `HazardSnapshot::disasters`, ascending.
    pub disasters:  Vec<usize>,
    /// Indices into `HazardSnapshot::landslides`, ascending.
    pub landslides: Vec<usize>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool {
        self.disasters.is_empty() && self.landslides.is_empty()
    }
}

// ── PointHazardIndex ──────────────────────────────────────────────────────────

/// Bulk-loaded R-tree over the point hazards of one snapshot.
pub struct PointHazardIndex {
    tree: RTree<HazardEntry>,
}

impl PointHazardIndex {
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load the index, O(N log N).
    pub fn build(disasters: &[DisasterHazard], landslides: &[LandslideHazard]) -> Self {
        let mut entries = Vec::with_capacity(disasters.len() + landslides.len());
        entries.extend(disasters.iter().enumerate().map(|(i, d)| HazardEntry {
            point: [d.center.lon, d.center.lat],
            slot:  Slot::Disaster(i as u32),
        }));
        entries.extend(landslides.iter().enumerate().map(|(i, l)| HazardEntry {
            point: [l.center.lon, l.center.lat],
            slot:  Slot::Landslide(i as u32),
        }));
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// All hazards whose centre falls inside the bounding window of the
    /// spherical cap of `radius_km` around `center`.
    pub fn candidates(&self, center: GeoPoint, radius_km: f64) -> Candidates {
        let mut out = Candidates::default();
        if self.is_empty() {
            return out;
        }
        for window in search_windows(center, radius_km) {
            for entry in self.tree.locate_in_envelope(&window) {
                match entry.slot {
                    Slot::Disaster(i)  => out.disasters.push(i as usize),
                    Slot::Landslide(i) => out.landslides.push(i as usize),
                }
            }
        }
        // Split windows never overlap, but tree order is arbitrary.
        out.disasters.sort_unstable();
        out.landslides.sort_unstable();
        out
    }
}

impl Default for PointHazardIndex {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lon/lat windows covering the spherical cap of `radius_km` around `center`.
fn search_windows(center: GeoPoint, radius_km: f64) -> Vec<AABB<[f64; 2]>> {
    let delta = radius_km / EARTH_RADIUS_KM;
    let d_lat = delta.to_degrees() + WINDOW_PAD_DEG;
    let min_lat = center.lat - d_lat;
    let max_lat = center.lat + d_lat;

    let full_band = || vec![AABB::from_corners([-180.0, min_lat.max(-90.0)], [180.0, max_lat.min(90.0)])];

    // The cap contains a pole: every longitude is reachable.
    if max_lat >= 90.0 || min_lat <= -90.0 {
        return full_band();
    }

    let ratio = delta.sin() / center.lat.to_radians().cos();
    if ratio >= 1.0 {
        return full_band();
    }
    let d_lon = ratio.asin().to_degrees() + WINDOW_PAD_DEG;
    let west = center.lon - d_lon;
    let east = center.lon + d_lon;

    if west < -180.0 {
        vec![
            AABB::from_corners([west + 360.0, min_lat], [180.0, max_lat]),
            AABB::from_corners([-180.0, min_lat], [east, max_lat]),
        ]
    } else if east > 180.0 {
        vec![
            AABB::from_corners([west, min_lat], [180.0, max_lat]),
            AABB::from_corners([-180.0, min_lat], [east - 360.0, max_lat]),
        ]
    } else {
        vec![AABB::from_corners([west, min_lat], [east, max_lat])]
    }
}
