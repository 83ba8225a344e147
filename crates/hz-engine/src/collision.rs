//! The `CollisionEngine`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{trace, warn};

use hz_core::{AlertLabels, GeoPoint, HazardConfig};
use hz_store::{HazardSnapshot, RestrictedArea};

use crate::HazardMatch;
use crate::message::{disaster_match, landslide_match, restricted_area_match};

/// Tests a query point against restricted areas (exact containment) and
/// point hazards (fixed great-circle radius).
///
/// The radius is fixed at construction.  Nothing about rendering, in
/// particular the animation phase, feeds into it.
#[derive(Clone, Debug)]
pub struct CollisionEngine {
    radius_km: f64,
    labels:    AlertLabels,
}

impl CollisionEngine {
    pub fn new(config: &HazardConfig) -> Self {
        Self {
            radius_km: config.collision_radius_km,
            labels:    config.labels.clone(),
        }
    }

    /// Engine with the given radius and default English labels.
    pub fn with_radius(radius_km: f64) -> Self {
        Self { radius_km, labels: AlertLabels::default() }
    }

    #[inline]
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn labels(&self) -> &AlertLabels {
        &self.labels
    }

    /// Every hazard `point` collides with.
    ///
    /// Order: restricted areas, then disasters, then landslides, each in
    /// store order.  Overlapping hazards each produce their own match.
    /// Distance comparisons are inclusive.  An empty snapshot, or an
    /// invalid `point`, yields an empty list.
    pub fn evaluate(
        &self,
        point:            GeoPoint,
        snapshot:         &HazardSnapshot,
        restricted_areas: &[RestrictedArea],
    ) -> Vec<HazardMatch> {
        if !point.is_valid() {
            warn!(%point, "ignoring collision query with invalid coordinates");
            return Vec::new();
        }

        let mut matches: Vec<HazardMatch> = restricted_areas
            .iter()
            .filter(|area| area.contains(point))
            .map(|area| restricted_area_match(area, point, &self.labels))
            .collect();

        // R-tree pre-filter, then the exact haversine test.
        let candidates = snapshot.point_candidates(point, self.radius_km);
        let disasters = within_radius(point, self.radius_km, &candidates.disasters, |i| {
            snapshot.disasters[i].center
        });
        let landslides = within_radius(point, self.radius_km, &candidates.landslides, |i| {
            snapshot.landslides[i].center
        });

        matches.extend(disasters.into_iter().map(|i| disaster_match(&snapshot.disasters[i], &self.labels)));
        matches.extend(landslides.into_iter().map(|i| landslide_match(&snapshot.landslides[i], &self.labels)));

        trace!(
            %point,
            generation = snapshot.generation,
            matches    = matches.len(),
            "collision query evaluated"
        );
        matches
    }

    /// [`evaluate`](Self::evaluate) against the snapshot's own restricted
    /// areas.
    pub fn evaluate_snapshot(&self, point: GeoPoint, snapshot: &HazardSnapshot) -> Vec<HazardMatch> {
        self.evaluate(point, snapshot, &snapshot.restricted_areas)
    }
}

impl Default for CollisionEngine {
    fn default() -> Self {
        Self::new(&HazardConfig::default())
    }
}

/// Indices (kept in ascending order) whose centre is within `radius_km`.
#[cfg(not(feature = "parallel"))]
fn within_radius(
    point:     GeoPoint,
    radius_km: f64,
    indices:   &[usize],
    center:    impl Fn(usize) -> GeoPoint,
) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .filter(|&i| point.distance_km(center(i)) <= radius_km)
        .collect()
}

/// Indices (kept in ascending order) whose centre is within `radius_km`.
#[cfg(feature = "parallel")]
fn within_radius(
    point:     GeoPoint,
    radius_km: f64,
    indices:   &[usize],
    center:    impl Fn(usize) -> GeoPoint + Sync,
) -> Vec<usize> {
    // Rayon's collect keeps the source order.
    indices
        .par_iter()
        .copied()
        .filter(|&i| point.distance_km(center(i)) <= radius_km)
        .collect()
}
