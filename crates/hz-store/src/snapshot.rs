//! The immutable hazard snapshot.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use hz_core::GeoPoint;

use crate::boundary::RestrictedArea;
use crate::index::{Candidates, PointHazardIndex};
use crate::records::{DisasterHazard, LandslideHazard, parse_disasters, parse_landslides};

/// Every hazard known at one instant.
///
/// Built once, never mutated.  Share it as `Arc<HazardSnapshot>`; the
/// animation driver and the collision engine must read the same instance.
pub struct HazardSnapshot {
    /// Restricted areas, shared by every snapshot of a session (the boundary
    /// file is loaded once).
    pub restricted_areas: Arc<[RestrictedArea]>,

    /// Disaster hazards in feed order.
    pub disasters: Vec<DisasterHazard>,

    /// Landslide hazards in feed order.
    pub landslides: Vec<LandslideHazard>,

    /// Monotonic sequence number assigned by the store (0 = initial empty).
    pub generation: u64,

    index: PointHazardIndex,
}

impl HazardSnapshot {
    /// A snapshot with no hazards at all.
    pub fn empty() -> Self {
        Self::from_parts(Arc::from(Vec::new()), Vec::new(), Vec::new())
    }

    /// Parse raw feed batches into a snapshot.
    ///
    /// Records with missing or unparseable coordinates are dropped; the
    /// result contains only valid hazards, in feed order.
    pub fn load(
        raw_disasters:    &[Value],
        raw_landslides:   &[Value],
        restricted_areas: Arc<[RestrictedArea]>,
    ) -> Self {
        let disasters = parse_disasters(raw_disasters);
        let landslides = parse_landslides(raw_landslides);
        if disasters.dropped + landslides.dropped > 0 {
            debug!(
                disasters_dropped  = disasters.dropped,
                landslides_dropped = landslides.dropped,
                "excluded hazard records with bad coordinates"
            );
        }
        Self::from_parts(restricted_areas, disasters.items, landslides.items)
    }

    /// Assemble a snapshot from already-validated hazards and build its
    /// spatial index.
    pub fn from_parts(
        restricted_areas: Arc<[RestrictedArea]>,
        disasters:        Vec<DisasterHazard>,
        landslides:       Vec<LandslideHazard>,
    ) -> Self {
        let index = PointHazardIndex::build(&disasters, &landslides);
        Self { restricted_areas, disasters, landslides, generation: 0, index }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Number of point-hazard warnings (disasters + landslides).
    pub fn warning_count(&self) -> usize {
        self.disasters.len() + self.landslides.len()
    }

    /// `true` when there are no hazards of any kind.
    pub fn is_empty(&self) -> bool {
        self.restricted_areas.is_empty() && self.warning_count() == 0
    }

    /// Point hazards whose centre may lie within `radius_km` of `point`.
    /// See [`PointHazardIndex::candidates`].
    pub fn point_candidates(&self, point: GeoPoint, radius_km: f64) -> Candidates {
        self.index.candidates(point, radius_km)
    }
}

impl Default for HazardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for HazardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HazardSnapshot")
            .field("generation", &self.generation)
            .field("restricted_areas", &self.restricted_areas.len())
            .field("disasters", &self.disasters.len())
            .field("landslides", &self.landslides.len())
            .finish()
    }
}
