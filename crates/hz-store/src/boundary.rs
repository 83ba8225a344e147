//! Restricted-area boundaries.
//!
//! The boundary file is a GeoJSON `FeatureCollection` fetched once at
//! start-up.  Only `Polygon` and `MultiPolygon` features are kept; anything
//! else is skipped with a warning.  The optional `name` property labels the
//! area in alerts.

use geo::{BoundingRect, Intersects, MultiPolygon, Point, Polygon, Rect};
use geojson::GeoJson;
use tracing::{info, warn};

use hz_core::GeoPoint;

use crate::{StoreError, StoreResult};

/// Polygonal footprint of a restricted area.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl AreaGeometry {
    fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            AreaGeometry::Polygon(p)      => p.bounding_rect(),
            AreaGeometry::MultiPolygon(m) => m.bounding_rect(),
        }
    }

    /// Point-in-polygon test.  Points on a ring count as inside; points in a
    /// hole count as outside.
    fn intersects_point(&self, point: &Point<f64>) -> bool {
        match self {
            AreaGeometry::Polygon(p)      => p.intersects(point),
            AreaGeometry::MultiPolygon(m) => m.intersects(point),
        }
    }
}

/// An administratively restricted zone.
#[derive(Clone, Debug, PartialEq)]
pub struct RestrictedArea {
    /// `None` when the feature has no (or an empty) `name` property.
    pub name:     Option<String>,
    pub geometry: AreaGeometry,
    bbox:         Option<Rect<f64>>,
}

impl RestrictedArea {
    pub fn new(name: Option<String>, geometry: AreaGeometry) -> Self {
        let bbox = geometry.bounding_rect();
        Self { name, geometry, bbox }
    }

    /// The label used in alert banners (empty for anonymous areas).
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Exact containment test.  Deterministic for boundary points (inside).
    pub fn contains(&self, point: GeoPoint) -> bool {
        // Cheap rejection before the ring walk.
        let Some(bbox) = self.bbox else { return false };
        let (min, max) = (bbox.min(), bbox.max());
        if point.lon < min.x || point.lon > max.x || point.lat < min.y || point.lat > max.y {
            return false;
        }
        self.geometry.intersects_point(&Point::from(point))
    }
}

/// Parse the restricted-area boundary document.
///
/// # Errors
///
/// Returns [`StoreError::Boundary`] if the text is not GeoJSON or is not a
/// `FeatureCollection` / `Feature`.  Individual unusable features are
/// skipped, not errors.
pub fn load_restricted_areas(raw: &str) -> StoreResult<Vec<RestrictedArea>> {
    let geojson: GeoJson = raw
        .parse()
        .map_err(|e: geojson::Error| StoreError::Boundary(e.to_string()))?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature)              => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(StoreError::Boundary(
                "expected a FeatureCollection, found a bare geometry".into(),
            ));
        }
    };

    let total = features.len();
    let mut areas = Vec::with_capacity(total);
    for (i, feature) in features.into_iter().enumerate() {
        let name = feature
            .property("name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        let Some(geometry) = feature.geometry else {
            warn!(feature = i, "restricted-area feature has no geometry; skipped");
            continue;
        };
        match convert_geometry(geometry.value) {
            Some(geometry) => areas.push(RestrictedArea::new(name, geometry)),
            None => warn!(feature = i, "restricted-area feature is not a polygon; skipped"),
        }
    }

    info!(loaded = areas.len(), skipped = total - areas.len(), "loaded restricted areas");
    Ok(areas)
}

fn convert_geometry(value: geojson::Value) -> Option<AreaGeometry> {
    match value {
        v @ geojson::Value::Polygon(_) => {
            Polygon::<f64>::try_from(v).ok().map(AreaGeometry::Polygon)
        }
        v @ geojson::Value::MultiPolygon(_) => {
            MultiPolygon::<f64>::try_from(v).ok().map(AreaGeometry::MultiPolygon)
        }
        _ => None,
    }
}
