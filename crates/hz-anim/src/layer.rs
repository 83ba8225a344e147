//! Render layers pushed to the map surface.
//!
//! Three layers make up the hazard view:
//!
//! | Layer                | Source                          | Style                                 |
//! |----------------------|---------------------------------|---------------------------------------|
//! | `restricted-fill`    | restricted-area polygons        | `#f1f100` at 0.4 opacity              |
//! | `static-hazard-fill` | point hazards, scale 1          | `rgba(255,0,0,0.2)`, red outline      |
//! | `hazard-fill`        | point hazards, `2 + sin t`      | `rgba(255,0,0,0.3)`, red outline      |

use geo::{Geometry, LineString, Polygon};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::Value;

use hz_core::{GeoPoint, HazardKind};
use hz_store::{AreaGeometry, DisasterHazard, HazardSnapshot, LandslideHazard, RestrictedArea};

use crate::AnimationPhase;

// ── Identity & style ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    RestrictedFill,
    StaticHazardFill,
    HazardFill,
}

impl LayerId {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::RestrictedFill   => "restricted-fill",
            LayerId::StaticHazardFill => "static-hazard-fill",
            LayerId::HazardFill       => "hazard-fill",
        }
    }

    pub fn style(self) -> LayerStyle {
        match self {
            LayerId::RestrictedFill => LayerStyle {
                fill_color:    "#f1f100",
                fill_opacity:  Some(0.4),
                outline_color: None,
            },
            LayerId::StaticHazardFill => LayerStyle {
                fill_color:    "rgba(255,0,0,0.2)",
                fill_opacity:  None,
                outline_color: Some("red"),
            },
            LayerId::HazardFill => LayerStyle {
                fill_color:    "rgba(255,0,0,0.3)",
                fill_opacity:  None,
                outline_color: Some("red"),
            },
        }
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint hints for a fill layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub fill_color:    &'static str,
    pub fill_opacity:  Option<f64>,
    pub outline_color: Option<&'static str>,
}

// ── Features & layers ─────────────────────────────────────────────────────────

/// One drawable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFeature {
    pub kind:       HazardKind,
    /// Centre of a hazard circle; `None` for restricted areas.
    pub center:     Option<GeoPoint>,
    pub geometry:   Geometry<f64>,
    /// Record fields carried along for map popups.
    pub properties: JsonObject,
}

impl RenderFeature {
    pub fn to_geojson(&self) -> Feature {
        Feature {
            bbox:            None,
            geometry:        Some(geojson::Geometry::new(geojson::Value::from(&self.geometry))),
            id:              None,
            properties:      Some(self.properties.clone()),
            foreign_members: None,
        }
    }
}

/// A full replacement for one map layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderLayer {
    pub id:       LayerId,
    pub style:    LayerStyle,
    pub features: Vec<RenderFeature>,
}

impl RenderLayer {
    pub fn new(id: LayerId, features: Vec<RenderFeature>) -> Self {
        Self { id, style: id.style(), features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The layer's source data as a GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection {
            bbox:            None,
            features:        self.features.iter().map(RenderFeature::to_geojson).collect(),
            foreign_members: None,
        }
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Fill layer for the restricted-area polygons.
pub fn restricted_layer(areas: &[RestrictedArea]) -> RenderLayer {
    let features = areas
        .iter()
        .map(|area| {
            let geometry = match &area.geometry {
                AreaGeometry::Polygon(p)      => Geometry::Polygon(p.clone()),
                AreaGeometry::MultiPolygon(m) => Geometry::MultiPolygon(m.clone()),
            };
            let mut properties = JsonObject::new();
            properties.insert(
                "name".into(),
                area.name.clone().map_or(Value::Null, Value::String),
            );
            RenderFeature { kind: HazardKind::RestrictedArea, center: None, geometry, properties }
        })
        .collect();
    RenderLayer::new(LayerId::RestrictedFill, features)
}

/// Reference circles at the collision radius (scale 1).
pub fn static_layer(snapshot: &HazardSnapshot, radius_km: f64, steps: usize) -> RenderLayer {
    RenderLayer::new(LayerId::StaticHazardFill, hazard_circles(snapshot, radius_km, steps))
}

/// Pulsing circles of radius `base_radius_km * phase.scale()`.
///
/// Radius is twice the base at `t = 0` and three times it at `t = π/2`.
pub fn animated_layer(
    snapshot:       &HazardSnapshot,
    phase:          AnimationPhase,
    base_radius_km: f64,
    steps:          usize,
) -> RenderLayer {
    RenderLayer::new(
        LayerId::HazardFill,
        hazard_circles(snapshot, base_radius_km * phase.scale(), steps),
    )
}

/// One circle per point hazard: disasters first, then landslides.
fn hazard_circles(snapshot: &HazardSnapshot, radius_km: f64, steps: usize) -> Vec<RenderFeature> {
    let disasters = snapshot
        .disasters
        .iter()
        .map(|d| circle_feature(HazardKind::Disaster, d.center, radius_km, steps, disaster_properties(d)));
    let landslides = snapshot
        .landslides
        .iter()
        .map(|l| circle_feature(HazardKind::Landslide, l.center, radius_km, steps, landslide_properties(l)));
    disasters.chain(landslides).collect()
}

fn circle_feature(
    kind:       HazardKind,
    center:     GeoPoint,
    radius_km:  f64,
    steps:      usize,
    properties: JsonObject,
) -> RenderFeature {
    let ring: LineString<f64> = center
        .circle(radius_km, steps)
        .into_iter()
        .map(geo::Coord::from)
        .collect();
    RenderFeature {
        kind,
        center: Some(center),
        geometry: Geometry::Polygon(Polygon::new(ring, Vec::new())),
        properties,
    }
}

fn disaster_properties(d: &DisasterHazard) -> JsonObject {
    let mut p = JsonObject::new();
    p.insert("type".into(), "Sachet".into());
    p.insert("area_description".into(), d.area_description.clone().into());
    p.insert("severity".into(), d.severity.clone().into());
    p
}

fn landslide_properties(l: &LandslideHazard) -> JsonObject {
    let mut p = JsonObject::new();
    p.insert("type".into(), "Landslide".into());
    p.insert("state".into(), l.state.clone().into());
    p.insert("district".into(), l.district.clone().into());
    p.insert("location".into(), l.location.clone().into());
    p.insert("status".into(), l.status.clone().into());
    p
}
