//! Hazard feed records.
//!
//! # Feed formats
//!
//! Disaster ("Sachet") feed: a JSON array of:
//!
//! ```json
//! { "centroid": "92.94,26.20", "area_description": "Flood Zone", "severity": "High" }
//! ```
//!
//! Landslide feed: a JSON array of:
//!
//! ```json
//! { "lat": 26.30, "lon": 92.94, "state": "Assam", "district": "Dima Hasao",
//!   "location": "Haflong", "status": "Active" }
//! ```
//!
//! Records are validated one at a time.  A record whose coordinates are
//! missing or unparseable is dropped and counted; it never fails the batch.
//! Text fields tolerate numbers and `null`; `lat`/`lon` tolerate numeric
//! strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use hz_core::{GeoPoint, HzError, HzResult};

// ── Typed hazards ─────────────────────────────────────────────────────────────

/// A disaster-alert point hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct DisasterHazard {
    pub center:           GeoPoint,
    pub area_description: String,
    pub severity:         String,
}

/// A landslide-risk point hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct LandslideHazard {
    pub center:   GeoPoint,
    pub state:    String,
    pub district: String,
    pub location: String,
    pub status:   String,
}

/// Output of a batch parse: the records that validated plus how many were
/// dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub items:   Vec<T>,
    pub dropped: usize,
}

// ── Raw records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawDisaster {
    #[serde(default)]
    centroid:         Option<String>,
    #[serde(default)]
    area_description: Text,
    #[serde(default)]
    severity:         Text,
}

#[derive(Deserialize)]
struct RawLandslide {
    #[serde(default)]
    lat:      Coordinate,
    #[serde(default)]
    lon:      Coordinate,
    #[serde(default)]
    state:    Text,
    #[serde(default)]
    district: Text,
    #[serde(default)]
    location: Text,
    #[serde(default)]
    status:   Text,
}

/// A JSON scalar read as text.  `null` becomes the empty string.
#[derive(Default)]
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Text(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Null      => String::new(),
            other            => other.to_string(),
        }))
    }
}

/// A coordinate that may arrive as a number or a numeric string.
#[derive(Default)]
struct Coordinate(Option<f64>);

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Coordinate(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _                => None,
        }))
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a `"lon,lat"` centroid string.
///
/// Whitespace around either number is ignored.  Anything other than exactly
/// two finite, in-range numbers is a [`HzError::Parse`] or
/// [`HzError::InvalidCoordinate`].
pub fn parse_centroid(raw: &str) -> HzResult<GeoPoint> {
    let mut parts = raw.split(',');
    let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(HzError::Parse(format!("centroid {raw:?} is not \"lon,lat\"")));
    };
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| HzError::Parse(format!("bad longitude in centroid {raw:?}")))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| HzError::Parse(format!("bad latitude in centroid {raw:?}")))?;
    GeoPoint::try_new(lon, lat)
}

impl DisasterHazard {
    /// Validate one raw feed record.  `None` means the record is excluded.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = match RawDisaster::deserialize(value) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "dropping malformed disaster record");
                return None;
            }
        };
        let Some(centroid) = raw.centroid else {
            debug!("dropping disaster record without centroid");
            return None;
        };
        match parse_centroid(&centroid) {
            Ok(center) => Some(DisasterHazard {
                center,
                area_description: raw.area_description.0,
                severity:         raw.severity.0,
            }),
            Err(e) => {
                debug!(error = %e, "dropping disaster record");
                None
            }
        }
    }
}

impl LandslideHazard {
    /// Validate one raw feed record.  `None` means the record is excluded.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = match RawLandslide::deserialize(value) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "dropping malformed landslide record");
                return None;
            }
        };
        let (Some(lat), Some(lon)) = (raw.lat.0, raw.lon.0) else {
            debug!("dropping landslide record without lat/lon");
            return None;
        };
        match GeoPoint::try_new(lon, lat) {
            Ok(center) => Some(LandslideHazard {
                center,
                state:    raw.state.0,
                district: raw.district.0,
                location: raw.location.0,
                status:   raw.status.0,
            }),
            Err(e) => {
                debug!(error = %e, "dropping landslide record");
                None
            }
        }
    }
}

/// Parse a disaster feed batch, preserving feed order.
pub fn parse_disasters(raw: &[Value]) -> Parsed<DisasterHazard> {
    let items: Vec<_> = raw.iter().filter_map(DisasterHazard::from_value).collect();
    Parsed { dropped: raw.len() - items.len(), items }
}

/// Parse a landslide feed batch, preserving feed order.
pub fn parse_landslides(raw: &[Value]) -> Parsed<LandslideHazard> {
    let items: Vec<_> = raw.iter().filter_map(LandslideHazard::from_value).collect();
    Parsed { dropped: raw.len() - items.len(), items }
}
