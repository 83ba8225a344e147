//! Match and notification payload types.

use serde::{Serialize, Serializer};

use hz_core::{GeoPoint, HazardKind};

/// One hazard the query point collided with.  Produced fresh per query.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardMatch {
    pub kind:            HazardKind,
    /// Line shown in the alert banner.
    pub display_message: String,
    /// Payload for the notification service.
    pub notification:    NotificationRequest,
}

/// Request handed to the external notification service.
///
/// Serialises as
/// `{ "hazardKind": "sachet", "message": "...", "location": { "type": "Point", ... } }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(serialize_with = "notification_kind")]
    pub hazard_kind: HazardKind,
    pub message:     String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location:    Option<NotificationLocation>,
}

/// A GeoJSON-style point with a human-readable address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NotificationLocation {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    /// `[lon, lat]`.
    pub coordinates:   [f64; 2],
    pub address:       String,
}

impl NotificationLocation {
    pub fn point(at: GeoPoint, address: impl Into<String>) -> Self {
        Self {
            geometry_type: "Point",
            coordinates:   [at.lon, at.lat],
            address:       address.into(),
        }
    }
}

fn notification_kind<S: Serializer>(kind: &HazardKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.notification_kind())
}
