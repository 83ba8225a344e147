//! Alert text for each hazard kind.
//!
//! Banner lines use the configurable [`AlertLabels`]; notification texts are
//! fixed English templates, matching what the notification service stores.

use hz_core::{AlertLabels, GeoPoint, HazardKind};
use hz_store::{DisasterHazard, LandslideHazard, RestrictedArea};

use crate::{HazardMatch, NotificationLocation, NotificationRequest};

/// Match for a restricted area containing `point`.
///
/// The banner keeps an empty name for anonymous areas; the notification
/// falls back to "Unknown area" / "Restricted Area".  The notification is
/// located at the query point, not at the area.
pub fn restricted_area_match(area: &RestrictedArea, point: GeoPoint, labels: &AlertLabels) -> HazardMatch {
    let name = area.name.as_deref();
    HazardMatch {
        kind:            HazardKind::RestrictedArea,
        display_message: format!("{}: {}", labels.restricted_area, area.display_name()),
        notification:    NotificationRequest {
            hazard_kind: HazardKind::RestrictedArea,
            message:     format!(
                "You have entered a restricted area: {}. Please move to a safe location.",
                name.unwrap_or("Unknown area")
            ),
            location:    Some(NotificationLocation::point(point, name.unwrap_or("Restricted Area"))),
        },
    }
}

pub fn disaster_match(hazard: &DisasterHazard, labels: &AlertLabels) -> HazardMatch {
    let address = if hazard.area_description.is_empty() {
        "Alert Area"
    } else {
        hazard.area_description.as_str()
    };
    HazardMatch {
        kind:            HazardKind::Disaster,
        display_message: format!(
            "{}: {}, {}: {}",
            labels.disaster_alert, hazard.area_description, labels.severity, hazard.severity
        ),
        notification:    NotificationRequest {
            hazard_kind: HazardKind::Disaster,
            message:     format!(
                "Disaster alert in your area: {}. Severity level: {}. Please take necessary precautions.",
                hazard.area_description, hazard.severity
            ),
            location:    Some(NotificationLocation::point(hazard.center, address)),
        },
    }
}

pub fn landslide_match(hazard: &LandslideHazard, labels: &AlertLabels) -> HazardMatch {
    HazardMatch {
        kind:            HazardKind::Landslide,
        display_message: format!(
            "{}: {}, {}, {}, {}",
            labels.landslide_alert, hazard.state, hazard.district, hazard.location, hazard.status
        ),
        notification:    NotificationRequest {
            hazard_kind: HazardKind::Landslide,
            message:     format!(
                "Landslide hazard detected at your location. Area: {}, {}, {}. Status: {}. \
                 Please avoid this area and move to safety.",
                hazard.location, hazard.district, hazard.state, hazard.status
            ),
            location:    Some(NotificationLocation::point(
                hazard.center,
                format!("{}, {}, {}", hazard.location, hazard.district, hazard.state),
            )),
        },
    }
}
