//! Hazard category enum shared by the store, the collision engine, and the
//! notification pipeline.

/// The category a hazard (and therefore a collision match) belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HazardKind {
    /// Administratively restricted polygon.
    RestrictedArea,
    /// Disaster alert point (the "Sachet" feed).
    Disaster,
    /// Landslide-risk point.
    Landslide,
}

impl HazardKind {
    /// Match-kind label: `restricted_area`, `disaster`, or `landslide`.
    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::RestrictedArea => "restricted_area",
            HazardKind::Disaster       => "disaster",
            HazardKind::Landslide      => "landslide",
        }
    }

    /// Kind string expected by the notification service.  Disaster alerts
    /// are reported under the feed's own name, `sachet`.
    pub fn notification_kind(self) -> &'static str {
        match self {
            HazardKind::RestrictedArea => "restricted_area",
            HazardKind::Disaster       => "sachet",
            HazardKind::Landslide      => "landslide",
        }
    }

    /// `true` for hazards tested by radius rather than polygon containment.
    #[inline]
    pub fn is_point_hazard(self) -> bool {
        !matches!(self, HazardKind::RestrictedArea)
    }

    pub fn all() -> &'static [HazardKind] {
        &[HazardKind::RestrictedArea, HazardKind::Disaster, HazardKind::Landslide]
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
