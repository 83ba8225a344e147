//! Unit tests for hz-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    const ASSAM: GeoPoint = GeoPoint::new(92.9376, 26.2006);

    #[test]
    fn zero_distance() {
        assert!(ASSAM.distance_km(ASSAM) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km
        let a = GeoPoint::new(92.0, 26.0);
        let b = GeoPoint::new(92.0, 27.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.05, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let b = GeoPoint::new(92.94, 26.30);
        assert!((ASSAM.distance_km(b) - b.distance_km(ASSAM)).abs() < 1e-9);
    }

    #[test]
    fn flood_zone_is_a_quarter_km_away() {
        let d = ASSAM.distance_km(GeoPoint::new(92.94, 26.20));
        assert!(d > 0.2 && d < 0.3, "got {d}");
    }

    #[test]
    fn antipodal_distance_is_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(180.0, 0.0);
        let half = std::f64::consts::PI * crate::EARTH_RADIUS_KM;
        assert!((a.distance_km(b) - half).abs() < 1e-6);
    }

    #[test]
    fn destination_round_trips_distance() {
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 333.0] {
            let p = ASSAM.destination(bearing, 2.0);
            let d = ASSAM.distance_km(p);
            assert!((d - 2.0).abs() < 1e-6, "bearing {bearing}: got {d}");
        }
    }

    #[test]
    fn destination_north_increases_latitude() {
        let p = ASSAM.destination(0.0, 10.0);
        assert!(p.lat > ASSAM.lat);
        assert!((p.lon - ASSAM.lon).abs() < 1e-9);
    }

    #[test]
    fn destination_wraps_antimeridian() {
        let p = GeoPoint::new(179.99, 0.0).destination(90.0, 10.0);
        assert!(p.lon < -179.0, "got {}", p.lon);
        assert!(p.is_valid());
    }

    #[test]
    fn circle_is_closed_with_steps_plus_one_vertices() {
        let ring = ASSAM.circle(2.0, 64);
        assert_eq!(ring.len(), 65);
        assert_eq!(ring.first(), ring.last());
        for v in &ring {
            assert!((ASSAM.distance_km(*v) - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn circle_clamps_degenerate_step_count() {
        assert_eq!(ASSAM.circle(1.0, 0).len(), 4);
    }

    #[test]
    fn validation() {
        assert!(GeoPoint::try_new(92.9, 26.2).is_ok());
        assert!(GeoPoint::try_new(180.0, -90.0).is_ok());
        assert!(GeoPoint::try_new(181.0, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, 90.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn normalize_lon_wraps() {
        assert_eq!(crate::geo::normalize_lon(190.0), -170.0);
        assert_eq!(crate::geo::normalize_lon(-190.0), 170.0);
        assert_eq!(crate::geo::normalize_lon(540.0), 180.0);
        assert_eq!(crate::geo::normalize_lon(12.5), 12.5);
    }

    #[test]
    fn geo_types_conversion() {
        let c: ::geo::Coord<f64> = ASSAM.into();
        assert_eq!(c.x, ASSAM.lon);
        assert_eq!(c.y, ASSAM.lat);
        assert_eq!(GeoPoint::from(c), ASSAM);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod kind {
    use crate::HazardKind;

    #[test]
    fn labels() {
        assert_eq!(HazardKind::RestrictedArea.as_str(), "restricted_area");
        assert_eq!(HazardKind::Disaster.to_string(), "disaster");
        assert_eq!(HazardKind::Disaster.notification_kind(), "sachet");
        assert_eq!(HazardKind::Landslide.notification_kind(), "landslide");
    }

    #[test]
    fn point_hazards() {
        assert!(!HazardKind::RestrictedArea.is_point_hazard());
        assert!(HazardKind::Disaster.is_point_hazard());
        assert!(HazardKind::Landslide.is_point_hazard());
        assert_eq!(HazardKind::all().len(), 3);
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{GeoPoint, HazardConfig, HzError};

    #[test]
    fn defaults_are_valid() {
        let c = HazardConfig::default();
        c.validate().unwrap();
        assert_eq!(c.collision_radius_km, 2.0);
        assert_eq!(c.circle_steps, 64);
        assert_eq!(c.frame_interval(), Duration::from_millis(16));
        assert_eq!(c.refresh_interval(), None);
    }

    #[test]
    fn rejects_bad_radius() {
        let c = HazardConfig { collision_radius_km: 0.0, ..Default::default() };
        assert!(matches!(c.validate(), Err(HzError::Config(_))));
        let c = HazardConfig { collision_radius_km: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_bad_animation_settings() {
        let c = HazardConfig { animation_step_rad: 7.0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = HazardConfig { frame_interval_ms: 0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = HazardConfig { circle_steps: 2, ..Default::default() };
        assert!(c.validate().is_err());
        let c = HazardConfig { refresh_interval_secs: Some(0), ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_invalid_marker() {
        let c = HazardConfig {
            initial_marker: GeoPoint::new(200.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(HzError::InvalidCoordinate { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c: HazardConfig =
            serde_json::from_str(r#"{ "collision_radius_km": 3.5, "labels": { "severity": "Schwere" } }"#)
                .unwrap();
        assert_eq!(c.collision_radius_km, 3.5);
        assert_eq!(c.circle_steps, 64);
        assert_eq!(c.labels.severity, "Schwere");
        assert_eq!(c.labels.disaster_alert, "Disaster Alert");
    }
}
