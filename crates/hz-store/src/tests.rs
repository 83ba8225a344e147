//! Unit tests for hz-store.
//!
//! All tests use inline JSON fixtures so they run without any network.

#[cfg(test)]
mod helpers {
    use serde_json::{Value, json};

    /// Two named squares around central Assam, one anonymous square far to
    /// the west, a square with a hole, and a Point feature that must be
    /// skipped.
    pub const BOUNDARIES: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        { "type": "Feature", "properties": { "name": "Kaziranga Buffer" },
          "geometry": { "type": "Polygon", "coordinates": [[
            [92.90, 26.15], [92.98, 26.15], [92.98, 26.25], [92.90, 26.25], [92.90, 26.15]
          ]] } },
        { "type": "Feature", "properties": {},
          "geometry": { "type": "Polygon", "coordinates": [[
            [10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 11.0], [10.0, 10.0]
          ]] } },
        { "type": "Feature", "properties": { "name": "Ring Range" },
          "geometry": { "type": "MultiPolygon", "coordinates": [[
            [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
            [[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]]
          ]] } },
        { "type": "Feature", "properties": { "name": "Lone Post" },
          "geometry": { "type": "Point", "coordinates": [92.0, 26.0] } }
      ]
    }"#;

    pub fn disasters() -> Vec<Value> {
        vec![
            json!({ "centroid": "92.94,26.20", "area_description": "Flood Zone", "severity": "High" }),
            json!({ "centroid": null, "area_description": "No centre", "severity": "Low" }),
            json!({ "centroid": "abc,def", "area_description": "Garbage", "severity": "Low" }),
            json!({ "centroid": " 91.70 , 26.10 ", "area_description": "Guwahati Flood", "severity": 3 }),
        ]
    }

    pub fn landslides() -> Vec<Value> {
        vec![
            json!({ "lat": 26.30, "lon": 92.94, "state": "Assam", "district": "Nagaon",
                    "location": "Ridge Road", "status": "Active" }),
            json!({ "lat": "25.17", "lon": "93.02", "state": "Assam", "district": "Dima Hasao",
                    "location": "Haflong", "status": null }),
            json!({ "lon": 92.5, "state": "Assam" }),
            json!("not an object"),
        ]
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use serde_json::json;

    use hz_core::{GeoPoint, HzError};

    use crate::{DisasterHazard, LandslideHazard, parse_centroid, parse_disasters, parse_landslides};

    #[test]
    fn centroid_parses_lon_then_lat() {
        assert_eq!(parse_centroid("92.94,26.20").unwrap(), GeoPoint::new(92.94, 26.20));
        assert_eq!(parse_centroid(" -1.5 ,  2 ").unwrap(), GeoPoint::new(-1.5, 2.0));
    }

    #[test]
    fn centroid_rejects_malformed_input() {
        assert!(matches!(parse_centroid(""), Err(HzError::Parse(_))));
        assert!(matches!(parse_centroid("92.94"), Err(HzError::Parse(_))));
        assert!(matches!(parse_centroid("1,2,3"), Err(HzError::Parse(_))));
        assert!(matches!(parse_centroid("x,26.2"), Err(HzError::Parse(_))));
        assert!(matches!(parse_centroid("200,26.2"), Err(HzError::InvalidCoordinate { .. })));
        assert!(parse_centroid("NaN,1").is_err());
    }

    #[test]
    fn disaster_batch_drops_bad_centroids() {
        let parsed = parse_disasters(&super::helpers::disasters());
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.dropped, 2);
        assert_eq!(parsed.items[0].area_description, "Flood Zone");
        assert_eq!(parsed.items[0].severity, "High");
        // Numeric severity is read as text; order is preserved.
        assert_eq!(parsed.items[1].area_description, "Guwahati Flood");
        assert_eq!(parsed.items[1].severity, "3");
        assert_eq!(parsed.items[1].center, GeoPoint::new(91.70, 26.10));
    }

    #[test]
    fn disaster_missing_text_fields_default_to_empty() {
        let d = DisasterHazard::from_value(&json!({ "centroid": "1,2" })).unwrap();
        assert_eq!(d.area_description, "");
        assert_eq!(d.severity, "");
    }

    #[test]
    fn landslide_batch_drops_missing_coordinates() {
        let parsed = parse_landslides(&super::helpers::landslides());
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.dropped, 2);
        assert_eq!(parsed.items[0].center, GeoPoint::new(92.94, 26.30));
        // Numeric strings are accepted; null text becomes empty.
        assert_eq!(parsed.items[1].center, GeoPoint::new(93.02, 25.17));
        assert_eq!(parsed.items[1].status, "");
        assert_eq!(parsed.items[1].location, "Haflong");
    }

    #[test]
    fn landslide_zero_coordinate_is_not_missing() {
        let l = LandslideHazard::from_value(&json!({ "lat": 0.0, "lon": 0.0 })).unwrap();
        assert_eq!(l.center, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn landslide_out_of_range_is_dropped() {
        assert!(LandslideHazard::from_value(&json!({ "lat": 95.0, "lon": 10.0 })).is_none());
        assert!(LandslideHazard::from_value(&json!({ "lat": "north", "lon": 10.0 })).is_none());
    }
}

// ── Boundaries ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use hz_core::GeoPoint;

    use crate::{StoreError, load_restricted_areas};

    #[test]
    fn loads_polygons_and_skips_points() {
        let areas = load_restricted_areas(super::helpers::BOUNDARIES).unwrap();
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0].name.as_deref(), Some("Kaziranga Buffer"));
        assert_eq!(areas[1].name, None);
        assert_eq!(areas[1].display_name(), "");
        assert_eq!(areas[2].display_name(), "Ring Range");
    }

    #[test]
    fn containment() {
        let areas = load_restricted_areas(super::helpers::BOUNDARIES).unwrap();
        let buffer = &areas[0];
        assert!(buffer.contains(GeoPoint::new(92.9376, 26.2006)));
        assert!(!buffer.contains(GeoPoint::new(92.99, 26.2006)));
        // Antipode of the Assam centre.
        assert!(!buffer.contains(GeoPoint::new(-87.0624, -26.2006)));
    }

    #[test]
    fn boundary_points_are_inside_and_deterministic() {
        let areas = load_restricted_areas(super::helpers::BOUNDARIES).unwrap();
        let edge = GeoPoint::new(92.90, 26.20);
        let first = areas[0].contains(edge);
        assert!(first);
        for _ in 0..10 {
            assert_eq!(areas[0].contains(edge), first);
        }
    }

    #[test]
    fn holes_are_outside() {
        let areas = load_restricted_areas(super::helpers::BOUNDARIES).unwrap();
        let ring = &areas[2];
        assert!(ring.contains(GeoPoint::new(0.5, 0.5)));
        assert!(!ring.contains(GeoPoint::new(2.0, 2.0)));
    }

    #[test]
    fn single_feature_document_is_accepted() {
        let raw = r#"{ "type": "Feature", "properties": { "name": "" },
            "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] } }"#;
        let areas = load_restricted_areas(raw).unwrap();
        assert_eq!(areas.len(), 1);
        // Empty names are treated as anonymous.
        assert_eq!(areas[0].name, None);
    }

    #[test]
    fn rejects_non_geojson() {
        assert!(matches!(load_restricted_areas("not json"), Err(StoreError::Boundary(_))));
        let bare = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        assert!(matches!(load_restricted_areas(bare), Err(StoreError::Boundary(_))));
    }
}

// ── Spatial index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use hz_core::GeoPoint;

    use crate::{DisasterHazard, LandslideHazard, PointHazardIndex};

    fn disaster(lon: f64, lat: f64) -> DisasterHazard {
        DisasterHazard {
            center:           GeoPoint::new(lon, lat),
            area_description: String::new(),
            severity:         String::new(),
        }
    }

    fn landslide(lon: f64, lat: f64) -> LandslideHazard {
        LandslideHazard {
            center:   GeoPoint::new(lon, lat),
            state:    String::new(),
            district: String::new(),
            location: String::new(),
            status:   String::new(),
        }
    }

    #[test]
    fn empty_index_has_no_candidates() {
        let idx = PointHazardIndex::empty();
        assert!(idx.is_empty());
        assert!(idx.candidates(GeoPoint::new(0.0, 0.0), 2.0).is_empty());
    }

    #[test]
    fn near_hazards_are_candidates_in_store_order() {
        let ds = vec![disaster(92.95, 26.20), disaster(50.0, 0.0), disaster(92.94, 26.20)];
        let ls = vec![landslide(92.94, 26.30), landslide(92.938, 26.201)];
        let idx = PointHazardIndex::build(&ds, &ls);
        assert_eq!(idx.len(), 5);

        let c = idx.candidates(GeoPoint::new(92.9376, 26.2006), 2.0);
        assert_eq!(c.disasters, vec![0, 2]);
        // (92.94, 26.30) is ~11 km north: outside the 2 km window.
        assert_eq!(c.landslides, vec![1]);
    }

    #[test]
    fn window_never_misses_a_hazard_inside_the_radius() {
        let center = GeoPoint::new(92.9376, 26.2006);
        let ds: Vec<_> = (0..72)
            .map(|i| {
                let p = center.destination(i as f64 * 5.0, 1.999_999);
                disaster(p.lon, p.lat)
            })
            .collect();
        let idx = PointHazardIndex::build(&ds, &[]);
        let c = idx.candidates(center, 2.0);
        assert_eq!(c.disasters.len(), 72);
    }

    #[test]
    fn antimeridian_window_is_split() {
        let ds = vec![disaster(-179.995, 0.0), disaster(179.995, 0.0), disaster(170.0, 0.0)];
        let idx = PointHazardIndex::build(&ds, &[]);
        let c = idx.candidates(GeoPoint::new(180.0, 0.0), 2.0);
        assert_eq!(c.disasters, vec![0, 1]);
    }

    #[test]
    fn polar_cap_covers_every_longitude() {
        let ds = vec![disaster(0.0, 89.995), disaster(179.0, 89.995), disaster(0.0, 80.0)];
        let idx = PointHazardIndex::build(&ds, &[]);
        let c = idx.candidates(GeoPoint::new(-90.0, 89.999), 2.0);
        assert_eq!(c.disasters, vec![0, 1]);
    }
}

// ── Snapshot & store ──────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use std::sync::{Arc, Mutex};

    use serde_json::{Value, json};

    use crate::{
        FeedBatch, FeedName, FeedOutcome, HazardFeed, HazardSnapshot, HazardStore, StoreError,
        StoreResult, load_restricted_areas,
    };

    fn ok_batch() -> FeedBatch {
        FeedBatch {
            disasters:  Ok(super::helpers::disasters()),
            landslides: Ok(super::helpers::landslides()),
        }
    }

    fn network_error(feed: FeedName) -> StoreError {
        StoreError::fetch(feed, "connection refused")
    }

    #[test]
    fn snapshot_load_filters_bad_records() {
        let snap = HazardSnapshot::load(
            &super::helpers::disasters(),
            &super::helpers::landslides(),
            Arc::from(Vec::new()),
        );
        assert_eq!(snap.disasters.len(), 2);
        assert_eq!(snap.landslides.len(), 2);
        assert_eq!(snap.warning_count(), 4);
        assert!(!snap.is_empty());
    }

    #[test]
    fn new_store_serves_an_empty_snapshot() {
        let store = HazardStore::empty();
        let snap = store.current();
        assert!(snap.is_empty());
        assert_eq!(snap.generation, 0);
    }

    #[test]
    fn restricted_areas_are_shared_by_every_snapshot() {
        let areas = load_restricted_areas(super::helpers::BOUNDARIES).unwrap();
        let store = HazardStore::new(areas);
        let before = store.current();
        store.ingest(ok_batch());
        let after = store.current();
        assert_eq!(after.restricted_areas.len(), 3);
        assert!(Arc::ptr_eq(&before.restricted_areas, &after.restricted_areas));
    }

    #[test]
    fn readers_share_one_snapshot_instance() {
        let store = HazardStore::empty();
        store.ingest(ok_batch());
        assert!(Arc::ptr_eq(&store.current(), &store.current()));
    }

    #[test]
    fn successful_ingest_replaces_both_lists() {
        let store = HazardStore::empty();
        let report = store.ingest(ok_batch());
        assert!(report.is_complete());
        assert_eq!(report.generation, 1);
        assert_eq!(report.disasters, FeedOutcome::Replaced { kept: 2, dropped: 2 });

        let next = FeedBatch {
            disasters:  Ok(vec![json!({ "centroid": "1,1", "area_description": "x", "severity": "y" })]),
            landslides: Ok(Vec::new()),
        };
        let report = store.ingest(next);
        assert_eq!(report.generation, 2);
        let snap = store.current();
        assert_eq!(snap.disasters.len(), 1);
        assert!(snap.landslides.is_empty());
    }

    #[test]
    fn failed_disaster_fetch_keeps_previous_disasters() {
        let store = HazardStore::empty();
        store.ingest(ok_batch());
        let old_disasters = store.current().disasters.clone();

        let report = store.ingest(FeedBatch {
            disasters:  Err(network_error(FeedName::Disasters)),
            landslides: Ok(vec![json!({ "lat": 1.0, "lon": 2.0 })]),
        });
        assert!(matches!(report.disasters, FeedOutcome::Retained { .. }));
        assert!(report.landslides.is_replaced());
        assert!(!report.is_complete());

        let snap = store.current();
        assert_eq!(snap.disasters, old_disasters);
        assert_eq!(snap.landslides.len(), 1);
    }

    #[test]
    fn failed_first_fetch_leaves_disasters_empty() {
        let store = HazardStore::empty();
        store.ingest(FeedBatch {
            disasters:  Err(network_error(FeedName::Disasters)),
            landslides: Ok(super::helpers::landslides()),
        });
        let snap = store.current();
        assert!(snap.disasters.is_empty());
        assert_eq!(snap.landslides.len(), 2);
    }

    #[test]
    fn total_failure_commits_nothing() {
        let store = HazardStore::empty();
        store.ingest(ok_batch());
        let before = store.current();
        let report = store.ingest(FeedBatch {
            disasters:  Err(network_error(FeedName::Disasters)),
            landslides: Err(network_error(FeedName::Landslides)),
        });
        assert_eq!(report.generation, before.generation);
        assert!(Arc::ptr_eq(&before, &store.current()));
    }

    #[test]
    fn old_snapshot_stays_intact_after_swap() {
        let store = HazardStore::empty();
        store.ingest(ok_batch());
        let held = store.current();
        store.ingest(FeedBatch { disasters: Ok(Vec::new()), landslides: Ok(Vec::new()) });
        assert_eq!(held.disasters.len(), 2);
        assert!(store.current().disasters.is_empty());
    }

    // ── Async refresh ─────────────────────────────────────────────────────

    struct ScriptedFeed {
        disasters:  Mutex<Vec<StoreResult<Vec<Value>>>>,
        landslides: Mutex<Vec<StoreResult<Vec<Value>>>>,
    }

    impl HazardFeed for ScriptedFeed {
        async fn fetch_disasters(&self) -> StoreResult<Vec<Value>> {
            self.disasters.lock().unwrap().remove(0)
        }

        async fn fetch_landslides(&self) -> StoreResult<Vec<Value>> {
            self.landslides.lock().unwrap().remove(0)
        }
    }

    #[tokio::test]
    async fn refresh_fetches_and_ingests() {
        let feed = ScriptedFeed {
            disasters:  Mutex::new(vec![
                Ok(super::helpers::disasters()),
                Err(network_error(FeedName::Disasters)),
            ]),
            landslides: Mutex::new(vec![Ok(Vec::new()), Ok(super::helpers::landslides())]),
        };
        let store = HazardStore::empty();

        let first = store.refresh(&feed).await;
        assert!(first.is_complete());
        assert_eq!(store.current().disasters.len(), 2);

        let second = store.refresh(&feed).await;
        assert!(!second.is_complete());
        let snap = store.current();
        assert_eq!(snap.disasters.len(), 2);
        assert_eq!(snap.landslides.len(), 2);
    }
}
