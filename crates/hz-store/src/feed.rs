//! Collaborator traits for the network layer.
//!
//! The engine never talks HTTP itself.  The application supplies a
//! [`HazardFeed`] (the two refreshing hazard endpoints) and a
//! [`BoundarySource`] (the static restricted-area file).  A non-success
//! response must be reported as [`StoreError::Fetch`][crate::StoreError::Fetch].

use std::future::Future;

use serde_json::Value;

use crate::StoreResult;

/// Source of the disaster and landslide hazard feeds.
///
/// Each method resolves to the raw JSON array of records.  Record-level
/// validation is the store's job, not the feed's.
pub trait HazardFeed: Send + Sync + 'static {
    fn fetch_disasters(&self) -> impl Future<Output = StoreResult<Vec<Value>>> + Send;

    fn fetch_landslides(&self) -> impl Future<Output = StoreResult<Vec<Value>>> + Send;
}

/// Source of the restricted-area GeoJSON document.
pub trait BoundarySource: Send + Sync + 'static {
    fn fetch_boundaries(&self) -> impl Future<Output = StoreResult<String>> + Send;
}

/// The result of fetching both hazard feeds.  Each side fails independently.
#[derive(Debug)]
pub struct FeedBatch {
    pub disasters:  StoreResult<Vec<Value>>,
    pub landslides: StoreResult<Vec<Value>>,
}

/// Fetch both feeds concurrently.
pub async fn fetch_feeds<F: HazardFeed>(feed: &F) -> FeedBatch {
    let (disasters, landslides) = futures::join!(feed.fetch_disasters(), feed.fetch_landslides());
    FeedBatch { disasters, landslides }
}
