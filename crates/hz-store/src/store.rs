//! `HazardStore`, owner of the current snapshot.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{info, warn};

use crate::boundary::RestrictedArea;
use crate::error::{FeedName, StoreResult};
use crate::feed::{FeedBatch, HazardFeed, fetch_feeds};
use crate::records::{Parsed, parse_disasters, parse_landslides};
use crate::snapshot::HazardSnapshot;

// ── Ingest report ─────────────────────────────────────────────────────────────

/// What happened to one feed during an ingest.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedOutcome {
    /// The feed's list was fully replaced.
    Replaced { kept: usize, dropped: usize },
    /// The fetch failed; the previous list was kept.
    Retained { error: String },
}

impl FeedOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, FeedOutcome::Replaced { .. })
    }
}

/// Summary of one ingest cycle.  Fetch failures show up here rather than as
/// an `Err`: they never abort ingestion.
#[derive(Clone, Debug, PartialEq)]
pub struct IngestReport {
    /// Generation of the snapshot current after the ingest.
    pub generation: u64,
    pub disasters:  FeedOutcome,
    pub landslides: FeedOutcome,
}

impl IngestReport {
    /// `true` when both feeds were replaced.
    pub fn is_complete(&self) -> bool {
        self.disasters.is_replaced() && self.landslides.is_replaced()
    }
}

// ── HazardStore ───────────────────────────────────────────────────────────────

/// Holds the latest committed [`HazardSnapshot`].
///
/// Readers call [`current`](Self::current) and get an `Arc` to a complete
/// snapshot; writers build the next snapshot off to the side and swap it in
/// under a short write lock.  A reader therefore sees either the previous
/// snapshot or the next one, never a mix.
pub struct HazardStore {
    restricted: Arc<[RestrictedArea]>,
    current:    RwLock<Arc<HazardSnapshot>>,
    /// Serialises writers and holds the last assigned generation.
    writer:     Mutex<u64>,
}

impl HazardStore {
    /// Create a store for a session.  `restricted` is fixed for the store's
    /// lifetime; the hazard lists start empty.
    pub fn new(restricted: Vec<RestrictedArea>) -> Self {
        let restricted: Arc<[RestrictedArea]> = Arc::from(restricted);
        let initial = HazardSnapshot::from_parts(restricted.clone(), Vec::new(), Vec::new());
        Self {
            restricted,
            current: RwLock::new(Arc::new(initial)),
            writer:  Mutex::new(0),
        }
    }

    /// A store with no restricted areas.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn restricted_areas(&self) -> Arc<[RestrictedArea]> {
        self.restricted.clone()
    }

    /// The latest committed snapshot (an empty one before the first load).
    pub fn current(&self) -> Arc<HazardSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publish `snapshot` as the new current snapshot and return it.
    ///
    /// The store assigns the generation number.
    pub fn commit(&self, snapshot: HazardSnapshot) -> Arc<HazardSnapshot> {
        let mut generation = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.swap_in(&mut generation, snapshot)
    }

    /// Build and commit the next snapshot from a feed batch.
    ///
    /// A feed that succeeded is fully replaced; a feed that failed keeps its
    /// previous list.  If both failed nothing is committed.
    pub fn ingest(&self, batch: FeedBatch) -> IngestReport {
        let mut generation = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = self.current();

        let (disasters, disaster_outcome) =
            resolve(FeedName::Disasters, batch.disasters, parse_disasters, || previous.disasters.clone());
        let (landslides, landslide_outcome) =
            resolve(FeedName::Landslides, batch.landslides, parse_landslides, || previous.landslides.clone());

        if !disaster_outcome.is_replaced() && !landslide_outcome.is_replaced() {
            return IngestReport {
                generation: previous.generation,
                disasters:  disaster_outcome,
                landslides: landslide_outcome,
            };
        }

        let next = HazardSnapshot::from_parts(self.restricted.clone(), disasters, landslides);
        let committed = self.swap_in(&mut generation, next);
        info!(
            generation = committed.generation,
            disasters  = committed.disasters.len(),
            landslides = committed.landslides.len(),
            "hazard snapshot committed"
        );

        IngestReport {
            generation: committed.generation,
            disasters:  disaster_outcome,
            landslides: landslide_outcome,
        }
    }

    /// Fetch both feeds concurrently and ingest the result.
    pub async fn refresh<F: HazardFeed>(&self, feed: &F) -> IngestReport {
        let batch = fetch_feeds(feed).await;
        self.ingest(batch)
    }

    fn swap_in(&self, generation: &mut u64, snapshot: HazardSnapshot) -> Arc<HazardSnapshot> {
        *generation += 1;
        let snapshot = Arc::new(snapshot.with_generation(*generation));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        snapshot
    }
}

impl Default for HazardStore {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parse a successful fetch or fall back to the previous list on failure.
fn resolve<T>(
    feed:     FeedName,
    fetched:  StoreResult<Vec<serde_json::Value>>,
    parse:    fn(&[serde_json::Value]) -> Parsed<T>,
    previous: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, FeedOutcome) {
    match fetched {
        Ok(raw) => {
            let Parsed { items, dropped } = parse(&raw);
            let outcome = FeedOutcome::Replaced { kept: items.len(), dropped };
            (items, outcome)
        }
        Err(e) => {
            warn!(feed = %feed, error = %e, "hazard fetch failed; keeping previous list");
            (previous(), FeedOutcome::Retained { error: e.to_string() })
        }
    }
}
