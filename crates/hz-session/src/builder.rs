//! Fluent builder that starts a [`HazardSession`].

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use hz_anim::{AnimationDriver, RenderSurface, restricted_layer};
use hz_core::{GeoPoint, HazardConfig};
use hz_engine::CollisionEngine;
use hz_store::{BoundarySource, HazardFeed, HazardStore, load_restricted_areas};

use crate::session::{redraw_static, refresh_loop};
use crate::{HazardSession, MarkerController, NotificationDispatcher, Notifier, Presenter, SessionResult};

/// Fluent builder for [`HazardSession`].
///
/// # Required inputs
///
/// - [`HazardConfig`]: radius, animation timing, refresh interval, labels
/// - `F: HazardFeed`: the disaster and landslide endpoints
/// - `B: BoundarySource`: the restricted-area GeoJSON, fetched once
/// - `S: RenderSurface`, `P: Presenter`, `N: Notifier`
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                       |
/// |----------------------|-------------------------------|
/// | `.marker_at(p)`      | `config.initial_marker`       |
/// | `.engine(e)`         | `CollisionEngine::new(&config)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(config, feed, boundaries, surface, presenter, notifier)
///     .build()
///     .await?;
/// session.controller_mut().drop_at(GeoPoint::new(92.94, 26.20)).await;
/// session.shutdown().await;
/// ```
pub struct SessionBuilder<F, B, S, P, N>
where
    F: HazardFeed,
    B: BoundarySource,
    S: RenderSurface,
    P: Presenter,
    N: Notifier,
{
    config:     HazardConfig,
    feed:       Arc<F>,
    boundaries: B,
    surface:    Arc<S>,
    presenter:  Arc<P>,
    notifier:   Arc<N>,
    marker:     Option<GeoPoint>,
    engine:     Option<CollisionEngine>,
}

impl<F, B, S, P, N> SessionBuilder<F, B, S, P, N>
where
    F: HazardFeed,
    B: BoundarySource,
    S: RenderSurface,
    P: Presenter,
    N: Notifier,
{
    /// Create a builder with all required inputs.
    pub fn new(
        config:     HazardConfig,
        feed:       Arc<F>,
        boundaries: B,
        surface:    Arc<S>,
        presenter:  Arc<P>,
        notifier:   Arc<N>,
    ) -> Self {
        Self {
            config,
            feed,
            boundaries,
            surface,
            presenter,
            notifier,
            marker: None,
            engine: None,
        }
    }

    /// Start the marker somewhere other than `config.initial_marker`.
    pub fn marker_at(mut self, position: GeoPoint) -> Self {
        self.marker = Some(position);
        self
    }

    /// Use a pre-built engine instead of one derived from the config.
    pub fn engine(mut self, engine: CollisionEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Validate the config, load the boundaries, fetch the feeds once, draw
    /// the static layers, and start the background tasks.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Config`][crate::SessionError::Config] if the config
    ///   fails validation.
    /// - [`SessionError::Store`][crate::SessionError::Store] if the boundary
    ///   file cannot be fetched or parsed.
    ///
    /// Hazard feed failures are not errors; they show up in
    /// [`HazardSession::initial_report`].
    pub async fn build(self) -> SessionResult<HazardSession<F, S, P, N>> {
        self.config.validate()?;
        let position = match self.marker {
            Some(p) => GeoPoint::try_new(p.lon, p.lat)?,
            None => self.config.initial_marker,
        };

        // ── Restricted areas (once) ───────────────────────────────────────
        let raw = self.boundaries.fetch_boundaries().await?;
        let store = Arc::new(HazardStore::new(load_restricted_areas(&raw)?));
        self.surface.set_layer(&restricted_layer(&store.restricted_areas()));

        // ── First hazard fetch ────────────────────────────────────────────
        let initial_report = store.refresh(self.feed.as_ref()).await;
        redraw_static(&store, self.surface.as_ref(), &self.config);

        // ── Background tasks ──────────────────────────────────────────────
        let animation = AnimationDriver::spawn(store.clone(), self.surface.clone(), &self.config);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let refresher = self.config.refresh_interval().map(|period| {
            tokio::spawn(refresh_loop(
                store.clone(),
                self.feed.clone(),
                self.surface.clone(),
                self.config.clone(),
                period,
                shutdown_rx,
            ))
        });

        let engine = self.engine.unwrap_or_else(|| CollisionEngine::new(&self.config));
        let controller = MarkerController::new(
            store.clone(),
            engine,
            self.presenter,
            NotificationDispatcher::new(self.notifier),
            position,
        );

        let snapshot = store.current();
        info!(
            restricted_areas = snapshot.restricted_areas.len(),
            warnings         = snapshot.warning_count(),
            refresh          = refresher.is_some(),
            "hazard session started"
        );

        Ok(HazardSession {
            config: self.config,
            store,
            feed: self.feed,
            surface: self.surface,
            controller,
            animation: Some(animation),
            refresher,
            shutdown_tx,
            initial_report,
        })
    }
}
