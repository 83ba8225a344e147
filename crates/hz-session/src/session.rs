//! The running `HazardSession`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use hz_anim::{AnimationHandle, RenderSurface, static_layer};
use hz_core::HazardConfig;
use hz_store::{HazardFeed, HazardStore, IngestReport};

use crate::{MarkerController, Notifier, Presenter};

/// A started hazard view: store, animation, optional refresh loop, and the
/// marker controller.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].  Call
/// [`shutdown`](Self::shutdown) to stop the background tasks and wait for
/// them; dropping the session stops them without waiting.
pub struct HazardSession<F: HazardFeed, S: RenderSurface, P: Presenter, N: Notifier> {
    pub(crate) config:         HazardConfig,
    pub(crate) store:          Arc<HazardStore>,
    pub(crate) feed:           Arc<F>,
    pub(crate) surface:        Arc<S>,
    pub(crate) controller:     MarkerController<P, N>,
    pub(crate) animation:      Option<AnimationHandle>,
    pub(crate) refresher:      Option<JoinHandle<()>>,
    pub(crate) shutdown_tx:    watch::Sender<bool>,
    pub(crate) initial_report: IngestReport,
}

impl<F: HazardFeed, S: RenderSurface, P: Presenter, N: Notifier> HazardSession<F, S, P, N> {
    pub fn config(&self) -> &HazardConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<HazardStore> {
        &self.store
    }

    pub fn controller(&self) -> &MarkerController<P, N> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MarkerController<P, N> {
        &mut self.controller
    }

    /// Result of the fetch made while starting.
    pub fn initial_report(&self) -> &IngestReport {
        &self.initial_report
    }

    /// `true` while the animation task is running.
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(AnimationHandle::is_running)
    }

    /// Fetch both feeds now, outside the periodic schedule.
    pub async fn refresh_now(&self) -> IngestReport {
        refresh_once(&self.store, self.feed.as_ref(), self.surface.as_ref(), &self.config).await
    }

    /// Stop the animation and the refresh loop.  An in-flight refresh is
    /// abandoned without committing.  Returns the number of animation
    /// frames pushed.
    pub async fn shutdown(mut self) -> u64 {
        let _ = self.shutdown_tx.send(true);
        let frames = match self.animation.take() {
            Some(handle) => handle.stop().await,
            None => 0,
        };
        if let Some(task) = self.refresher.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "refresh task ended abnormally");
            }
        }
        info!(frames, "hazard session shut down");
        frames
    }
}

/// Refresh the store and redraw the static reference circles if a new
/// snapshot was committed.
pub(crate) async fn refresh_once<F: HazardFeed, S: RenderSurface>(
    store:   &HazardStore,
    feed:    &F,
    surface: &S,
    config:  &HazardConfig,
) -> IngestReport {
    let before = store.current().generation;
    let report = store.refresh(feed).await;
    if report.generation != before {
        redraw_static(store, surface, config);
    }
    report
}

pub(crate) fn redraw_static<S: RenderSurface>(store: &HazardStore, surface: &S, config: &HazardConfig) {
    let snapshot = store.current();
    surface.set_layer(&static_layer(&snapshot, config.collision_radius_km, config.circle_steps));
}

/// Periodic refresh.  The first fetch happens one `period` after start
/// (the session already fetched once while starting).
pub(crate) async fn refresh_loop<F: HazardFeed, S: RenderSurface>(
    store:        Arc<HazardStore>,
    feed:         Arc<F>,
    surface:      Arc<S>,
    config:       HazardConfig,
    period:       Duration,
    mut stop_rx:  watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut cycles = 0u64;

    loop {
        tokio::select! {
            biased;
            _ = stop_rx.changed() => break,
            _ = ticker.tick() => {}
        }
        // Losing this race drops the fetch before it reaches the store.
        let report = tokio::select! {
            biased;
            _ = stop_rx.changed() => break,
            report = refresh_once(&store, feed.as_ref(), surface.as_ref(), &config) => report,
        };
        cycles += 1;
        debug!(cycle = cycles, generation = report.generation, complete = report.is_complete(), "periodic refresh");
    }

    debug!(cycles, "refresh loop stopped");
}
