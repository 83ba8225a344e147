//! The animation task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use hz_core::HazardConfig;
use hz_store::{HazardSnapshot, HazardStore};

use crate::{AnimationPhase, RenderLayer, RenderSurface, animated_layer};

// ── Animator ──────────────────────────────────────────────────────────────────

/// Frame-by-frame state of the pulsing circles, without any timer.
///
/// The phase advances *before* each frame is built, so the first frame is
/// drawn at `t = step`.
#[derive(Clone, Debug)]
pub struct Animator {
    phase:          AnimationPhase,
    step:           f64,
    base_radius_km: f64,
    circle_steps:   usize,
}

impl Animator {
    pub fn new(config: &HazardConfig) -> Self {
        Self {
            phase:          AnimationPhase::new(),
            step:           config.animation_step_rad,
            base_radius_km: config.collision_radius_km,
            circle_steps:   config.circle_steps,
        }
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// The animated layer at the current phase.
    pub fn frame_at(&self, snapshot: &HazardSnapshot) -> RenderLayer {
        animated_layer(snapshot, self.phase, self.base_radius_km, self.circle_steps)
    }

    /// Advance one step and build the next frame.
    pub fn step(&mut self, snapshot: &HazardSnapshot) -> RenderLayer {
        self.phase.advance(self.step);
        self.frame_at(snapshot)
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Spawns the repeating animation task.
pub struct AnimationDriver;

impl AnimationDriver {
    /// Start pushing animated frames to `surface` every
    /// `config.frame_interval()`.
    ///
    /// Each frame reads `store.current()` afresh, so a refresh shows up on
    /// the next frame.  Must be called from within a Tokio runtime.
    pub fn spawn<S: RenderSurface>(
        store:   Arc<HazardStore>,
        surface: Arc<S>,
        config:  &HazardConfig,
    ) -> AnimationHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let animator = Animator::new(config);
        let period = config.frame_interval();
        let task = tokio::spawn(run(store, surface, animator, period, stop_rx));
        AnimationHandle { stop_tx, task: Some(task) }
    }
}

async fn run<S: RenderSurface>(
    store:        Arc<HazardStore>,
    surface:      Arc<S>,
    mut animator: Animator,
    period:       Duration,
    mut stop_rx:  watch::Receiver<bool>,
) -> u64 {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frames = 0u64;

    loop {
        tokio::select! {
            biased;
            // Fires on a stop signal or when the handle is gone.
            _ = stop_rx.changed() => break,
            _ = ticker.tick() => {
                let snapshot = store.current();
                let layer = animator.step(&snapshot);
                surface.set_layer(&layer);
                frames += 1;
            }
        }
    }

    debug!(frames, t = animator.phase().t(), "animation stopped");
    frames
}

// ── Handle ────────────────────────────────────────────────────────────────────

/// Owner of a running animation task.
///
/// [`stop`](Self::stop) ends the task and waits for it; once it returns no
/// further frame reaches the surface.  Dropping the handle also stops the
/// task, without waiting.
pub struct AnimationHandle {
    stop_tx: watch::Sender<bool>,
    task:    Option<JoinHandle<u64>>,
}

impl AnimationHandle {
    /// Stop the animation and return the number of frames pushed.
    pub async fn stop(mut self) -> u64 {
        let _ = self.stop_tx.send(true);
        let Some(task) = self.task.take() else { return 0 };
        match task.await {
            Ok(frames) => frames,
            Err(e) => {
                warn!(error = %e, "animation task ended abnormally");
                0
            }
        }
    }

    /// `true` while the task has not finished.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.stop_tx.send(true);
            task.abort();
        }
    }
}
