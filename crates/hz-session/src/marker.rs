//! The draggable marker.

use std::sync::Arc;

use tracing::{debug, info};

use hz_core::GeoPoint;
use hz_engine::{CollisionEngine, HazardMatch};
use hz_store::HazardStore;

use crate::{Alert, DispatchReport, NotificationDispatcher, Notifier, Presenter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerState {
    Idle,
    Dragging,
}

/// Everything a drop produced.
#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome {
    pub alert:    Alert,
    pub matches:  Vec<HazardMatch>,
    pub dispatch: DispatchReport,
}

/// Marker state machine: `Idle → begin_drag → Dragging → drop_at → Idle`.
///
/// Only [`drop_at`](Self::drop_at) runs a collision query.  Moves during a
/// drag update the visual position and nothing else.
pub struct MarkerController<P: Presenter, N: Notifier> {
    store:      Arc<HazardStore>,
    engine:     CollisionEngine,
    presenter:  Arc<P>,
    dispatcher: NotificationDispatcher<N>,
    position:   GeoPoint,
    state:      MarkerState,
}

impl<P: Presenter, N: Notifier> MarkerController<P, N> {
    pub fn new(
        store:      Arc<HazardStore>,
        engine:     CollisionEngine,
        presenter:  Arc<P>,
        dispatcher: NotificationDispatcher<N>,
        position:   GeoPoint,
    ) -> Self {
        Self { store, engine, presenter, dispatcher, position, state: MarkerState::Idle }
    }

    /// Current marker position; also the recenter target.
    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    #[inline]
    pub fn state(&self) -> MarkerState {
        self.state
    }

    pub fn engine(&self) -> &CollisionEngine {
        &self.engine
    }

    pub fn begin_drag(&mut self) {
        self.state = MarkerState::Dragging;
    }

    /// Move the marker during a drag.  A move without `begin_drag` starts
    /// the drag.
    pub fn drag_to(&mut self, point: GeoPoint) {
        self.state = MarkerState::Dragging;
        if point.is_valid() {
            self.position = point;
        }
    }

    /// End the drag at `point`, evaluate it, present the alert, and send one
    /// notification per match.
    ///
    /// The snapshot is captured before anything is awaited, so a refresh
    /// landing mid-dispatch does not change this drop's result.  Dropping
    /// into the same hazard again sends new notifications.
    pub async fn drop_at(&mut self, point: GeoPoint) -> DropOutcome {
        self.state = MarkerState::Idle;
        if point.is_valid() {
            self.position = point;
        }

        let snapshot = self.store.current();
        let matches = self.engine.evaluate_snapshot(point, &snapshot);
        drop(snapshot);

        let alert = if matches.is_empty() {
            Alert::Safe(self.engine.labels().safe_zone.clone())
        } else {
            let lines: Vec<&str> = matches.iter().map(|m| m.display_message.as_str()).collect();
            Alert::Hazard(lines.join("\n"))
        };
        self.presenter.present(&alert);

        if matches.is_empty() {
            debug!(%point, "marker dropped in a safe zone");
            return DropOutcome { alert, matches, dispatch: DispatchReport::default() };
        }

        info!(%point, matches = matches.len(), "marker dropped on hazards");
        let dispatch = self.dispatcher.dispatch_all(&matches).await;
        DropOutcome { alert, matches, dispatch }
    }
}
