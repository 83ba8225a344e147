//! Console-side collaborators: alert printer, logging notifier, and a map
//! surface that only counts what it is asked to draw.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info};

use hz_anim::{LayerId, RenderLayer, RenderSurface};
use hz_engine::NotificationRequest;
use hz_session::{Alert, NotifyError, Notifier, Presenter};

pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present(&self, alert: &Alert) {
        match alert {
            Alert::Hazard(lines) => {
                println!("  HAZARD");
                for line in lines.lines() {
                    println!("    {line}");
                }
            }
            Alert::Safe(message) => println!("  SAFE  {message}"),
        }
    }
}

/// Logs each request as the JSON body a notification service would get.
#[derive(Default)]
pub struct LogNotifier {
    sent: AtomicUsize,
}

impl LogNotifier {
    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }
}

impl Notifier for LogNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let body = serde_json::to_string(request).map_err(|e| NotifyError::Rejected(e.to_string()))?;
        info!(target: "notifications", %body, "POST /notifications");
        self.sent.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingSurface {
    restricted: AtomicUsize,
    statics:    AtomicUsize,
    frames:     AtomicUsize,
}

impl CountingSurface {
    /// `(restricted, static, animated)` layer pushes so far.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.restricted.load(Ordering::Relaxed),
            self.statics.load(Ordering::Relaxed),
            self.frames.load(Ordering::Relaxed),
        )
    }
}

impl RenderSurface for CountingSurface {
    fn set_layer(&self, layer: &RenderLayer) {
        let counter = match layer.id {
            LayerId::RestrictedFill   => &self.restricted,
            LayerId::StaticHazardFill => &self.statics,
            LayerId::HazardFill       => &self.frames,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if layer.id != LayerId::HazardFill {
            let geojson = layer.to_geojson();
            debug!(layer = %layer.id, features = geojson.features.len(), "layer replaced");
        }
    }
}
