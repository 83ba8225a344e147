//! Notification dispatch.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use hz_core::HazardKind;
use hz_engine::{HazardMatch, NotificationLocation, NotificationRequest};

use crate::NotifyError;

/// The external notification service.
pub trait Notifier: Send + Sync + 'static {
    fn send(&self, request: &NotificationRequest) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Outcome of one [`NotificationDispatcher::dispatch_all`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub attempted: usize,
    pub failed:    usize,
}

impl DispatchReport {
    pub fn delivered(&self) -> usize {
        self.attempted - self.failed
    }
}

/// Fire-and-forget front end over a [`Notifier`].
///
/// Failures are logged and swallowed: a notification that cannot be
/// delivered never blocks or cancels the alert the user sees.
pub struct NotificationDispatcher<N: Notifier> {
    notifier: Arc<N>,
}

impl<N: Notifier> Clone for NotificationDispatcher<N> {
    fn clone(&self) -> Self {
        Self { notifier: self.notifier.clone() }
    }
}

impl<N: Notifier> NotificationDispatcher<N> {
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &Arc<N> {
        &self.notifier
    }

    /// Send one notification.  Returns `true` if it was delivered.
    pub async fn notify(
        &self,
        kind:     HazardKind,
        message:  impl Into<String>,
        location: Option<NotificationLocation>,
    ) -> bool {
        let request = NotificationRequest { hazard_kind: kind, message: message.into(), location };
        self.send(&request).await
    }

    /// One attempt per match, all in flight at once.  Completion order is
    /// unspecified; one failure does not affect the others.
    pub async fn dispatch_all(&self, matches: &[HazardMatch]) -> DispatchReport {
        let results = join_all(matches.iter().map(|m| self.send(&m.notification))).await;
        let failed = results.iter().filter(|ok| !**ok).count();
        DispatchReport { attempted: results.len(), failed }
    }

    async fn send(&self, request: &NotificationRequest) -> bool {
        match self.notifier.send(request).await {
            Ok(()) => {
                debug!(kind = request.hazard_kind.notification_kind(), "notification sent");
                true
            }
            Err(e) => {
                warn!(
                    kind  = request.hazard_kind.notification_kind(),
                    error = %e,
                    "failed to create hazard notification"
                );
                false
            }
        }
    }
}
