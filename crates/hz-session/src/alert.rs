//! User-facing alerts.

/// What the user sees after a drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alert {
    /// One line per match, joined with `\n`.
    Hazard(String),
    /// The configured safe-zone message.
    Safe(String),
}

impl Alert {
    pub fn is_hazard(&self) -> bool {
        matches!(self, Alert::Hazard(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Alert::Hazard(m) | Alert::Safe(m) => m,
        }
    }
}

/// Shows alerts to the user (a modal, a toast, a console line, ...).
pub trait Presenter: Send + Sync + 'static {
    fn present(&self, alert: &Alert);
}

/// A [`Presenter`] that shows nothing.
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn present(&self, _alert: &Alert) {}
}
