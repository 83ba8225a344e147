//! `hz-session` — marker interaction and session lifecycle.
//!
//! # Drop pipeline
//!
//! ```text
//! drop_at(point):
//!   ① snapshot = store.current()            (captured before any await)
//!   ② matches  = engine.evaluate(point, snapshot)
//!   ③ presenter.present(Hazard(joined) | Safe(message))
//!   ④ dispatcher.dispatch_all(matches)      (concurrent, failures logged)
//! ```
//!
//! # Session start
//!
//! [`SessionBuilder::build`] validates the config, fetches the boundary
//! file, draws the restricted layer, fetches both feeds once, draws the
//! static hazard circles, then spawns the animation task and (if
//! configured) the periodic refresh loop.  [`HazardSession::shutdown`]
//! stops both through a `watch` channel.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`alert`]   | `Alert`, `Presenter`, `NoopPresenter`                      |
//! | [`notify`]  | `Notifier`, `NotificationDispatcher`, `DispatchReport`     |
//! | [`marker`]  | `MarkerController`, `MarkerState`, `DropOutcome`           |
//! | [`builder`] | `SessionBuilder`                                           |
//! | [`session`] | `HazardSession`                                            |
//! | [`error`]   | `SessionError`, `NotifyError`                              |

pub mod alert;
pub mod builder;
pub mod error;
pub mod marker;
pub mod notify;
pub mod session;


pub use alert::{Alert, NoopPresenter, Presenter};
pub use builder::SessionBuilder;
pub use error::{NotifyError, SessionError, SessionResult};
pub use marker::{DropOutcome, MarkerController, MarkerState};
pub use notify::{DispatchReport, NotificationDispatcher, Notifier};
pub use session::HazardSession;
