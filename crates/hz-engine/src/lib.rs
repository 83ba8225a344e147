//! `hz-engine` — the hazard collision engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`collision`] | `CollisionEngine` — `evaluate(point, snapshot, areas)`     |
//! | [`matches`]   | `HazardMatch`, `NotificationRequest`, `NotificationLocation` |
//! | [`message`]   | Banner and notification text for each hazard kind          |
//!
//! # Design notes
//!
//! Evaluation is pure: it reads one `&HazardSnapshot` and returns a fresh
//! `Vec<HazardMatch>`.  Nothing is dispatched from inside the collision
//! loop; the caller hands the matches to the notification pipeline in a
//! separate phase.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Exact distance pass runs on Rayon's thread pool.         |

pub mod collision;
pub mod matches;
pub mod message;


pub use collision::CollisionEngine;
pub use matches::{HazardMatch, NotificationLocation, NotificationRequest};
