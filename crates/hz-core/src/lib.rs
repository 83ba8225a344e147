//! `hz-core` — foundational types for the hazard watch engine.
//!
//! This crate is a dependency of every other `hz-*` crate.  It has no `hz-*`
//! dependencies and few external ones (`geo` for geometry interop and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance, destination, circle rings |
//! | [`kind`]   | `HazardKind` enum                                         |
//! | [`config`] | `HazardConfig`, `AlertLabels`                             |
//! | [`error`]  | `HzError`, `HzResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod kind;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AlertLabels, HazardConfig};
pub use error::{HzError, HzResult};
pub use crate::geo::{EARTH_RADIUS_KM, GeoPoint};
pub use kind::HazardKind;
