//! `hz-store` — hazard records, boundaries, spatial index, and snapshots.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`records`]  | Raw feed records, `DisasterHazard`, `LandslideHazard`       |
//! | [`boundary`] | `RestrictedArea`, `load_restricted_areas` (GeoJSON)          |
//! | [`index`]    | `PointHazardIndex` (R-tree), `Candidates`                   |
//! | [`snapshot`] | `HazardSnapshot` — immutable view of all known hazards      |
//! | [`store`]    | `HazardStore` (atomic `Arc` swap), `IngestReport`           |
//! | [`feed`]     | `HazardFeed`, `BoundarySource` collaborator traits          |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                              |
//!
//! # Snapshot discipline
//!
//! A [`HazardSnapshot`] is never mutated after construction.  The store
//! publishes a new `Arc<HazardSnapshot>` per fetch cycle; every reader
//! (animation frames, collision queries) clones the `Arc` it was handed and
//! keeps using that exact instance.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `hz-core` public types. |

pub mod boundary;
pub mod error;
pub mod feed;
pub mod index;
pub mod records;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use boundary::{AreaGeometry, RestrictedArea, load_restricted_areas};
pub use error::{FeedName, StoreError, StoreResult};
pub use feed::{BoundarySource, FeedBatch, HazardFeed, fetch_feeds};
pub use index::{Candidates, PointHazardIndex};
pub use records::{DisasterHazard, LandslideHazard, Parsed, parse_centroid, parse_disasters, parse_landslides};
pub use snapshot::HazardSnapshot;
pub use store::{FeedOutcome, HazardStore, IngestReport};
