//! `hz-anim` — render layers and the hazard-circle animation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`phase`]   | `AnimationPhase` — `t` in radians, `scale() = 2 + sin t`     |
//! | [`layer`]   | `RenderLayer`, `LayerId`, `LayerStyle`, layer builders       |
//! | [`surface`] | `RenderSurface` trait, `NoopSurface`                         |
//! | [`driver`]  | `Animator`, `AnimationDriver`, `AnimationHandle`             |
//!
//! # Frame loop
//!
//! ```text
//! every frame_interval:
//!   ① snapshot = store.current()      (one Arc clone, never torn)
//!   ② phase.advance(step)
//!   ③ surface.set_layer(animated_layer(snapshot, phase, radius))
//! ```
//!
//! The animation only changes what is drawn.  Collision queries use the
//! fixed radius from `HazardConfig` and never read the phase.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hz_anim::{AnimationDriver, NoopSurface};
//!
//! let handle = AnimationDriver::spawn(store.clone(), Arc::new(NoopSurface), &config);
//! // ...
//! let frames = handle.stop().await;
//! ```

pub mod driver;
pub mod layer;
pub mod phase;
pub mod surface;


pub use driver::{AnimationDriver, AnimationHandle, Animator};
pub use layer::{
    LayerId, LayerStyle, RenderFeature, RenderLayer, animated_layer, restricted_layer, static_layer,
};
pub use phase::AnimationPhase;
pub use surface::{NoopSurface, RenderSurface};
