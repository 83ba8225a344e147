//! The map surface the layers are drawn on.

use crate::RenderLayer;

/// Receives layer replacements.
///
/// `set_layer` is called from the animation task at frame rate, so it must
/// not block; hand the layer to the UI thread and return.
///
/// # Example: layer counter
///
/// ```rust,ignore
/// struct Counter(AtomicUsize);
///
/// impl RenderSurface for Counter {
///     fn set_layer(&self, _layer: &RenderLayer) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait RenderSurface: Send + Sync + 'static {
    /// Replace the data of `layer.id` with `layer.features`.
    fn set_layer(&self, layer: &RenderLayer);
}

/// A [`RenderSurface`] that draws nothing.  Useful for headless sessions.
pub struct NoopSurface;

impl RenderSurface for NoopSurface {
    fn set_layer(&self, _layer: &RenderLayer) {}
}
