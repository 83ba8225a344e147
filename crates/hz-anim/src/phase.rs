//! Animation phase.

use std::f64::consts::TAU;

/// The oscillation parameter `t`, in radians, kept in `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationPhase {
    t: f64,
}

impl AnimationPhase {
    /// Phase at `t = 0` (scale 2).
    pub const fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Phase at an arbitrary `t`, wrapped into `[0, 2π)`.
    pub fn at(t: f64) -> Self {
        Self { t: t.rem_euclid(TAU) }
    }

    #[inline]
    pub fn t(self) -> f64 {
        self.t
    }

    /// Add `step` radians, wrapping at 2π.
    pub fn advance(&mut self, step: f64) {
        self.t = (self.t + step).rem_euclid(TAU);
    }

    /// Radius multiplier for this phase: `2 + sin t`, oscillating in `[1, 3]`.
    #[inline]
    pub fn scale(self) -> f64 {
        2.0 + self.t.sin()
    }
}
