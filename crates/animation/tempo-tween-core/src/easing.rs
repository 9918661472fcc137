//! Easing curves mapping normalized progress to eased progress.
//!
//! Inputs are clamped to `[0, 1]` before evaluation so callers may pass raw
//! time ratios straight through.

use serde::{Deserialize, Serialize};

/// Closed set of easing curves. Dispatch is exhaustive, so there is no
/// "unknown easing" path at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingFunction {
    #[default]
    QuadraticIn,
    BounceOut,
}

impl EasingFunction {
    /// Evaluate the curve at progress `p`.
    #[inline]
    pub fn ease(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            EasingFunction::QuadraticIn => quadratic_in(p),
            EasingFunction::BounceOut => bounce_out(p),
        }
    }
}

#[inline]
pub fn quadratic_in(p: f32) -> f32 {
    p * p
}

/// Piecewise quadratic bounce; the four pieces meet at 4/11, 8/11 and 9/10.
#[inline]
pub fn bounce_out(p: f32) -> f32 {
    if p < 4.0 / 11.0 {
        (121.0 * p * p) / 16.0
    } else if p < 8.0 / 11.0 {
        (363.0 / 40.0 * p * p) - (99.0 / 10.0 * p) + 17.0 / 5.0
    } else if p < 9.0 / 10.0 {
        (4356.0 / 361.0 * p * p) - (35442.0 / 1805.0 * p) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * p * p) - (513.0 / 25.0 * p) + 268.0 / 25.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_progress() {
        assert_eq!(EasingFunction::QuadraticIn.ease(-0.5), 0.0);
        assert_eq!(EasingFunction::QuadraticIn.ease(1.5), 1.0);
        assert_eq!(EasingFunction::BounceOut.ease(-2.0), 0.0);
    }

    #[test]
    fn default_is_quadratic_in() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticIn);
    }
}
