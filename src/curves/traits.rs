//! Curve trait definition
//!
//! A `Curve` is anything that can be evaluated at an angle around a centre.
//! The wipe-curve builder only needs these two operations, so it works for
//! any closed angular curve, not just ellipses.

use crate::geometry::Point2;

/// A closed curve parameterised by angle
///
/// ## Parametric Representation
///
/// - `theta = 0` → the point to the right of the centre
/// - `theta = π/2` → the point above the centre
/// - Angles outside `[0, 2π)` wrap naturally through `sin`/`cos`
pub trait Curve {
    /// Evaluate the curve at angle `theta` (radians)
    fn point_at(&self, theta: f64) -> Point2;

    /// The point the curve is drawn around
    fn centre(&self) -> Point2;
}
