//! Cubic Bézier curve

use crate::geometry::{Point2, PointSequence};

/// A cubic Bézier from `v0` to `v3` with control points `v1`, `v2`
///
/// ## Parametric Equation
/// ```text
/// B(t) = (1-t)³ v0 + 3(1-t)² t v1 + 3(1-t) t² v2 + t³ v3
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub v0: Point2,
    pub v1: Point2,
    pub v2: Point2,
    pub v3: Point2,
}

impl Default for CubicBezier {
    fn default() -> Self {
        let origin = Point2::origin();
        Self::new(origin, origin, origin, origin)
    }
}

impl CubicBezier {
    pub fn new(v0: Point2, v1: Point2, v2: Point2, v3: Point2) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// Replace all four points in place
    pub fn set(&mut self, v0: Point2, v1: Point2, v2: Point2, v3: Point2) {
        self.v0 = v0;
        self.v1 = v1;
        self.v2 = v2;
        self.v3 = v3;
    }

    /// Evaluate at `t` in [0, 1]
    pub fn point(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.v0.x + b1 * self.v1.x + b2 * self.v2.x + b3 * self.v3.x,
            b0 * self.v0.y + b1 * self.v1.y + b2 * self.v2.y + b3 * self.v3.y,
        )
    }

    /// Sample `count + 1` points evenly spaced in `t`
    pub fn points(&self, count: usize) -> PointSequence {
        if count == 0 {
            return vec![self.v0];
        }
        (0..=count)
            .map(|i| self.point(i as f64 / count as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 0.0),
        );
        let points = curve.points(50);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], curve.v0);
        assert_eq!(points[50], curve.v3);
    }

    #[test]
    fn test_straight_line() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 3.0);
        let curve = CubicBezier::new(a, Point2::new(1.0, 1.0), Point2::new(2.0, 2.0), b);
        let mid = curve.point(0.5);
        assert!((mid.x - 1.5).abs() < 1e-12);
        assert!((mid.y - 1.5).abs() < 1e-12);
    }
}
