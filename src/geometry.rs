//! Point types shared by curves, forms and membranes
//!
//! Geometry is computed in `f64`; conversion to `f32` only happens when
//! ribbon buffers are written for the renderer.

/// A 2D outline point
pub type Point2 = nalgebra::Point2<f64>;
/// A 3D membrane vertex
pub type Point3 = nalgebra::Point3<f64>;
/// An ordered outline. Insertion order defines the polyline.
pub type PointSequence = Vec<Point2>;

/// Linear interpolation from `a` towards `b` by `t`
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Lift a 2D outline into 3D at depth `z`
pub fn to_point3s(points: &[Point2], z: f64) -> Vec<Point3> {
    points.iter().map(|p| Point3::new(p.x, p.y, z)).collect()
}

/// A sequence of `len` copies of `point`
pub fn repeat(len: usize, point: Point2) -> PointSequence {
    vec![point; len]
}
