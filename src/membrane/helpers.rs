//! Vertex normal helpers - debug line segments along each normal

use serde::Serialize;

use super::pair::Membrane;
use super::ribbon::RibbonGeometry;

/// One line segment `[x0, y0, z0, x1, y1, z1]`
pub type HelperLine = [f32; 6];

/// Normal lines for both faces of a membrane
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NormalHelpers {
    pub inner: Vec<HelperLine>,
    pub outer: Vec<HelperLine>,
}

impl NormalHelpers {
    pub fn from_membrane(membrane: &Membrane, length: f32) -> Self {
        Self {
            inner: vertex_normal_lines(membrane.inner(), length),
            outer: vertex_normal_lines(membrane.outer(), length),
        }
    }
}

/// A segment from every vertex to `length` along its normal
pub fn vertex_normal_lines(geometry: &RibbonGeometry, length: f32) -> Vec<HelperLine> {
    (0..geometry.vertex_count())
        .map(|i| {
            let start = geometry.position(i);
            let end = start + geometry.normal(i) * length;
            [start.x, start.y, start.z, end.x, end.y, end.z]
        })
        .collect()
}
