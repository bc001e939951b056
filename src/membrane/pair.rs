//! Membrane - the inner and outer faces of one light cone
//!
//! The two ribbons are separate buffers that live as long as the membrane.
//! Every update builds a scratch ribbon, copies it into `inner`, flips its
//! normals and copies it into `outer`. The scratch ribbon is dropped at the
//! end of the update; nothing holds on to per-frame geometry.

use crate::constants::{MEMBRANE_LENGTH, MEMBRANE_SEGMENT_COUNT};
use crate::geometry::{to_point3s, Point2};

use super::ribbon::RibbonGeometry;

#[derive(Clone, Debug)]
pub struct Membrane {
    inner: RibbonGeometry,
    outer: RibbonGeometry,
    /// Depth of the projector-side outline
    length: f64,
    /// Subdivisions across the ribbon
    segments: usize,
}

impl Membrane {
    /// Create an empty membrane with the standard length and subdivision
    pub fn new() -> Self {
        Self::with_dimensions(MEMBRANE_LENGTH, MEMBRANE_SEGMENT_COUNT)
    }

    /// Create an empty membrane with a custom length and subdivision
    pub fn with_dimensions(length: f64, segments: usize) -> Self {
        Self {
            inner: RibbonGeometry::default(),
            outer: RibbonGeometry::default(),
            length,
            segments,
        }
    }

    /// Rebuild both faces from the projector-side outline `p` and the
    /// screen-side outline `q`
    ///
    /// `p` is placed at depth `length`, `q` at depth zero.
    pub fn update(&mut self, p: &[Point2], q: &[Point2]) {
        let ps = to_point3s(p, self.length);
        let qs = to_point3s(q, 0.0);

        let mut scratch = RibbonGeometry::build(&ps, &qs, self.segments);
        self.inner.copy_from(&scratch);
        scratch.invert_normals();
        self.outer.copy_from(&scratch);
    }

    /// The front face (normals as built)
    pub fn inner(&self) -> &RibbonGeometry {
        &self.inner
    }

    /// The back face (normals inverted)
    pub fn outer(&self) -> &RibbonGeometry {
        &self.outer
    }
}

impl Default for Membrane {
    fn default() -> Self {
        Self::new()
    }
}
