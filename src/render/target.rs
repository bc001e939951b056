//! RenderTarget trait and HeadlessTarget
//!
//! A render target is the collaborator that draws what the projectors
//! compute. It receives, per frame and per projector, the screen outlines and
//! every membrane. Vertex counts never change between frames, so a real
//! renderer can update its buffers in place.

use crate::error::Result;
use crate::geometry::PointSequence;
use crate::membrane::{Membrane, NormalHelpers};

/// Consumer of per-frame geometry
///
/// Within a frame the calls arrive in this order: `begin_frame`, then for
/// each projector `update_screen_image` followed by its membranes (and their
/// normal helpers, when enabled), then `end_frame`.
pub trait RenderTarget {
    /// Start a new frame
    fn begin_frame(&mut self, _frame: u64) -> Result<()> {
        Ok(())
    }

    /// Screen-side outlines of one projector
    fn update_screen_image(&mut self, projector: usize, shapes: &[PointSequence]) -> Result<()>;

    /// One membrane of one projector
    fn update_membrane(&mut self, projector: usize, shape: usize, membrane: &Membrane)
        -> Result<()>;

    /// Vertex normal helper lines for one membrane
    fn update_normal_helpers(
        &mut self,
        _projector: usize,
        _shape: usize,
        _helpers: &NormalHelpers,
    ) -> Result<()> {
        Ok(())
    }

    /// Finish the current frame
    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }

    /// Returns the target name.
    fn name(&self) -> &str;
}

/// Headless target - keeps counters, draws nothing
#[derive(Debug, Default)]
pub struct HeadlessTarget {
    frames: u64,
    outlines: u64,
    membranes: u64,
    vertices: u64,
}

impl HeadlessTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames completed
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Outlines received across all frames
    pub fn outline_count(&self) -> u64 {
        self.outlines
    }

    /// Membranes received across all frames
    pub fn membrane_count(&self) -> u64 {
        self.membranes
    }

    /// Inner-face vertices received across all frames
    pub fn vertex_count(&self) -> u64 {
        self.vertices
    }
}

impl RenderTarget for HeadlessTarget {
    fn update_screen_image(&mut self, _projector: usize, shapes: &[PointSequence]) -> Result<()> {
        self.outlines += shapes.len() as u64;
        Ok(())
    }

    fn update_membrane(
        &mut self,
        projector: usize,
        shape: usize,
        membrane: &Membrane,
    ) -> Result<()> {
        self.membranes += 1;
        self.vertices += membrane.inner().vertex_count() as u64;
        log::trace!(
            "projector {} membrane {}: {} vertices, {} triangles",
            projector,
            shape,
            membrane.inner().vertex_count(),
            membrane.inner().triangle_count()
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }
}
