//! JSON frame target - streams every frame to a writer for an external viewer
//!
//! Output is JSON Lines: one object per frame, written when the frame ends.
//! Only the frame in progress is held in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::target::RenderTarget;
use crate::error::Result;
use crate::geometry::PointSequence;
use crate::membrane::{Membrane, NormalHelpers, RibbonGeometry};

/// One captured membrane
#[derive(Serialize)]
struct MembraneData {
    projector: usize,
    shape: usize,
    inner: RibbonGeometry,
    outer: RibbonGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    normal_helpers: Option<NormalHelpers>,
}

/// One captured frame
#[derive(Serialize)]
struct FrameData {
    frame: u64,
    /// Per projector, per shape, `[x, y]` points
    screen_images: Vec<Vec<Vec<[f64; 2]>>>,
    membranes: Vec<MembraneData>,
}

impl FrameData {
    fn new(frame: u64) -> Self {
        Self {
            frame,
            screen_images: Vec::new(),
            membranes: Vec::new(),
        }
    }
}

pub struct JsonFrameTarget<W: Write> {
    writer: W,
    current: Option<FrameData>,
    frames_written: usize,
}

impl JsonFrameTarget<BufWriter<File>> {
    /// Stream frames into a new file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        log::info!("Streaming frames to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonFrameTarget<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current: None,
            frames_written: 0,
        }
    }

    /// Returns the number of frames written so far.
    pub fn frame_count(&self) -> usize {
        self.frames_written
    }

    /// Write any unfinished frame, flush, and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.write_current()?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn current(&mut self) -> &mut FrameData {
        self.current.get_or_insert_with(|| FrameData::new(0))
    }

    fn write_current(&mut self) -> Result<()> {
        if let Some(frame) = self.current.take() {
            serde_json::to_writer(&mut self.writer, &frame)?;
            self.writer.write_all(b"\n")?;
            self.frames_written += 1;
        }
        Ok(())
    }
}

impl<W: Write> RenderTarget for JsonFrameTarget<W> {
    fn begin_frame(&mut self, frame: u64) -> Result<()> {
        self.write_current()?;
        self.current = Some(FrameData::new(frame));
        Ok(())
    }

    fn update_screen_image(&mut self, projector: usize, shapes: &[PointSequence]) -> Result<()> {
        let frame = self.current();
        if frame.screen_images.len() <= projector {
            frame.screen_images.resize_with(projector + 1, Vec::new);
        }
        frame.screen_images[projector] = shapes
            .iter()
            .map(|shape| shape.iter().map(|p| [p.x, p.y]).collect())
            .collect();
        Ok(())
    }

    fn update_membrane(
        &mut self,
        projector: usize,
        shape: usize,
        membrane: &Membrane,
    ) -> Result<()> {
        self.current().membranes.push(MembraneData {
            projector,
            shape,
            inner: membrane.inner().clone(),
            outer: membrane.outer().clone(),
            normal_helpers: None,
        });
        Ok(())
    }

    fn update_normal_helpers(
        &mut self,
        projector: usize,
        shape: usize,
        helpers: &NormalHelpers,
    ) -> Result<()> {
        let frame = self.current();
        if let Some(data) = frame
            .membranes
            .iter_mut()
            .rev()
            .find(|m| m.projector == projector && m.shape == shape)
        {
            data.normal_helpers = Some(helpers.clone());
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.write_current()
    }

    fn name(&self) -> &str {
        "json"
    }
}
