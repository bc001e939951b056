//! Projector - pairs projector-side and screen-side outlines
//!
//! Each frame a projector computes its outlines, rebuilds one membrane per
//! outline pair and hands the screen image and membranes to the render
//! target, in that order.

use crate::constants::NORMAL_HELPER_LENGTH;
use crate::error::{Error, Result};
use crate::forms::{BoxedForm, Form, RotatingForm};
use crate::geometry::PointSequence;
use crate::membrane::{Membrane, NormalHelpers};
use crate::render::RenderTarget;

/// Where a projector's outlines come from
enum Source {
    /// Separate forms for the projector and the screen, one membrane per
    /// shape. Both forms emit the same shape sizes.
    Paired {
        projector: BoxedForm,
        screen: BoxedForm,
    },
    /// A rotating form emitting its bulb and image outlines together
    Rotating(RotatingForm),
}

pub struct Projector {
    source: Source,
    membranes: Vec<Membrane>,
    screen_image: Vec<PointSequence>,
    show_vertex_normals: bool,
}

impl Projector {
    /// Pair a projector-side form with a screen-side form
    ///
    /// Fails if the forms disagree on how many outlines they emit or how many
    /// points each has, since every membrane needs equal-length outlines.
    pub fn paired(projector: BoxedForm, screen: BoxedForm) -> Result<Self> {
        let projector_sizes = projector.shape_sizes();
        let screen_sizes = screen.shape_sizes();
        if projector_sizes != screen_sizes {
            return Err(Error::ShapeMismatch {
                projector: projector_sizes,
                screen: screen_sizes,
            });
        }

        log::debug!(
            "Pairing {} projector with {} screen ({} shapes)",
            projector.name(),
            screen.name(),
            screen_sizes.len()
        );

        Ok(Self::with_source(
            Source::Paired { projector, screen },
            screen_sizes.len(),
        ))
    }

    /// Drive a rotating form's bulb-to-image membrane
    pub fn rotating(form: RotatingForm) -> Self {
        Self::with_source(Source::Rotating(form), 1)
    }

    fn with_source(source: Source, membrane_count: usize) -> Self {
        Self {
            source,
            membranes: (0..membrane_count).map(|_| Membrane::new()).collect(),
            screen_image: Vec::new(),
            show_vertex_normals: false,
        }
    }

    /// Number of membranes (and screen outlines) per frame
    pub fn shape_count(&self) -> usize {
        self.membranes.len()
    }

    pub fn membranes(&self) -> &[Membrane] {
        &self.membranes
    }

    /// Screen outlines from the most recent update
    pub fn screen_image(&self) -> &[PointSequence] {
        &self.screen_image
    }

    pub fn shows_vertex_normals(&self) -> bool {
        self.show_vertex_normals
    }

    pub fn toggle_vertex_normals(&mut self) {
        self.show_vertex_normals = !self.show_vertex_normals;
        log::debug!(
            "Vertex normal helpers {}",
            if self.show_vertex_normals { "on" } else { "off" }
        );
    }

    /// Swap a rotating form to the other side; paired forms have no sides
    pub fn swap_sides(&mut self) {
        if let Source::Rotating(form) = &mut self.source {
            form.swap_sides();
        }
    }

    /// Return every form to its initial state
    pub fn reset(&mut self) {
        match &mut self.source {
            Source::Paired { projector, screen } => {
                projector.reset();
                screen.reset();
            }
            Source::Rotating(form) => form.reset(),
        }
    }

    /// Compute this frame's outlines and membranes and hand them to `target`
    ///
    /// `index` identifies this projector to the target.
    pub fn update(
        &mut self,
        tick: u64,
        index: usize,
        target: &mut dyn RenderTarget,
    ) -> Result<()> {
        match &mut self.source {
            Source::Paired { projector, screen } => {
                // Outlines are drawn back to front
                let projector_shapes = reversed(projector.updated_points(tick));
                let screen_shapes = reversed(screen.updated_points(tick));
                for ((membrane, p), q) in self
                    .membranes
                    .iter_mut()
                    .zip(&projector_shapes)
                    .zip(&screen_shapes)
                {
                    membrane.update(p, q);
                }
                self.screen_image = screen_shapes;
            }
            Source::Rotating(form) => {
                let mut outlines = form.updated_points(tick).into_iter();
                if let (Some(bulb), Some(image)) = (outlines.next(), outlines.next()) {
                    self.membranes[0].update(&bulb, &image);
                    self.screen_image = vec![image];
                }
            }
        }

        target.update_screen_image(index, &self.screen_image)?;
        for (shape, membrane) in self.membranes.iter().enumerate() {
            target.update_membrane(index, shape, membrane)?;
            if self.show_vertex_normals {
                let helpers = NormalHelpers::from_membrane(membrane, NORMAL_HELPER_LENGTH as f32);
                target.update_normal_helpers(index, shape, &helpers)?;
            }
        }
        Ok(())
    }
}

fn reversed(shapes: Vec<PointSequence>) -> Vec<PointSequence> {
    shapes
        .into_iter()
        .map(|mut shape| {
            shape.reverse();
            shape
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{BetweenYouAndIForm, CouplingForm, ProjectorRole, Side};
    use crate::geometry::Point2;
    use crate::membrane::HelperLine;
    use crate::render::HeadlessTarget;

    fn coupling_projector() -> Projector {
        Projector::paired(
            Box::new(ProjectorRole::new(CouplingForm::new(), Point2::new(0.0, 0.5))),
            Box::new(CouplingForm::new()),
        )
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        helpers: Vec<HelperLine>,
    }

    impl RenderTarget for Recorder {
        fn update_screen_image(&mut self, projector: usize, shapes: &[PointSequence]) -> Result<()> {
            self.calls.push(format!("screen {} {}", projector, shapes.len()));
            Ok(())
        }

        fn update_membrane(
            &mut self,
            projector: usize,
            shape: usize,
            _membrane: &Membrane,
        ) -> Result<()> {
            self.calls.push(format!("membrane {} {}", projector, shape));
            Ok(())
        }

        fn update_normal_helpers(
            &mut self,
            _projector: usize,
            _shape: usize,
            helpers: &NormalHelpers,
        ) -> Result<()> {
            self.helpers.extend_from_slice(&helpers.inner);
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = Projector::paired(
            Box::new(CouplingForm::new()),
            Box::new(BetweenYouAndIForm::new(true, 3.0)),
        );
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_paired_update_order() {
        let mut projector = coupling_projector();
        let mut target = Recorder::default();
        projector.update(1, 3, &mut target).unwrap();
        assert_eq!(
            target.calls,
            vec!["screen 3 2", "membrane 3 0", "membrane 3 1"]
        );
        assert!(target.helpers.is_empty());
    }

    #[test]
    fn test_paired_membranes_span_projector_and_screen() {
        let mut projector = coupling_projector();
        projector.update(1, 0, &mut HeadlessTarget::new()).unwrap();

        assert_eq!(projector.shape_count(), 2);
        for (membrane, screen) in projector.membranes().iter().zip(projector.screen_image()) {
            let inner = membrane.inner();
            let n = screen.len();
            assert_eq!(inner.vertex_count(), 2 * n);
            // Projector row is collapsed onto the projector position
            for i in 0..n {
                let p = inner.position(i);
                assert_eq!((p.x, p.y), (0.0, 0.5));
            }
            // Screen row follows the (reversed) screen outline
            let last = inner.position(2 * n - 1);
            assert!((last.x as f64 - screen[n - 1].x).abs() < 1e-5);
        }
    }

    #[test]
    fn test_screen_outlines_are_reversed() {
        let mut projector = coupling_projector();
        let mut reference = CouplingForm::new();
        projector.update(1, 0, &mut HeadlessTarget::new()).unwrap();

        let mut expected = reference.updated_points(1).remove(0);
        expected.reverse();
        assert_eq!(projector.screen_image()[0], expected);
    }

    #[test]
    fn test_rotating_projector() {
        let mut projector = Projector::rotating(RotatingForm::growing(Side::Left));
        let mut target = HeadlessTarget::new();
        projector.update(10, 0, &mut target).unwrap();

        assert_eq!(projector.shape_count(), 1);
        assert_eq!(projector.screen_image().len(), 1);
        assert_eq!(target.membrane_count(), 1);
        let n = projector.screen_image()[0].len();
        assert_eq!(projector.membranes()[0].inner().vertex_count(), 2 * n);
    }

    #[test]
    fn test_vertex_normal_helpers() {
        let mut projector = coupling_projector();
        projector.toggle_vertex_normals();
        assert!(projector.shows_vertex_normals());

        let mut target = Recorder::default();
        projector.update(1, 0, &mut target).unwrap();
        let vertices: usize = projector
            .membranes()
            .iter()
            .map(|m| m.inner().vertex_count())
            .sum();
        assert_eq!(target.helpers.len(), vertices);

        projector.toggle_vertex_normals();
        assert!(!projector.shows_vertex_normals());
    }
}
