//! Projector role - a form seen from the light source
//!
//! From the projector's own position every outline collapses to a single
//! point. `ProjectorRole` wraps any form and emits outlines of the same
//! shape sizes whose points all sit at the projector.

use crate::geometry::{repeat, Point2, PointSequence};

use super::traits::Form;

pub struct ProjectorRole<F: Form> {
    form: F,
    position: Point2,
    points: Vec<PointSequence>,
}

impl<F: Form> ProjectorRole<F> {
    /// Wrap `form` as seen from a projector at `position`
    pub fn new(form: F, position: Point2) -> Self {
        let points = form
            .shape_sizes()
            .into_iter()
            .map(|len| repeat(len, position))
            .collect();
        Self {
            form,
            position,
            points,
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    /// The wrapped screen-side form
    pub fn form(&self) -> &F {
        &self.form
    }
}

impl<F: Form> Form for ProjectorRole<F> {
    fn name(&self) -> &str {
        self.form.name()
    }

    fn shape_sizes(&self) -> Vec<usize> {
        self.points.iter().map(Vec::len).collect()
    }

    fn updated_points(&mut self, _tick: u64) -> Vec<PointSequence> {
        self.points.clone()
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}
