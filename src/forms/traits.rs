//! Form trait definition
//!
//! A `Form` is a stateful generator of outlines. Every call to
//! `updated_points` moves the animation on by one tick and returns one point
//! sequence per shape the form draws.

use crate::geometry::PointSequence;

/// An animated outline generator
///
/// ## Ticks
///
/// The driver passes its tick into every update. Forms that follow a global
/// rotation (the rotating forms) derive their angle from it; forms with their
/// own oscillation period keep a private counter and ignore it.
///
/// ## Shape sizes
///
/// The number of outlines and the number of points in each never change for
/// the lifetime of a form. Renderers rely on this to update their buffers in
/// place.
pub trait Form {
    /// Get the name of this form (for logging)
    fn name(&self) -> &str;

    /// Point count of each outline, in the order `updated_points` emits them
    fn shape_sizes(&self) -> Vec<usize>;

    /// Number of outlines emitted per update
    fn shape_count(&self) -> usize {
        self.shape_sizes().len()
    }

    /// Compute the outlines for this tick and advance the form
    fn updated_points(&mut self, tick: u64) -> Vec<PointSequence>;

    /// Return to the form's initial animation state
    fn reset(&mut self);
}

/// A boxed form for dynamic dispatch
pub type BoxedForm = Box<dyn Form>;
