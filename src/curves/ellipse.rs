//! Ellipse sampling - the primitive behind every ellipse-shaped outline
//!
//! `Ellipse` is a stateless sampler. `EllipseCurve` adds the angular range a
//! form mutates in place every tick.

use super::traits::Curve;
use crate::geometry::{Point2, PointSequence};

/// An axis-aligned ellipse centred at (cx, cy)
///
/// ## Parametric Equation
/// ```text
/// x = cx + radius_x * cos(θ + phase)
/// y = cy + radius_y * sin(θ + phase)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    /// Center X coordinate
    pub cx: f64,
    /// Center Y coordinate
    pub cy: f64,
    /// Horizontal radius
    pub radius_x: f64,
    /// Vertical radius
    pub radius_y: f64,
    /// Angle added to every evaluation (e.g. π/2 for a quarter-turn offset)
    pub phase: f64,
}

impl Ellipse {
    /// Create an ellipse with no phase offset
    pub fn new(cx: f64, cy: f64, radius_x: f64, radius_y: f64) -> Self {
        Self {
            cx,
            cy,
            radius_x,
            radius_y,
            phase: 0.0,
        }
    }

    /// Create a circle
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx, cy, radius, radius)
    }

    /// Sample `count + 1` points evenly spaced from `start_angle` to `end_angle`
    ///
    /// The direction of travel follows the sign of `end_angle - start_angle`.
    /// The first and last points are exactly the curve evaluated at the two
    /// bounds.
    pub fn sample(&self, start_angle: f64, end_angle: f64, count: usize) -> PointSequence {
        if count == 0 {
            return vec![self.point_at(start_angle)];
        }

        (0..=count)
            .map(|i| {
                let t = i as f64 / count as f64;
                // Written as a weighted sum so t = 1 lands exactly on end_angle
                let theta = start_angle * (1.0 - t) + end_angle * t;
                self.point_at(theta)
            })
            .collect()
    }
}

impl Curve for Ellipse {
    fn point_at(&self, theta: f64) -> Point2 {
        let angle = theta + self.phase;
        Point2::new(
            self.cx + self.radius_x * angle.cos(),
            self.cy + self.radius_y * angle.sin(),
        )
    }

    fn centre(&self) -> Point2 {
        Point2::new(self.cx, self.cy)
    }
}

/// An ellipse arc owned by a form
///
/// Created once and mutated every tick: the form moves one of the angular
/// bounds and flips `cx` when the form swaps sides.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseCurve {
    pub ellipse: Ellipse,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl EllipseCurve {
    pub fn new(ellipse: Ellipse, start_angle: f64, end_angle: f64) -> Self {
        Self {
            ellipse,
            start_angle,
            end_angle,
        }
    }

    /// Sample the current arc with `count + 1` points
    pub fn points(&self, count: usize) -> PointSequence {
        self.ellipse.sample(self.start_angle, self.end_angle, count)
    }
}

impl Curve for EllipseCurve {
    fn point_at(&self, theta: f64) -> Point2 {
        self.ellipse.point_at(theta)
    }

    fn centre(&self) -> Point2 {
        self.ellipse.centre()
    }
}
