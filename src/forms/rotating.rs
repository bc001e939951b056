//! Rotating forms - ellipses that grow out of, or shrink into, a point
//!
//! Both variants share the same structure: a small "bulb" ellipse at the
//! projector and a large "image" ellipse on the screen, swept by one
//! rotation step per tick. They differ only in which angular bound moves and
//! how the swept arc is joined to its wipe curve.

use crate::constants::{
    CENTRE_P_Y, CENTRE_Q_Y, ELLIPSE_POINT_COUNT, LEFT_FORM_CENTRE_X, PROJECTED_IMAGE_RADIUS_X,
    PROJECTED_IMAGE_RADIUS_Y, PROJECTOR_BULB_RADIUS, RIGHT_FORM_CENTRE_X, ROTATING_INITIAL_ANGLE,
    ROTATION_DELTA, TWO_PI, WIPE_POINT_COUNT,
};
use crate::curves::{wipe_points, CubicBezier, Ellipse, EllipseCurve, WipeParams};
use crate::geometry::PointSequence;

use super::traits::Form;

/// Tick at which a form with rotation step `rotation_delta` completes a turn
pub fn swap_at_tick(rotation_delta: f64) -> u64 {
    (TWO_PI / rotation_delta).floor() as u64
}

/// Whether the rotating forms should swap sides at `tick`
pub fn swap_sides_test(tick: u64) -> bool {
    tick == swap_at_tick(ROTATION_DELTA)
}

/// Which half of the scene a form is drawn on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal centre of forms on this side
    pub fn centre_x(self) -> f64 {
        match self {
            Side::Left => LEFT_FORM_CENTRE_X,
            Side::Right => RIGHT_FORM_CENTRE_X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Rotation behaviour of a rotating form
///
/// - `Growing`: the end angle sweeps away from the start, so the arc grows
///   from a point to a full ellipse.
/// - `Shrinking`: the start angle sweeps towards the end, so a full ellipse
///   shrinks to a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Growing,
    Shrinking,
}

impl Rotation {
    /// Angle the sweep starts from
    pub fn initial_angle(self) -> f64 {
        ROTATING_INITIAL_ANGLE
    }

    /// (start, end) bounds of the arc before the first tick
    pub fn initial_bounds(self) -> (f64, f64) {
        let initial = self.initial_angle();
        match self {
            Rotation::Growing => (initial, initial),
            Rotation::Shrinking => (initial, initial - TWO_PI),
        }
    }

    /// Tracked angle after `tick` rotation steps
    pub fn current_angle(self, tick: u64) -> f64 {
        self.initial_angle() - ROTATION_DELTA * tick as f64
    }

    /// Move this variant's bound of `curve` to the angle for `tick`
    ///
    /// Returns the new angle.
    pub fn advance(self, curve: &mut EllipseCurve, tick: u64) -> f64 {
        let angle = self.current_angle(tick);
        match self {
            Rotation::Growing => curve.end_angle = angle,
            Rotation::Shrinking => curve.start_angle = angle,
        }
        angle
    }

    /// Join a swept arc and its wipe curve into one continuous outline
    ///
    /// The wipe always starts on the arc's moving end. Its first point
    /// duplicates an arc point and is dropped.
    pub fn combine(self, arc: PointSequence, wipe: PointSequence) -> PointSequence {
        match self {
            // arc ends at the moving angle: append the wipe
            Rotation::Growing => {
                let mut outline = arc;
                outline.extend(wipe.into_iter().skip(1));
                outline
            }
            // arc starts at the moving angle: prefix the reversed wipe
            Rotation::Shrinking => {
                let mut outline: PointSequence = wipe.into_iter().rev().collect();
                outline.pop();
                outline.extend(arc);
                outline
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Rotation::Growing => "Growing",
            Rotation::Shrinking => "Shrinking",
        }
    }
}

/// An ellipse pair swept by one rotation step per tick
///
/// Emits two outlines per update: the bulb (projector side) first, then the
/// image (screen side). Both have `ELLIPSE_POINT_COUNT + WIPE_POINT_COUNT + 1`
/// points.
#[derive(Clone, Debug)]
pub struct RotatingForm {
    rotation: Rotation,
    side: Side,
    initial_side: Side,
    bulb: EllipseCurve,
    image: EllipseCurve,
    bulb_wipe: CubicBezier,
    image_wipe: CubicBezier,
    tick: u64,
    current_angle: f64,
}

impl RotatingForm {
    pub fn new(rotation: Rotation, side: Side) -> Self {
        let (start, end) = rotation.initial_bounds();
        let cx = side.centre_x();
        Self {
            rotation,
            side,
            initial_side: side,
            bulb: EllipseCurve::new(
                Ellipse::circle(cx, CENTRE_P_Y, PROJECTOR_BULB_RADIUS),
                start,
                end,
            ),
            image: EllipseCurve::new(
                Ellipse::new(cx, CENTRE_Q_Y, PROJECTED_IMAGE_RADIUS_X, PROJECTED_IMAGE_RADIUS_Y),
                start,
                end,
            ),
            bulb_wipe: CubicBezier::default(),
            image_wipe: CubicBezier::default(),
            tick: 0,
            current_angle: rotation.initial_angle(),
        }
    }

    /// Shorthand for a growing form
    pub fn growing(side: Side) -> Self {
        Self::new(Rotation::Growing, side)
    }

    /// Shorthand for a shrinking form
    pub fn shrinking(side: Side) -> Self {
        Self::new(Rotation::Shrinking, side)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Tick of the most recent update
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Angle of the moving bound after the most recent update
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn bulb(&self) -> &EllipseCurve {
        &self.bulb
    }

    pub fn image(&self) -> &EllipseCurve {
        &self.image
    }

    /// Move both ellipses to the other side and restart the sweep
    pub fn swap_sides(&mut self) {
        self.side = self.side.opposite();
        self.restart();
        log::info!("{} form swapped to {:?}", self.rotation.name(), self.side);
    }

    fn restart(&mut self) {
        let (start, end) = self.rotation.initial_bounds();
        let cx = self.side.centre_x();
        for curve in [&mut self.bulb, &mut self.image] {
            curve.ellipse.cx = cx;
            curve.start_angle = start;
            curve.end_angle = end;
        }
        self.tick = 0;
        self.current_angle = self.rotation.initial_angle();
    }
}

impl Form for RotatingForm {
    fn name(&self) -> &str {
        self.rotation.name()
    }

    fn shape_sizes(&self) -> Vec<usize> {
        let len = ELLIPSE_POINT_COUNT + WIPE_POINT_COUNT + 1;
        vec![len, len]
    }

    fn updated_points(&mut self, tick: u64) -> Vec<PointSequence> {
        self.tick = tick;
        self.rotation.advance(&mut self.bulb, tick);
        self.current_angle = self.rotation.advance(&mut self.image, tick);
        let params = WipeParams::new(self.rotation.initial_angle(), self.current_angle);

        let bulb_arc = self.bulb.points(ELLIPSE_POINT_COUNT);
        let image_arc = self.image.points(ELLIPSE_POINT_COUNT);
        let bulb_wipe = wipe_points(&self.bulb, &mut self.bulb_wipe, &params, WIPE_POINT_COUNT);
        let image_wipe = wipe_points(&self.image, &mut self.image_wipe, &params, WIPE_POINT_COUNT);

        log::trace!(
            "{} tick {} angle {:.4} alpha {:.3}",
            self.rotation.name(),
            tick,
            self.current_angle,
            params.alpha
        );

        vec![
            self.rotation.combine(bulb_arc, bulb_wipe),
            self.rotation.combine(image_arc, image_wipe),
        ]
    }

    fn reset(&mut self) {
        self.side = self.initial_side;
        self.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Curve;
    use std::f64::consts::PI;

    #[test]
    fn test_swap_at_tick() {
        assert_eq!(swap_at_tick(PI / 180.0), 360);
        assert!(swap_sides_test(360));
        assert!(!swap_sides_test(0));
        assert!(!swap_sides_test(359));
        assert!(!swap_sides_test(361));
        assert!(!swap_sides_test(720));
    }

    #[test]
    fn test_growing_full_rotation() {
        let mut form = RotatingForm::growing(Side::Left);
        let initial = form.current_angle();
        for tick in 1..=360 {
            form.updated_points(tick);
        }
        assert_eq!(form.tick(), 360);
        assert!((initial - form.current_angle() - 2.0 * PI).abs() < 1e-9);
        let wrapped = form.current_angle().rem_euclid(2.0 * PI);
        assert!((wrapped - initial.rem_euclid(2.0 * PI)).abs() < 1e-9);
        assert!(swap_sides_test(form.tick()));
    }

    #[test]
    fn test_outline_sizes_are_stable() {
        for mut form in [RotatingForm::growing(Side::Left), RotatingForm::shrinking(Side::Right)] {
            let sizes = form.shape_sizes();
            for tick in [0, 1, 45, 180, 359, 360] {
                let outlines = form.updated_points(tick);
                assert_eq!(outlines.len(), 2);
                assert_eq!(outlines[0].len(), sizes[0]);
                assert_eq!(outlines[1].len(), sizes[1]);
            }
        }
    }

    #[test]
    fn test_growing_bounds() {
        let mut form = RotatingForm::growing(Side::Left);
        form.updated_points(90);
        assert_eq!(form.image().start_angle, 1.5 * PI);
        assert!((form.image().end_angle - PI).abs() < 1e-12);
        assert_eq!(form.bulb().end_angle, form.image().end_angle);
    }

    #[test]
    fn test_shrinking_bounds() {
        let mut form = RotatingForm::shrinking(Side::Left);
        form.updated_points(90);
        assert!((form.image().start_angle - PI).abs() < 1e-12);
        assert!((form.image().end_angle + 0.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_outline_is_continuous() {
        // The join between arc and wipe sits on the ellipse at the moving angle
        let mut growing = RotatingForm::growing(Side::Left);
        let outlines = growing.updated_points(120);
        let joint = growing.image().point_at(growing.current_angle());
        assert!((outlines[1][ELLIPSE_POINT_COUNT] - joint).norm() < 1e-9);
        // Fully collapsed wipe ends at the centre
        assert!((outlines[1].last().unwrap() - growing.image().centre()).norm() < 1e-9);

        let mut shrinking = RotatingForm::shrinking(Side::Left);
        let outlines = shrinking.updated_points(120);
        let joint = shrinking.image().point_at(shrinking.current_angle());
        assert!((outlines[1][WIPE_POINT_COUNT] - joint).norm() < 1e-9);
        assert!((outlines[1][0] - shrinking.image().centre()).norm() < 1e-9);
    }

    #[test]
    fn test_swap_sides() {
        let mut form = RotatingForm::growing(Side::Left);
        for tick in 1..=360 {
            form.updated_points(tick);
        }
        form.swap_sides();
        assert_eq!(form.side(), Side::Right);
        assert_eq!(form.image().ellipse.cx, RIGHT_FORM_CENTRE_X);
        assert_eq!(form.bulb().ellipse.cx, RIGHT_FORM_CENTRE_X);
        assert_eq!(form.image().end_angle, 1.5 * PI);
        assert_eq!(form.tick(), 0);

        form.swap_sides();
        assert_eq!(form.side(), Side::Left);
        assert_eq!(form.image().ellipse.cx, LEFT_FORM_CENTRE_X);
    }

    #[test]
    fn test_reset_restores_initial_side() {
        let mut form = RotatingForm::shrinking(Side::Right);
        form.updated_points(30);
        form.swap_sides();
        form.reset();
        assert_eq!(form.side(), Side::Right);
        assert_eq!(form.image().start_angle, 1.5 * PI);
        assert_eq!(form.current_angle(), 1.5 * PI);
    }
}
