//! Wipe curves - the short cubic that "erases" or "grows" an outline
//!
//! While a rotating form sweeps around its ellipse, the end of the arc is
//! joined to the ellipse centre by a cubic curve. Near the seam (where the
//! sweep began or is about to finish) the curve hugs the ellipse; elsewhere
//! it cuts sharply to the centre. `alpha` blends between the two.

use std::f64::consts::{PI, TAU};

use super::bezier::CubicBezier;
use super::traits::Curve;
use crate::constants::{ANGLE_OFFSET_THRESHOLD, DELTA_ANGLE};
use crate::geometry::{lerp, PointSequence};

/// Angular distance between two angles, folded into [0, π]
///
/// Rotation direction never matters: 350° away is treated as 10° away.
pub fn angle_offset(initial_angle: f64, current_angle: f64) -> f64 {
    let offset = (current_angle - initial_angle).abs().rem_euclid(TAU);
    if offset < PI {
        offset
    } else {
        TAU - offset
    }
}

/// Blend factor for a folded angle offset
///
/// Ramps linearly from 0 at no offset to 1 at `ANGLE_OFFSET_THRESHOLD`,
/// then saturates.
pub fn wipe_alpha(angle_offset: f64) -> f64 {
    if angle_offset > ANGLE_OFFSET_THRESHOLD {
        1.0
    } else {
        angle_offset / ANGLE_OFFSET_THRESHOLD
    }
}

/// Angles and blend factor for one wipe curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WipeParams {
    pub current_angle: f64,
    pub delta_angle_1: f64,
    pub delta_angle_2: f64,
    pub alpha: f64,
}

impl WipeParams {
    /// Derive the wipe for a form that started at `initial_angle`
    pub fn new(initial_angle: f64, current_angle: f64) -> Self {
        let alpha = wipe_alpha(angle_offset(initial_angle, current_angle));
        Self {
            current_angle,
            delta_angle_1: current_angle + DELTA_ANGLE * alpha,
            delta_angle_2: current_angle - DELTA_ANGLE * alpha,
            alpha,
        }
    }
}

/// Rebuild `wipe` for `curve` and sample it with `count + 1` points
///
/// The curve starts on the ellipse at the current angle and ends `alpha` of
/// the way towards the centre. Each control point sits on the ellipse at a
/// delta angle, pulled 25% (first) or 75% (second) towards the end point.
pub fn wipe_points<C: Curve>(
    curve: &C,
    wipe: &mut CubicBezier,
    params: &WipeParams,
    count: usize,
) -> PointSequence {
    let centre = curve.centre();
    let start = curve.point_at(params.current_angle);
    let end = lerp(&start, &centre, params.alpha);
    let control_1 = lerp(&curve.point_at(params.delta_angle_1), &end, 0.25);
    let control_2 = lerp(&curve.point_at(params.delta_angle_2), &end, 0.75);

    wipe.set(start, control_1, control_2, end);
    wipe.points(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Ellipse;
    use crate::geometry::Point2;

    #[test]
    fn test_alpha_at_zero() {
        assert_eq!(wipe_alpha(0.0), 0.0);
    }

    #[test]
    fn test_alpha_saturates() {
        let mut offset = ANGLE_OFFSET_THRESHOLD;
        while offset <= PI {
            assert_eq!(wipe_alpha(offset), 1.0);
            offset += 0.01;
        }
    }

    #[test]
    fn test_alpha_monotonic() {
        let mut previous = wipe_alpha(0.0);
        for i in 1..=1000 {
            let offset = PI * i as f64 / 1000.0;
            let alpha = wipe_alpha(offset);
            assert!(alpha >= previous);
            assert!((0.0..=1.0).contains(&alpha));
            previous = alpha;
        }
    }

    #[test]
    fn test_angle_offset_folds() {
        let ten = 10f64.to_radians();
        assert!((angle_offset(0.0, ten) - ten).abs() < 1e-12);
        assert!((angle_offset(0.0, -ten) - ten).abs() < 1e-12);
        assert!((angle_offset(0.0, TAU - ten) - ten).abs() < 1e-12);
        assert!((angle_offset(1.5 * PI, 1.5 * PI - TAU) - 0.0).abs() < 1e-9);
        assert!((angle_offset(0.0, PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_wipe_degenerate_at_seam() {
        let ellipse = Ellipse::new(0.0, 0.0, 2.8, 2.0);
        let mut wipe = CubicBezier::default();
        let params = WipeParams::new(1.5 * PI, 1.5 * PI);
        assert_eq!(params.alpha, 0.0);

        let points = wipe_points(&ellipse, &mut wipe, &params, 50);
        assert_eq!(points.len(), 51);
        let seam = ellipse.point_at(1.5 * PI);
        for p in &points {
            assert!((p - seam).norm() < 1e-9);
        }
    }

    #[test]
    fn test_wipe_reaches_centre_at_full_alpha() {
        let ellipse = Ellipse::new(3.5, 2.6, 2.8, 2.0);
        let mut wipe = CubicBezier::default();
        let params = WipeParams::new(1.5 * PI, 0.5 * PI);
        assert_eq!(params.alpha, 1.0);

        let points = wipe_points(&ellipse, &mut wipe, &params, 50);
        let start = ellipse.point_at(0.5 * PI);
        assert!((points[0] - start).norm() < 1e-12);
        assert!((points[50] - Point2::new(3.5, 2.6)).norm() < 1e-12);
        assert_eq!(wipe.v3, points[50]);
    }
}
