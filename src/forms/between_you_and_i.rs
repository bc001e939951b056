//! Between you and I - one wipe drawn three ways
//!
//! A vertical "wipe extent" sweeps across an ellipse of height `2 * RY` once
//! per `MAX_TICKS` ticks. Three outlines follow it at the same time:
//! - an ellipse arc that is revealed (or hidden) from the top,
//! - a travelling sine wave spanning the revealed part,
//! - a rotating straight chord clamped to the revealed part.
//!
//! When the sweep completes the form flips between wiping in and wiping out,
//! so the animation oscillates forever.

use std::f64::consts::PI;

use crate::constants::{
    BYAI_ELLIPSE_POINT_COUNT, BYAI_MAX_TICKS, BYAI_RADIUS_X, BYAI_RADIUS_Y,
    BYAI_TRAVELLING_WAVE_POINT_COUNT, BYAI_WAVE_FREQUENCY, HALF_PI, QUARTER_PI, TWO_PI,
};
use crate::curves::Ellipse;
use crate::geometry::{Point2, PointSequence};

use super::traits::Form;

#[derive(Clone, Debug)]
pub struct BetweenYouAndIForm {
    /// Vertical centre of the ellipse
    distance: f64,
    is_front: bool,
    wiping_in_ellipse: bool,
    tick: u64,
}

impl BetweenYouAndIForm {
    /// Create a form centred at height `distance`
    ///
    /// Front forms start by wiping the ellipse in, back forms by wiping it out.
    pub fn new(is_front: bool, distance: f64) -> Self {
        Self {
            distance,
            is_front,
            wiping_in_ellipse: is_front,
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_wiping_in_ellipse(&self) -> bool {
        self.wiping_in_ellipse
    }

    /// Restart the sweep in the given mode
    pub fn reset_mode(&mut self, wiping_in_ellipse: bool) {
        log::debug!(
            "Between you and I: wiping {}",
            if wiping_in_ellipse { "in" } else { "out" }
        );
        self.tick = 0;
        self.wiping_in_ellipse = wiping_in_ellipse;
    }

    /// Progress through the current sweep, in [0, 1]
    fn progress(&self) -> f64 {
        self.tick as f64 / BYAI_MAX_TICKS as f64
    }

    /// Height of the swept band, in [0, 2 * RY]
    pub fn wipe_extent(&self) -> f64 {
        let min = self.distance - BYAI_RADIUS_Y;
        let max = self.distance + BYAI_RADIUS_Y;
        (max - min) * self.progress()
    }

    /// The ellipse arc above (wiping in) or below (wiping out) the sweep line
    ///
    /// Each tick moves the sweep line the same vertical distance, so the arc
    /// appears to speed up as it gets shorter near the poles.
    pub fn ellipse_points(&self, wipe_extent: f64) -> PointSequence {
        let y = BYAI_RADIUS_Y - wipe_extent;
        let theta = (y / BYAI_RADIUS_Y).clamp(-1.0, 1.0).acos();

        let (start_angle, end_angle) = if self.wiping_in_ellipse {
            (HALF_PI + theta, HALF_PI - theta)
        } else {
            (HALF_PI - theta, HALF_PI - (TWO_PI - theta))
        };

        let radius_x = BYAI_RADIUS_X - (PI * self.progress()).sin();
        Ellipse::new(0.0, self.distance, radius_x, BYAI_RADIUS_Y).sample(
            start_angle,
            end_angle,
            BYAI_ELLIPSE_POINT_COUNT,
        )
    }

    /// A sine wave travelling down the swept band
    ///
    /// `x(y, t) = A sin(k y - ω t)` with `k = 2π / λ`, `λ = 2 RY` and
    /// `ω = 2π f`.
    pub fn travelling_wave_points(&self, wipe_extent: f64) -> PointSequence {
        let count = BYAI_TRAVELLING_WAVE_POINT_COUNT;
        let lambda = 2.0 * BYAI_RADIUS_Y;
        let k = TWO_PI / lambda;
        let omega = TWO_PI * BYAI_WAVE_FREQUENCY;
        let t = self.progress();

        let (span, top) = if self.wiping_in_ellipse {
            (
                2.0 * BYAI_RADIUS_Y - wipe_extent,
                self.distance + BYAI_RADIUS_Y - wipe_extent,
            )
        } else {
            (wipe_extent, self.distance + BYAI_RADIUS_Y)
        };
        let dy = span / count as f64;

        (0..=count)
            .map(|n| {
                let y = n as f64 * dy;
                let x = BYAI_RADIUS_X * (k * y - omega * t).sin();
                Point2::new(x, top - y)
            })
            .collect()
    }

    /// Two endpoints of a chord rotating through the ellipse centre
    ///
    /// The chord has half-length `RY`. An endpoint past the sweep line
    /// (not yet revealed when wiping in, already hidden when wiping out)
    /// slides back along the chord to the line, but never further than `RY`
    /// from the centre. If the whole chord lies past the line the endpoint
    /// is pinned to the line.
    pub fn straight_line_points(&self, wipe_extent: f64) -> PointSequence {
        let centre = Point2::new(0.0, self.distance);
        let theta = -QUARTER_PI + PI * self.progress();
        let (sin, cos) = theta.sin_cos();
        let threshold_y = self.distance + BYAI_RADIUS_Y - wipe_extent;
        let clamp = |y: f64| {
            if self.wiping_in_ellipse {
                y.min(threshold_y)
            } else {
                y.max(threshold_y)
            }
        };

        [BYAI_RADIUS_Y, -BYAI_RADIUS_Y]
            .into_iter()
            .map(|reach| {
                let y = centre.y + reach * sin;
                let along = if clamp(y) == y {
                    reach
                } else {
                    ((threshold_y - centre.y) / sin).clamp(-BYAI_RADIUS_Y, BYAI_RADIUS_Y)
                };
                Point2::new(centre.x + along * cos, clamp(centre.y + along * sin))
            })
            .collect()
    }
}

impl Form for BetweenYouAndIForm {
    fn name(&self) -> &str {
        if self.is_front {
            "Between you and I (front)"
        } else {
            "Between you and I (back)"
        }
    }

    fn shape_sizes(&self) -> Vec<usize> {
        vec![
            BYAI_ELLIPSE_POINT_COUNT + 1,
            BYAI_TRAVELLING_WAVE_POINT_COUNT + 1,
            2,
        ]
    }

    fn updated_points(&mut self, _tick: u64) -> Vec<PointSequence> {
        let wipe_extent = self.wipe_extent();
        let points = vec![
            self.ellipse_points(wipe_extent),
            self.travelling_wave_points(wipe_extent),
            self.straight_line_points(wipe_extent),
        ];

        self.tick += 1;
        if self.tick > BYAI_MAX_TICKS {
            self.reset_mode(!self.wiping_in_ellipse);
        }

        points
    }

    fn reset(&mut self) {
        self.reset_mode(self.is_front);
    }
}
