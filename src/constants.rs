//! Fixed configuration for every form, curve and membrane.
//!
//! None of these are runtime configurable. Angles are in radians.

use std::f64::consts::PI;

/// A quarter turn
pub const HALF_PI: f64 = PI / 2.0;
/// A quarter of a half turn (45°)
pub const QUARTER_PI: f64 = PI / 4.0;
/// A full turn
pub const TWO_PI: f64 = 2.0 * PI;

// Scene layout

pub const LEFT_FORM_CENTRE_X: f64 = -3.5;
pub const RIGHT_FORM_CENTRE_X: f64 = -LEFT_FORM_CENTRE_X;
/// Vertical centre of the projector bulb curve
pub const CENTRE_P_Y: f64 = 0.3;
/// Vertical centre of the projected image curve
pub const CENTRE_Q_Y: f64 = 2.6;
/// Depth separation between projector-side and screen-side outlines
pub const MEMBRANE_LENGTH: f64 = 15.0;

// Rotating (growing / shrinking) forms

pub const PROJECTED_IMAGE_RADIUS_X: f64 = 2.8;
pub const PROJECTED_IMAGE_RADIUS_Y: f64 = 2.0;
pub const PROJECTOR_BULB_RADIUS: f64 = 0.08;
pub const ELLIPSE_POINT_COUNT: usize = 100;
pub const WIPE_POINT_COUNT: usize = 50;
pub const MEMBRANE_SEGMENT_COUNT: usize = 1;
/// Rotation applied to the tracked angle once per tick (1°)
pub const ROTATION_DELTA: f64 = PI / 180.0;
/// Angular half-width of the wipe curve's control points at full alpha (15°)
pub const DELTA_ANGLE: f64 = 15.0 * PI / 180.0;
/// Angle offset beyond which the wipe curve collapses fully to the centre (45°)
pub const ANGLE_OFFSET_THRESHOLD: f64 = 45.0 * PI / 180.0;
/// Initial tracked angle of both rotating variants (bottom of the ellipse)
pub const ROTATING_INITIAL_ANGLE: f64 = 1.5 * PI;

// Between you and I

pub const BYAI_ELLIPSE_POINT_COUNT: usize = 100;
pub const BYAI_TRAVELLING_WAVE_POINT_COUNT: usize = 100;
pub const BYAI_RADIUS_X: f64 = 1.5;
pub const BYAI_RADIUS_Y: f64 = 2.0;
pub const BYAI_MAX_TICKS: u64 = 10_000;
/// Travelling wave frequency in cycles per oscillation period
pub const BYAI_WAVE_FREQUENCY: f64 = 2.0;

// Coupling

pub const CIRCLE_WAVE_POINT_COUNT: usize = 200;
pub const COUPLING_OUTER_RADIUS: f64 = 2.0;
pub const COUPLING_INNER_RADIUS: f64 = 1.0;
pub const COUPLING_WAVE_AMPLITUDE: f64 = 0.4;
pub const COUPLING_WAVE_COUNT: f64 = 3.5;
pub const COUPLING_RADIAL_FREQUENCY: f64 = 0.001;
pub const COUPLING_PHASE_FREQUENCY: f64 = 0.001;

// Debug helpers

/// Length of the vertex normal helper lines
pub const NORMAL_HELPER_LENGTH: f64 = 0.1;
