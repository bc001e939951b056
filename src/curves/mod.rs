//! Curves module - parametric samplers for form outlines
//!
//! This module provides:
//! - `Curve` trait for angle-parameterised closed curves
//! - `Ellipse` sampler and the mutable `EllipseCurve` arc
//! - `CircleWave`, a rippling circle
//! - `CubicBezier` and the wipe-curve builder

mod bezier;
mod circle_wave;
mod ellipse;
mod traits;
pub mod wipe;

pub use bezier::CubicBezier;
pub use circle_wave::CircleWave;
pub use ellipse::{Ellipse, EllipseCurve};
pub use traits::Curve;
pub use wipe::{wipe_points, WipeParams};
