//! CircleWave - a circle whose radius ripples over time
//!
//! ## Parametric Equation
//! ```text
//! swell = cos(2π * radial_frequency * tick)
//! drift = 2π * phase_frequency * tick
//! r(θ)  = radius + amplitude * swell * sin(wave_count * θ + drift + phase_offset)
//! x     = cx + r(θ) * cos θ
//! y     = cy + r(θ) * sin θ
//! ```
//!
//! `swell` makes the ripples breathe in and out, `drift` walks them around
//! the circle. The two frequencies are independent so the pattern never
//! visibly repeats.

use std::f64::consts::TAU;

use crate::geometry::{Point2, PointSequence};

#[derive(Clone, Debug, PartialEq)]
pub struct CircleWave {
    /// Unperturbed radius
    pub radius: f64,
    /// Peak radial displacement
    pub amplitude: f64,
    /// Ripples per revolution (need not be whole)
    pub wave_count: f64,
    /// Cycles per tick of the ripple swell
    pub radial_frequency: f64,
    /// Cycles per tick of the ripple drift around the circle
    pub phase_frequency: f64,
    /// Phase added to the ripple term
    pub phase_offset: f64,
    pub centre: Point2,
}

impl CircleWave {
    /// Create a circle wave centred at the origin
    pub fn new(
        radius: f64,
        amplitude: f64,
        wave_count: f64,
        radial_frequency: f64,
        phase_frequency: f64,
        phase_offset: f64,
    ) -> Self {
        Self {
            radius,
            amplitude,
            wave_count,
            radial_frequency,
            phase_frequency,
            phase_offset,
            centre: Point2::origin(),
        }
    }

    /// Move the wave to a specific centre (builder pattern)
    pub fn at(mut self, centre: Point2) -> Self {
        self.centre = centre;
        self
    }

    /// Radius at angle `theta` for the given tick
    pub fn radius_at(&self, theta: f64, tick: u64) -> f64 {
        let tick = tick as f64;
        let swell = (TAU * self.radial_frequency * tick).cos();
        let drift = TAU * self.phase_frequency * tick;
        self.radius + self.amplitude * swell * (self.wave_count * theta + drift + self.phase_offset).sin()
    }

    /// Sample `count + 1` points once around the circle at `tick`
    pub fn sample(&self, count: usize, tick: u64) -> PointSequence {
        if count == 0 {
            let r = self.radius_at(0.0, tick);
            return vec![Point2::new(self.centre.x + r, self.centre.y)];
        }

        (0..=count)
            .map(|i| {
                let theta = TAU * i as f64 / count as f64;
                let r = self.radius_at(theta, tick);
                Point2::new(
                    self.centre.x + r * theta.cos(),
                    self.centre.y + r * theta.sin(),
                )
            })
            .collect()
    }
}
