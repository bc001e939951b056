//! Coupling - two rippling circles, one inside the other

use crate::constants::{
    CIRCLE_WAVE_POINT_COUNT, COUPLING_INNER_RADIUS, COUPLING_OUTER_RADIUS,
    COUPLING_PHASE_FREQUENCY, COUPLING_RADIAL_FREQUENCY, COUPLING_WAVE_AMPLITUDE,
    COUPLING_WAVE_COUNT, HALF_PI,
};
use crate::curves::CircleWave;
use crate::geometry::{Point2, PointSequence};

use super::traits::Form;

/// An outer and an inner `CircleWave`, their ripples a quarter turn apart
#[derive(Clone, Debug)]
pub struct CouplingForm {
    outer: CircleWave,
    inner: CircleWave,
    tick: u64,
}

impl CouplingForm {
    /// Create a coupling centred at the origin
    pub fn new() -> Self {
        Self::at(Point2::origin())
    }

    /// Create a coupling centred at `centre`
    pub fn at(centre: Point2) -> Self {
        let wave = |radius, phase_offset| {
            CircleWave::new(
                radius,
                COUPLING_WAVE_AMPLITUDE,
                COUPLING_WAVE_COUNT,
                COUPLING_RADIAL_FREQUENCY,
                COUPLING_PHASE_FREQUENCY,
                phase_offset,
            )
            .at(centre)
        };

        Self {
            outer: wave(COUPLING_OUTER_RADIUS, 0.0),
            inner: wave(COUPLING_INNER_RADIUS, HALF_PI),
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn outer(&self) -> &CircleWave {
        &self.outer
    }

    pub fn inner(&self) -> &CircleWave {
        &self.inner
    }
}

impl Default for CouplingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CouplingForm {
    fn name(&self) -> &str {
        "Coupling"
    }

    fn shape_sizes(&self) -> Vec<usize> {
        vec![CIRCLE_WAVE_POINT_COUNT + 1, CIRCLE_WAVE_POINT_COUNT + 1]
    }

    fn updated_points(&mut self, _tick: u64) -> Vec<PointSequence> {
        let points = vec![
            self.outer.sample(CIRCLE_WAVE_POINT_COUNT, self.tick),
            self.inner.sample(CIRCLE_WAVE_POINT_COUNT, self.tick),
        ];
        self.tick += 1;
        points
    }

    fn reset(&mut self) {
        self.tick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_advance_tick() {
        let mut form = CouplingForm::new();
        let first = form.updated_points(0);
        assert_eq!(form.tick(), 1);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].len(), CIRCLE_WAVE_POINT_COUNT + 1);
        assert_eq!(first[1].len(), CIRCLE_WAVE_POINT_COUNT + 1);

        // Sampled at the tick before advancing
        assert_eq!(first[0], form.outer().sample(CIRCLE_WAVE_POINT_COUNT, 0));
    }

    #[test]
    fn test_outer_encloses_inner() {
        let mut form = CouplingForm::new();
        for _ in 0..10 {
            let shapes = form.updated_points(0);
            let max_inner = shapes[1].iter().map(|p| p.coords.norm()).fold(0.0, f64::max);
            let min_outer = shapes[0].iter().map(|p| p.coords.norm()).fold(f64::MAX, f64::min);
            assert!(max_inner < min_outer);
        }
    }

    #[test]
    fn test_reset() {
        let mut form = CouplingForm::new();
        form.updated_points(0);
        form.updated_points(0);
        form.reset();
        assert_eq!(form.tick(), 0);
    }
}
