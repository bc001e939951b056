//! Animation driver - advances every projector once per frame
//!
//! The driver owns the global frame counter and the rotation tick. The
//! rotation tick restarts after each full turn, when rotating forms swap
//! sides.

use serde::{Deserialize, Serialize};

use crate::constants::{CENTRE_P_Y, CENTRE_Q_Y};
use crate::error::Result;
use crate::forms::{
    swap_sides_test, BetweenYouAndIForm, CouplingForm, ProjectorRole, RotatingForm, Side,
};
use crate::geometry::Point2;
use crate::projector::Projector;
use crate::render::RenderTarget;

/// Preset scenes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Installation {
    /// A growing form on the left and a shrinking form on the right,
    /// swapping sides after every full turn
    #[default]
    Rotating,
    /// An ellipse, a wave and a chord wiping in and out
    BetweenYouAndI,
    /// Two rippling circles
    Coupling,
}

impl Installation {
    pub fn all() -> &'static [Installation] {
        &[
            Installation::Rotating,
            Installation::BetweenYouAndI,
            Installation::Coupling,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Installation::Rotating => "Rotating",
            Installation::BetweenYouAndI => "Between You and I",
            Installation::Coupling => "Coupling",
        }
    }

    /// Build the projectors for this installation
    pub fn projectors(&self) -> Result<Vec<Projector>> {
        let projector_position = Point2::new(0.0, CENTRE_P_Y);
        let projectors = match self {
            Installation::Rotating => vec![
                Projector::rotating(RotatingForm::growing(Side::Left)),
                Projector::rotating(RotatingForm::shrinking(Side::Right)),
            ],
            Installation::BetweenYouAndI => vec![Projector::paired(
                Box::new(ProjectorRole::new(
                    BetweenYouAndIForm::new(true, CENTRE_Q_Y),
                    projector_position,
                )),
                Box::new(BetweenYouAndIForm::new(true, CENTRE_Q_Y)),
            )?],
            Installation::Coupling => vec![Projector::paired(
                Box::new(ProjectorRole::new(CouplingForm::new(), projector_position)),
                Box::new(CouplingForm::new()),
            )?],
        };
        Ok(projectors)
    }
}

pub struct Animation {
    installation: Installation,
    projectors: Vec<Projector>,
    frame: u64,
    rotation_tick: u64,
}

impl Animation {
    pub fn new(installation: Installation) -> Result<Self> {
        let projectors = installation.projectors()?;
        log::info!(
            "{} installation with {} projector(s)",
            installation.name(),
            projectors.len()
        );
        Ok(Self {
            installation,
            projectors,
            frame: 0,
            rotation_tick: 0,
        })
    }

    pub fn installation(&self) -> Installation {
        self.installation
    }

    pub fn projectors(&self) -> &[Projector] {
        &self.projectors
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ticks since the last side swap
    pub fn rotation_tick(&self) -> u64 {
        self.rotation_tick
    }

    pub fn toggle_vertex_normals(&mut self) {
        for projector in &mut self.projectors {
            projector.toggle_vertex_normals();
        }
    }

    /// Advance one frame and render it
    pub fn advance(&mut self, target: &mut dyn RenderTarget) -> Result<()> {
        self.frame += 1;
        self.rotation_tick += 1;

        target.begin_frame(self.frame)?;
        for (index, projector) in self.projectors.iter_mut().enumerate() {
            projector.update(self.rotation_tick, index, target)?;
        }
        target.end_frame()?;

        if swap_sides_test(self.rotation_tick) {
            if self.installation == Installation::Rotating {
                log::info!("Full turn at frame {}, swapping sides", self.frame);
            }
            for projector in &mut self.projectors {
                projector.swap_sides();
            }
            self.rotation_tick = 0;
        }

        log::trace!("frame {} done ({})", self.frame, target.name());
        Ok(())
    }

    /// Advance `frames` frames
    pub fn run(&mut self, frames: u64, target: &mut dyn RenderTarget) -> Result<()> {
        for _ in 0..frames {
            self.advance(target)?;
        }
        Ok(())
    }
}
