//! Forms module - stateful outline generators
//!
//! This module provides:
//! - `Form` trait for abstracting over animated outlines
//! - `RotatingForm`: growing and shrinking ellipses with wipe curves
//! - `BetweenYouAndIForm`: an ellipse, a wave and a chord sharing one wipe
//! - `CouplingForm`: two rippling circles
//! - `ProjectorRole`: any form collapsed to the projector position

mod between_you_and_i;
mod coupling;
mod projector_role;
mod rotating;
mod traits;

pub use between_you_and_i::BetweenYouAndIForm;
pub use coupling::CouplingForm;
pub use projector_role::ProjectorRole;
pub use rotating::{swap_at_tick, swap_sides_test, RotatingForm, Rotation, Side};
pub use traits::{BoxedForm, Form};
