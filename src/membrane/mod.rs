//! Membrane module - ribbon surfaces between projector and screen outlines
//!
//! This module provides:
//! - `RibbonGeometry`: triangulated ribbon with vertex normals
//! - `Membrane`: persistent inner/outer faces updated in place
//! - `NormalHelpers`: debug lines along vertex normals

mod helpers;
mod pair;
mod ribbon;

pub use helpers::{vertex_normal_lines, HelperLine, NormalHelpers};
pub use pair::Membrane;
pub use ribbon::RibbonGeometry;
