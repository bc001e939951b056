//! solid-light - Solid-light membrane animation
//!
//! Animated outlines (ellipses, wipe curves, rippling circles) are paired
//! between a projector and a screen, and each pair is joined by a ribbon
//! membrane with per-vertex normals, rebuilt every frame.
//!
//! ## Layout
//! - `curves`: parametric samplers and the wipe-curve builder
//! - `forms`: stateful outline generators driven by a tick
//! - `membrane`: ribbon triangulation and inner/outer faces
//! - `projector` / `animation`: per-frame orchestration
//! - `render`: collaborators that consume the geometry

pub mod animation;
pub mod constants;
pub mod curves;
pub mod error;
pub mod forms;
pub mod geometry;
pub mod membrane;
pub mod projector;
pub mod render;
pub mod settings;

pub use animation::{Animation, Installation};
pub use error::{Error, Result};
pub use projector::Projector;
pub use settings::DriverSettings;
