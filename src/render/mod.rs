//! Render module - collaborators that consume per-frame geometry
//!
//! This module provides:
//! - `RenderTarget` trait implemented by anything that draws projectors
//! - `HeadlessTarget`, which only counts what it receives
//! - `JsonFrameTarget`, which captures frames for an external viewer

mod json;
mod target;

pub use json::JsonFrameTarget;
pub use target::{HeadlessTarget, RenderTarget};
