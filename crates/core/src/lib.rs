#![deny(unsafe_code)]
//! Core of quad-canvas: draws one full-view gradient quad with a GPU
//! rasterization API.
//!
//! The always-available modules are plain math and data: [`CanvasConfig`],
//! the quad's [`QuadGeometry`], the camera's [`FrameState`], and the bundled
//! gradient shader sources. The `render` feature (on by default) adds the
//! glow-backed pipeline: surface binding, program building, buffer upload,
//! and the single draw, all driven by [`render::QuadCanvas`].

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod params;
pub mod shaders;

#[cfg(feature = "render")]
pub mod render;

pub use config::{CanvasConfig, FailurePolicy};
pub use error::{CanvasError, ShaderError};
pub use frame::{FramePlan, FrameStage, FrameState};
pub use geometry::QuadGeometry;
